use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    /// A detail page lacks the element carrying this field.
    MissingField(&'static str),
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::MissingField(field) => write!(f, "Missing Field: no `{field}` element on page"),
        }
    }
}

impl std::error::Error for Error {}
