use super::Error;
use scraper::{ElementRef, Selector};

/// Text of the first element matching `selector` under `element`, or
/// `Error::MissingField(field)` when nothing matches.
pub fn text_from_selection(
    selector: &Selector,
    element: ElementRef<'_>,
    field: &'static str,
) -> Result<String, Error> {
    let first = element
        .select(selector)
        .next() // first match
        .ok_or_else(|| Error::missing_field(field))?;
    Ok(get_inner_text(first))
}

/// Concatenates every descendant text node, untouched.
pub fn get_inner_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_text_spans_nested_nodes() {
        let doc = Html::parse_fragment(r#"<div><a class="t">Isle <b>Royale</b></a></div>"#);
        let sel = Selector::parse("a.t").unwrap();
        let text = text_from_selection(&sel, doc.root_element(), "name").unwrap();
        assert_eq!(text, "Isle Royale");
    }

    #[test]
    fn test_missing_element_names_field() {
        let doc = Html::parse_fragment("<div></div>");
        let sel = Selector::parse("span.nope").unwrap();
        let err = text_from_selection(&sel, doc.root_element(), "phone").unwrap_err();
        assert_eq!(err, Error::MissingField("phone"));
    }
}
