use std::fmt::{self, Display, Formatter};

use crate::parse::text_from_selection::text_from_selection;
use crate::parse::Error;
use crate::static_selector;

/// One site as described by its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalSite {
    category: String,
    name: String,
    address: String, // "Houghton, MI"
    zipcode: String,
    phone: String,
}

impl NationalSite {
    #[cfg(test)]
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        zipcode: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            address: address.into(),
            zipcode: zipcode.into(),
            phone: phone.into(),
        }
    }

    pub fn from_html_element(element: scraper::ElementRef) -> Result<Self, Error> {
        static_selector!(NAME_SELECTOR <- "a.Hero-title");
        static_selector!(CATEGORY_SELECTOR <- "span.Hero-designation");
        static_selector!(LOCALITY_SELECTOR <- r#"span[itemprop="addressLocality"]"#);
        static_selector!(REGION_SELECTOR <- r#"span[itemprop="addressRegion"]"#);
        static_selector!(ZIPCODE_SELECTOR <- r#"span[itemprop="postalCode"]"#);
        static_selector!(PHONE_SELECTOR <- r#"span[itemprop="telephone"]"#);

        let name = text_from_selection(&NAME_SELECTOR, element, "name")?;
        let category = text_from_selection(&CATEGORY_SELECTOR, element, "category")?;
        let locality = text_from_selection(&LOCALITY_SELECTOR, element, "address locality")?;
        let region = text_from_selection(&REGION_SELECTOR, element, "address region")?;
        let zipcode = text_from_selection(&ZIPCODE_SELECTOR, element, "zipcode")?;
        let phone = text_from_selection(&PHONE_SELECTOR, element, "phone")?;

        Ok(Self {
            category,
            name,
            address: format!("{locality}, {region}"),
            zipcode: zipcode.trim().to_string(),
            phone: phone.trim().to_string(),
        })
    }

    #[cfg(test)]
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    #[cfg(test)]
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    #[cfg(test)]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// `"<name> (<category>): <address> <zipcode>"`
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl Display for NationalSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse_example(file: &str) -> Result<NationalSite, Error> {
        let html = fs::read_to_string(format!("./src/parse/html_examples/{file}")).unwrap();
        let document = scraper::Html::parse_document(&html);
        NationalSite::from_html_element(document.root_element())
    }

    #[test]
    fn test_from_html_element() {
        let site = parse_example("isro.html").expect("The example html should be valid");
        assert_eq!(site.name(), "Isle Royale");
        assert_eq!(site.category(), "National Park");
        assert_eq!(site.address(), "Houghton, MI");
        assert_eq!(site.zipcode(), "49931");
        assert_eq!(site.phone(), "(906) 482-0984");
        assert_eq!(site.info(), "Isle Royale (National Park): Houghton, MI 49931");
    }

    #[test]
    fn test_verbatim_zip_and_phone() {
        let site = parse_example("yell.html").expect("The example html should be valid");
        assert_eq!(site.zipcode(), "82190-0168");
        assert_eq!(site.phone(), "307-344-7381");
        assert_eq!(
            site.info(),
            "Yellowstone (National Park): Yellowstone National Park, WY 82190-0168"
        );
    }

    #[test]
    fn test_empty_category() {
        let site = parse_example("blank_category.html").expect("The example html should be valid");
        assert_eq!(site.category(), "");
        assert_eq!(site.zipcode(), "02109");
        assert_eq!(site.phone(), "(616) 319-7906");
        assert_eq!(site.info(), "Boston Harbor Islands (): Boston, MA 02109");
    }

    #[test]
    fn test_missing_zipcode() {
        assert_eq!(
            parse_example("missing_zip.html"),
            Err(Error::MissingField("zipcode"))
        );
    }
}
