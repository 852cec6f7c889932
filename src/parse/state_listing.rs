use url::Url;

use crate::parse::Error;
use crate::static_selector;

/// Detail-page links of a state listing page, in document order.
///
/// Links that already carry a scheme (`http...`) point off-site and are
/// skipped; the rest are joined onto `origin`.
pub fn site_links(element: scraper::ElementRef, origin: &Url) -> Result<Vec<Url>, Error> {
    static_selector!(PARKS_LIST_SELECTOR <- "ul#list_parks");
    static_selector!(ANCHOR_SELECTOR <- "a");

    let Some(list) = element.select(&PARKS_LIST_SELECTOR).next() else {
        return Err(Error::html_parse_error("Parks list element not found"));
    };

    let mut links = Vec::new();
    for anchor in list.select(&ANCHOR_SELECTOR) {
        let href = anchor
            .attr("href")
            .ok_or_else(|| Error::html_parse_error("park <a> does not have a href attr"))?;
        if href.contains("http") {
            log::debug!("skipping external link {href}");
            continue;
        }
        let Ok(url) = origin.join(href) else {
            return Err(Error::HtmlParse(format!("Park url `{href}` is invalid")));
        };
        links.push(url);
    }
    Ok(links)
}
