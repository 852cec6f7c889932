use std::collections::BTreeMap;

use url::Url;

use crate::parse::{normalize_state_name, Error};
use crate::static_selector;

/// Lowercase state name -> that state's listing page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StateDirectory {
    states: BTreeMap<String, Url>,
}

impl StateDirectory {
    /// Reads every `<area>` of the "find a park" map: `alt` is the state name,
    /// `href` is joined onto `origin`.
    pub fn from_html_element(element: scraper::ElementRef, origin: &Url) -> Result<Self, Error> {
        static_selector!(AREA_SELECTOR <- "area");

        let mut states = BTreeMap::new();
        for area in element.select(&AREA_SELECTOR) {
            let name = area
                .attr("alt")
                .ok_or_else(|| Error::html_parse_error("state <area> does not have an alt attr"))?;
            let href = area
                .attr("href")
                .ok_or_else(|| Error::html_parse_error("state <area> does not have a href attr"))?;
            let Ok(url) = origin.join(href) else {
                return Err(Error::HtmlParse(format!("State url `{href}` is invalid")));
            };
            states.insert(normalize_state_name(name), url);
        }

        if states.is_empty() {
            return Err(Error::html_parse_error("no state map areas found"));
        }
        Ok(Self { states })
    }

    /// Case and surrounding whitespace of `name` are ignored.
    pub fn get(&self, name: &str) -> Option<&Url> {
        self.states.get(&normalize_state_name(name))
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.states.keys()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}

impl FromIterator<(String, Url)> for StateDirectory {
    fn from_iter<T: IntoIterator<Item = (String, Url)>>(iter: T) -> Self {
        Self {
            states: iter
                .into_iter()
                .map(|(name, url)| (normalize_state_name(&name), url))
                .collect(),
        }
    }
}
