//! Loads the state directory and the sites of a state from the parks website.
use scraper::Html;
use tracing::instrument;
use url::Url;

use crate::{
    config::Config,
    fetch::fetch_page,
    parse::{site_links, NationalSite, StateDirectory},
};

pub async fn build_state_directory(
    client: &reqwest::Client,
    config: &Config,
) -> crate::Result<StateDirectory> {
    let page = fetch_page(client, &config.index_url()?).await?;
    let document = Html::parse_document(&page);
    let directory = StateDirectory::from_html_element(document.root_element(), config.origin())?;
    log::info!("Loaded {} states", directory.len());
    Ok(directory)
}

/// Fetches the listing page, then every on-site detail page it links to, one
/// after another. The first failure aborts the whole listing.
#[instrument(skip_all, fields(state = %state_url))]
pub async fn sites_for_state(
    client: &reqwest::Client,
    config: &Config,
    state_url: &Url,
) -> crate::Result<Vec<NationalSite>> {
    let page = fetch_page(client, state_url).await?;
    let links = {
        let document = Html::parse_document(&page);
        site_links(document.root_element(), config.origin())?
    };
    let mut sites = Vec::with_capacity(links.len());
    for link in &links {
        sites.push(site_from_detail_page(client, link).await?);
    }
    log::debug!("Got {} sites for {state_url}", sites.len());
    Ok(sites)
}

pub async fn site_from_detail_page(
    client: &reqwest::Client,
    url: &Url,
) -> crate::Result<NationalSite> {
    let page = fetch_page(client, url).await?;
    let document = Html::parse_document(&page);
    NationalSite::from_html_element(document.root_element()).map_err(|e| {
        tracing::warn!("Could not extract site from {url}: {e}");
        e.into()
    })
}
