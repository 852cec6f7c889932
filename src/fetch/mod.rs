use std::time::Duration;

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

pub fn make_client(timeout: Duration) -> reqwest::Client {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .build()
        .expect("client creation should succeed")
}

/// Fetches a parks page and returns its body. Non-success statuses are errors.
#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let res = client.get(url.clone()).send().await?.error_for_status()?;
    let text = res.text().await?;
    log::trace!("Got text of {url} in \t {:?}", start.elapsed());
    Ok(text)
}
