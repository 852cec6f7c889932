//! Client for the MapQuest radius search, used to list places near a site.
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::{config::ApiKey, fetch::make_client, parse::NationalSite};

pub const RADIUS: u32 = 10;
pub const MAX_MATCHES: u32 = 10;
pub const AMBIGUITIES: &str = "ignore";
pub const OUT_FORMAT: &str = "json";

#[derive(Debug)]
pub enum NearbyPlacesError {
    Request(reqwest::Error),
    /// The API answered with a non-success status.
    Status(reqwest::StatusCode),
    Json(serde_json::Error),
    /// `searchResults` was absent or empty.
    NoResults,
}

impl From<reqwest::Error> for NearbyPlacesError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for NearbyPlacesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for NearbyPlacesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // reqwest errors embed the url, which carries the key
            Self::Request(e) if e.is_timeout() => write!(f, "Nearby places request timed out"),
            Self::Request(_) => write!(f, "Nearby places request failed"),
            Self::Status(status) => write!(f, "Nearby places request failed with status {status}"),
            Self::Json(e) => write!(f, "Nearby places response is not valid json: {e}"),
            Self::NoResults => write!(f, "Nearby places response has no search results"),
        }
    }
}

impl std::error::Error for NearbyPlacesError {}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchResults", default)]
    search_results: Option<Vec<NearbyPlace>>,
}

impl SearchResponse {
    pub fn into_results(self) -> Result<Vec<NearbyPlace>, NearbyPlacesError> {
        match self.search_results {
            Some(results) if !results.is_empty() => Ok(results),
            _ => Err(NearbyPlacesError::NoResults),
        }
    }
}

/// A search result. Every field is optional; accessors fall back to a
/// placeholder such as `"no address"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NearbyPlace {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

impl NearbyPlace {
    pub fn name(&self) -> String {
        value_or(self.name.as_ref(), "no name")
    }

    pub fn category(&self) -> String {
        self.field_or("group_sic_code_name", "no category")
    }

    pub fn address(&self) -> String {
        self.field_or("address", "no address")
    }

    pub fn state(&self) -> String {
        self.field_or("state", "no state")
    }

    pub fn postal_code(&self) -> String {
        self.field_or("postal_code", "no postal code")
    }

    fn field_or(&self, key: &str, default: &str) -> String {
        value_or(self.fields.get(key), default)
    }
}

/// Strings as-is, other scalars as json text; null and "" count as missing.
fn value_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl Display for NearbyPlace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}): {}, {} {}",
            self.name(),
            self.category(),
            self.address(),
            self.state(),
            self.postal_code()
        )
    }
}

pub struct PlacesClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: ApiKey,
}

impl PlacesClient {
    pub const fn new(client: reqwest::Client, endpoint: Url, api_key: ApiKey) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            make_client(config.timeout()),
            config.radius_url().clone(),
            config.api_key().clone(),
        )
    }

    fn search_url(&self, origin: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("radius", &RADIUS.to_string())
            .append_pair("maxMatches", &MAX_MATCHES.to_string())
            .append_pair("ambiguities", AMBIGUITIES)
            .append_pair("outFormat", OUT_FORMAT)
            .append_pair("key", self.api_key.expose())
            .append_pair("origin", origin);
        url
    }

    /// Radius search around `site`'s address.
    #[instrument(skip_all, fields(origin = %site.address()))]
    pub async fn nearby_places(
        &self,
        site: &NationalSite,
    ) -> Result<SearchResponse, NearbyPlacesError> {
        let res = self
            .client
            .get(self.search_url(site.address()))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(NearbyPlacesError::Status(res.status()));
        }
        let text = res.text().await?;
        let response: SearchResponse = serde_json::from_str(&text)?;
        log::debug!(
            "Got {} nearby places",
            response.search_results.as_ref().map_or(0, Vec::len)
        );
        Ok(response)
    }
}

impl fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    fn isle_royale() -> NationalSite {
        NationalSite::new(
            "National Park",
            "Isle Royale",
            "Houghton, MI",
            "49931",
            "(906) 482-0984",
        )
    }

    fn client_for(server: &MockServer) -> PlacesClient {
        PlacesClient::new(
            make_client(Duration::from_secs(5)),
            server.url("/search/v2/radius").parse().unwrap(),
            ApiKey::new("test-key"),
        )
    }

    #[test]
    fn test_search_url_params() {
        let client = PlacesClient::new(
            make_client(Duration::from_secs(5)),
            "http://www.mapquestapi.com/search/v2/radius".parse().unwrap(),
            ApiKey::new("abc"),
        );
        let url = client.search_url("Houghton, MI");
        let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["radius"], "10");
        assert_eq!(pairs["maxMatches"], "10");
        assert_eq!(pairs["ambiguities"], "ignore");
        assert_eq!(pairs["outFormat"], "json");
        assert_eq!(pairs["key"], "abc");
        assert_eq!(pairs["origin"], "Houghton, MI");
        assert!(!format!("{client:?}").contains("abc"));
    }

    #[test]
    fn test_field_defaults() {
        let place: NearbyPlace = serde_json::from_value(json!({
            "name": "Keweenaw Coffee",
            "fields": {
                "address": "101 Shelden Ave",
                "state": null,
                "postal_code": 49931
            }
        }))
        .unwrap();
        assert_eq!(
            place.to_string(),
            "- Keweenaw Coffee (no category): 101 Shelden Ave, no state 49931"
        );

        let bare: NearbyPlace = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            bare.to_string(),
            "- no name (no category): no address, no state no postal code"
        );
    }

    #[test]
    fn test_empty_results() {
        let response: SearchResponse = serde_json::from_value(json!({"searchResults": []})).unwrap();
        assert!(matches!(
            response.into_results(),
            Err(NearbyPlacesError::NoResults)
        ));
        let response: SearchResponse =
            serde_json::from_value(json!({"info": {"statuscode": 403}})).unwrap();
        assert!(matches!(
            response.into_results(),
            Err(NearbyPlacesError::NoResults)
        ));
    }

    #[tokio::test]
    async fn test_nearby_places() {
        let server = MockServer::start_async().await;
        let search = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search/v2/radius")
                    .query_param("origin", "Houghton, MI")
                    .query_param("key", "test-key")
                    .query_param("radius", "10");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "searchResults": [
                            {
                                "name": "Houghton County Museum",
                                "fields": {
                                    "group_sic_code_name": "Museums",
                                    "address": "53102 Hwy M-26",
                                    "state": "MI",
                                    "postal_code": "49913"
                                }
                            },
                            { "name": "Unnamed Lot", "fields": {} }
                        ]
                    }));
            })
            .await;
        let client = client_for(&server);
        let results = client
            .nearby_places(&isle_royale())
            .await
            .unwrap()
            .into_results()
            .unwrap();
        search.assert_async().await;
        let lines: Vec<String> = results.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "- Houghton County Museum (Museums): 53102 Hwy M-26, MI 49913",
                "- Unnamed Lot (no category): no address, no state no postal code",
            ]
        );
    }

    #[tokio::test]
    async fn test_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search/v2/radius");
                then.status(403).body("The AppKey submitted with this request is invalid.");
            })
            .await;
        let err = client_for(&server)
            .nearby_places(&isle_royale())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NearbyPlacesError::Status(status) if status == reqwest::StatusCode::FORBIDDEN
        ));
        assert_eq!(
            err.to_string(),
            "Nearby places request failed with status 403 Forbidden"
        );
    }

    #[tokio::test]
    async fn test_not_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search/v2/radius");
                then.status(200).body("<html>oops</html>");
            })
            .await;
        let err = client_for(&server)
            .nearby_places(&isle_royale())
            .await
            .unwrap_err();
        assert!(matches!(err, NearbyPlacesError::Json(_)));
    }
}
