use std::{env, fmt, time::Duration};

use url::Url;

use crate::{Error, Result};

pub const DEFAULT_ORIGIN: &str = "https://www.nps.gov";
pub const DEFAULT_RADIUS_URL: &str = "http://www.mapquestapi.com/search/v2/radius";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Geosearch credential. Never printed, `Debug` included.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    origin: Url,
    radius_url: Url,
    api_key: ApiKey,
    timeout: Duration,
}

impl Config {
    pub fn new(origin: Url, radius_url: Url, api_key: ApiKey) -> Self {
        Self {
            origin,
            radius_url,
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `MAPQUEST_API_KEY` (required), `NPS_ORIGIN`, `MAPQUEST_RADIUS_URL`
    /// and `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, with variables resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = match lookup("MAPQUEST_API_KEY") {
            Some(key) if !key.trim().is_empty() => ApiKey::new(key.trim()),
            _ => return Err(Error::config_error("env var MAPQUEST_API_KEY not set")),
        };
        let origin = url_var(&lookup, "NPS_ORIGIN", DEFAULT_ORIGIN)?;
        let radius_url = url_var(&lookup, "MAPQUEST_RADIUS_URL", DEFAULT_RADIUS_URL)?;
        let timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(secs) => secs.trim().parse::<u64>().map_err(|e| {
                Error::config_error(format!("HTTP_TIMEOUT_SECS `{secs}` is invalid: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self::new(origin, radius_url, api_key).with_timeout(Duration::from_secs(timeout)))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn origin(&self) -> &Url {
        &self.origin
    }

    pub const fn radius_url(&self) -> &Url {
        &self.radius_url
    }

    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn index_url(&self) -> Result<Url> {
        self.origin
            .join("/findapark/index.htm")
            .map_err(|e| Error::config_error(format!("bad parks origin: {e}")))
    }
}

fn url_var(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> Result<Url> {
    let raw = lookup(name).unwrap_or_else(|| default.to_string());
    Url::parse(raw.trim()).map_err(|e| Error::config_error(format!("{name} `{raw}` is invalid: {e}")))
}
