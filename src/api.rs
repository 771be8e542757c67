//! Synchronous client for the **BLS Public Data API (v2)**.
//!
//! Only the `timeseries/data/` endpoint is used. A request is a JSON body
//! (see [`Payload`]) posted once; the response is decoded into a
//! [`ResponseEnvelope`]. There is no retry: any transport or decoding failure
//! is returned to the caller.
//!
//! ### Notes
//! - Without a registration key the API serves fewer years per request and
//!   refuses catalog/calculation options for some series.
//! - The API answers HTTP 200 even for bad series ids; the problem is reported
//!   in `message` instead. See [`crate::render`].
//!
//! Typical usage:
//! ```no_run
//! # use bls_rs::{Client, DataProvider, QueryConfig};
//! let client = Client::new()?;
//! let payload = QueryConfig {
//!     start: Some("2017".into()),
//!     end: Some("2018".into()),
//!     series: Some("LNS14000000".into()),
//!     ..Default::default()
//! }
//! .into_payload()?;
//! let envelope = client.fetch(&payload)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
use crate::error::ProviderError;
use crate::models::{self, ResponseEnvelope};
use crate::query::Payload;
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.bls.gov/publicAPI/v2/timeseries/data/";

/// Anything that can turn a request payload into a response envelope.
pub trait DataProvider {
    fn fetch(&self, payload: &Payload) -> Result<ResponseEnvelope, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("bls_rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }
}

impl DataProvider for Client {
    fn fetch(&self, payload: &Payload) -> Result<ResponseEnvelope, ProviderError> {
        debug!(
            "POST {} series={:?} years={}..{} keyed={}",
            self.base_url,
            payload.series,
            payload.start,
            payload.end,
            payload.key.is_some()
        );
        let body = self
            .http
            .post(&self.base_url)
            .json(payload)
            .send()?
            .error_for_status()?
            .bytes()?;
        debug!("received {} bytes", body.len());
        Ok(models::decode(&body)?)
    }
}

/// Decode a previously saved API response from disk.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ResponseEnvelope, ProviderError> {
    let path = path.as_ref();
    debug!("reading saved response from {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| ProviderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(models::decode(&bytes)?)
}
