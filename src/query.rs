//! Request construction for the timeseries endpoint.

use crate::error::ConfigError;
use serde::Serialize;

/// Options gathered from the command line (or built by hand when used as a library).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub series: Option<String>,
    /// Request the annual average of monthly values.
    pub annual_average: bool,
    /// Request net/percent change calculations.
    pub calculations: bool,
    /// Request series catalog data.
    pub catalog: bool,
    /// Registration key. The API still answers without one, with lower limits.
    pub key: Option<String>,
}

/// JSON body posted to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    #[serde(rename = "seriesid")]
    pub series: Vec<String>,
    #[serde(rename = "startyear")]
    pub start: String,
    #[serde(rename = "endyear")]
    pub end: String,
    pub catalog: bool,
    pub calculations: bool,
    #[serde(rename = "annualaverage")]
    pub annual_average: bool,
    #[serde(rename = "registrationkey", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fn required(v: Option<String>, flag: &'static str) -> Result<String, ConfigError> {
    v.filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingFlag(flag))
}

impl QueryConfig {
    /// Assemble the request body. Start year, end year and series are required;
    /// the first missing one is reported.
    pub fn into_payload(self) -> Result<Payload, ConfigError> {
        let start = required(self.start, "start")?;
        let end = required(self.end, "end")?;
        let series = required(self.series, "series")?;
        Ok(Payload {
            // The API always takes a list of series, even for one.
            series: vec![series],
            start,
            end,
            catalog: self.catalog,
            calculations: self.calculations,
            annual_average: self.annual_average,
            key: self.key.filter(|k| !k.is_empty()),
        })
    }
}
