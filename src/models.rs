use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// Status string the API uses for a request it was able to process.
pub const STATUS_SUCCEEDED: &str = "REQUEST_SUCCEEDED";

/// Top-level structure of a timeseries response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "status", alias = "Status", default)]
    pub status: String,
    /// Milliseconds the server spent on the request. Informational only.
    #[serde(
        rename = "responseTime",
        alias = "ResponseTime",
        default,
        deserialize_with = "de_u64_from_string_or_number"
    )]
    pub response_time: u64,
    /// Server messages, e.g. "No Data Available for Series ... Year: 2018".
    #[serde(
        rename = "message",
        alias = "Message",
        alias = "messages",
        default,
        deserialize_with = "de_null_as_default"
    )]
    pub messages: Vec<String>,
    #[serde(rename = "Results", alias = "results", default, deserialize_with = "de_null_as_default")]
    pub results: SeriesCollection,
}

impl ResponseEnvelope {
    pub fn succeeded(&self) -> bool {
        self.status == STATUS_SUCCEEDED
    }
}

/// Serde helper: parse `u64` from either a JSON number or a string.
/// Hand-edited fixtures occasionally quote `responseTime`.
fn de_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v).map_err(|_| E::custom("negative response time"))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<u64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

/// Serde helper: read an explicit `null` the same as a missing key.
fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `Results` object. Only the first series is ever reported on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesCollection {
    #[serde(alias = "Series", default, deserialize_with = "de_null_as_default")]
    pub series: Vec<SeriesData>,
}

/// Data for a single series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    #[serde(rename = "seriesID", alias = "SeriesID", alias = "seriesId", default)]
    pub series_id: String,
    /// Present only when catalog data was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
    /// Observations in the order the API returned them (newest first).
    #[serde(rename = "data", alias = "Data", default, deserialize_with = "de_null_as_default")]
    pub periods: Vec<Period>,
}

/// Descriptive series metadata. Not every series fills every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    #[serde(rename = "series_title")]
    pub title: String,
    #[serde(rename = "series_id")]
    pub id: String,
    pub seasonality: String,
    pub survey_name: String,
    pub survey_abbreviation: String,
    pub measure_data_type: String,
    pub area: String,
    pub area_type: String,
}

/// One observation, usually a month.
///
/// Every value is kept as the exact string the API sent; `"3.50"` stays
/// `"3.50"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub year: String,
    /// Period code such as `M01`, `Q02` or `M13` (annual average).
    #[serde(rename = "period", default)]
    pub period_number: String,
    #[serde(rename = "periodName", default)]
    pub period_name: String,
    /// `"true"` on the most recent observation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    #[serde(default)]
    pub value: String,
    /// Always sent by the API. `[{}]` means "no footnotes".
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub footnotes: Vec<Footnote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculations: Option<Calculation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Footnote {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            text: Some(text.into()),
        }
    }
}

/// Net and percent change calculations for a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    #[serde(rename = "net_changes", default)]
    pub net_change: Change,
    #[serde(rename = "pct_changes", default)]
    pub percent_change: Change,
}

/// Change over trailing 1, 3, 6 and 12 month windows. The wire keys are the
/// bare numerals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Change {
    #[serde(rename = "1")]
    pub one_month: String,
    #[serde(rename = "3")]
    pub three_months: String,
    #[serde(rename = "6")]
    pub six_months: String,
    #[serde(rename = "12")]
    pub twelve_months: String,
}

/// Decode a response body (live or saved) into an envelope.
pub fn decode(bytes: &[u8]) -> Result<ResponseEnvelope, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode an envelope back into the wire schema as pretty JSON.
pub fn encode(envelope: &ResponseEnvelope) -> Result<Vec<u8>, DecodeError> {
    Ok(serde_json::to_vec_pretty(envelope)?)
}
