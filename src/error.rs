use thiserror::Error;

/// A required CLI input was not supplied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required flag --{0}")]
    MissingFlag(&'static str),
}

/// Bytes could not be decoded into (or encoded from) a response envelope.
#[derive(Debug, Error)]
#[error("malformed response: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// Failure raised by a data provider while producing a response envelope.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http request failed")]
    Http(#[from] reqwest::Error),
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Terminal outcomes of rendering a report. Diagnostic text supplied by the
/// server has already been written to the output when these are returned.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("server reported status {status}")]
    ServerStatus { status: String },
    #[error("invalid series: {message}")]
    InvalidSeries { message: String },
    #[error("response contains no series")]
    MissingSeries,
    #[error("series {series_id} contains no periods")]
    MissingPeriod { series_id: String },
    #[error("could not write report")]
    Io(#[from] std::io::Error),
}
