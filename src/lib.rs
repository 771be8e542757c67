//! bls_rs
//!
//! A small Rust library for querying the U.S. Bureau of Labor Statistics
//! public data API and printing a short report about a series. Pairs with the
//! `bls` CLI.
//!
//! ### Features
//! - Build a timeseries request from a series id and a year range
//! - Fetch it live, or decode a previously saved JSON response
//! - Print catalog metadata, the latest period, its footnotes and its
//!   net/percent change calculations
//!
//! All numeric-looking values (years, observations, changes) are kept as the
//! exact strings the API sent.
//!
//! ### Example
//! ```no_run
//! use bls_rs::{Client, DataProvider, QueryConfig, render};
//!
//! let payload = QueryConfig {
//!     start: Some("2017".into()),
//!     end: Some("2018".into()),
//!     series: Some("LNS14000000".into()),
//!     catalog: true,
//!     ..Default::default()
//! }
//! .into_payload()?;
//! let envelope = Client::new()?.fetch(&payload)?;
//! render(&envelope, &mut std::io::stdout())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod query;
pub mod render;

pub use api::{Client, DataProvider, parse_file};
pub use error::{ConfigError, DecodeError, ProviderError, RenderError};
pub use models::{ResponseEnvelope, decode, encode};
pub use query::{Payload, QueryConfig};
pub use render::render;
