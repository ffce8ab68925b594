//! Small SDK helpers.
//!
//! This crate bundles the conveniences an SDK needs around its network calls:
//!
//! - **logging**: [`log_and_throw`] logs a message at `error` level and fails with it
//! - **json**: [`parse_json`] parses JSON text, keeping integer literals at full
//!   precision as [`BigInt`](num_bigint::BigInt)s
//! - **executor**: [`get`] and [`post`] send a request and return the response only
//!   when its status is 2xx
//! - **config**: client-wide settings (timeout, redirects, TLS validation, headers)
//! - **models**: request options and buffered responses
//!
//! # Usage
//!
//! ```no_run
//! use sdk_utils::{get, parse_json, Result};
//!
//! # async fn example() -> Result<()> {
//! sdk_utils::logging::init_logging();
//!
//! let response = get("https://api.example.com/testnet/latest/block", None).await?;
//! let text = response.text().await.map_err(sdk_utils::executor::RequestError::from)?;
//! let block = parse_json(&text)?;
//! println!("height = {}", block["header"]["metadata"]["height"]);
//! # Ok(())
//! # }
//! ```
//!
//! Errors are never caught or retried inside the crate; every failure is
//! returned to the caller as an [`SdkError`].

pub mod config;
pub mod error;
pub mod executor;
pub mod json;
pub mod logging;
pub mod models;

pub use error::{Result, SdkError};
pub use executor::{get, post, HttpClient};
pub use json::{parse_json, Value};
pub use logging::log_and_throw;
pub use models::{HttpMethod, HttpResponse, RequestConfig};
