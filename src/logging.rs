//! Logging setup and the log-and-fail helper.
//!
//! The crate logs through the `log` facade. Applications pick the backend; for
//! convenience [`init_logging`] installs `env_logger`, which writes to stderr and
//! reads its filter from `RUST_LOG`.

use crate::error::{Result, SdkError};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Installs `env_logger` as the global logger.
///
/// # Returns
///
/// `true` if the logger was installed, `false` if a global logger already existed.
pub fn init_logging() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .try_init()
        .is_ok()
}

/// Writes `message` to the error log and fails with it.
///
/// The message is logged once at `error` level, then returned as
/// [`SdkError::LoggedFailure`]. This never returns `Ok`, so it can end any
/// `Result`-returning function:
///
/// ```
/// use sdk_utils::logging::log_and_throw;
/// use sdk_utils::Result;
///
/// fn fee(amount: u64) -> Result<u64> {
///     if amount == 0 {
///         return log_and_throw("fee amount must be positive");
///     }
///     Ok(amount / 100)
/// }
///
/// let err = fee(0).unwrap_err();
/// assert_eq!(err.to_string(), "fee amount must be positive");
/// ```
pub fn log_and_throw<T>(message: impl Into<String>) -> Result<T> {
    let message = message.into();
    log::error!("{}", message);
    Err(SdkError::LoggedFailure(message))
}
