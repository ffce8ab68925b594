//! Status-checked HTTP GET and POST.
//!
//! [`get`] and [`post`] send one request through a [`Transport`] and hand back the
//! response only when its status is in 200-299. Any other status becomes
//! [`SdkError::Http`]; transport failures come back as [`SdkError::Transport`].
//! Nothing is retried.
//!
//! The free functions build a [`ReqwestTransport`] from the global
//! [configuration](crate::config) on every call. Use [`HttpClient`] to supply a
//! transport of your own.

pub mod error;
pub mod transport;

pub use error::RequestError;
pub use transport::{ReqwestTransport, StatusResponse, Transport};

use crate::config::{get_config, SdkConfig};
use crate::error::{Result, SdkError};
use crate::models::{HttpMethod, RequestConfig};

/// Sends GET requests (or whatever method the configuration names) and POST
/// requests through a transport, rejecting non-2xx statuses.
#[derive(Debug, Clone)]
pub struct HttpClient<T = ReqwestTransport> {
    transport: T,
}

impl HttpClient<ReqwestTransport> {
    /// Builds a client on a reqwest transport configured from `config`.
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        Ok(Self::new(ReqwestTransport::from_config(config)?))
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues a request with `config` passed through unmodified.
    ///
    /// Without a configuration, or with one that leaves `method` unset, a GET is sent.
    ///
    /// # Returns
    ///
    /// The unconsumed response if its status is 2xx, `SdkError::Http` carrying
    /// the status and `url` otherwise, or the transport's error.
    pub async fn get(&self, url: &str, config: Option<RequestConfig>) -> Result<T::Response> {
        let config = config.unwrap_or_default();
        self.send(url, &config).await
    }

    /// Issues a POST. The method in `config` is overwritten with POST.
    ///
    /// Status handling is the same as [`HttpClient::get`].
    pub async fn post(&self, url: &str, mut config: RequestConfig) -> Result<T::Response> {
        config.method = Some(HttpMethod::POST);
        self.send(url, &config).await
    }

    async fn send(&self, url: &str, config: &RequestConfig) -> Result<T::Response> {
        let method = config.effective_method();
        log::debug!("{} {}", method, url);

        let response = self.transport.fetch(url, config).await?;
        check_status(response, method, url)
    }
}

fn check_status<R: StatusResponse>(response: R, method: HttpMethod, url: &str) -> Result<R> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status_code();
    log::warn!("{} {} returned status {}", method, url, status);
    Err(SdkError::Http {
        status,
        method,
        url: url.to_string(),
    })
}

/// Issues a GET with the global configuration.
///
/// # Examples
///
/// ```no_run
/// use sdk_utils::executor::get;
///
/// # async fn example() -> sdk_utils::Result<()> {
/// let response = get("https://api.example.com/latest/height", None).await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
pub async fn get(url: &str, config: Option<RequestConfig>) -> Result<reqwest::Response> {
    HttpClient::<ReqwestTransport>::from_config(&get_config())?.get(url, config).await
}

/// Issues a POST with the global configuration. The configured method is ignored.
///
/// # Examples
///
/// ```no_run
/// use sdk_utils::executor::post;
/// use sdk_utils::models::RequestConfig;
///
/// # async fn example() -> sdk_utils::Result<()> {
/// let config = RequestConfig::new()
///     .header("Content-Type", "application/json")
///     .body(r#"{"transaction":"at1..."}"#);
/// let response = post("https://api.example.com/transaction/broadcast", config).await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
pub async fn post(url: &str, config: RequestConfig) -> Result<reqwest::Response> {
    HttpClient::<ReqwestTransport>::from_config(&get_config())?.post(url, config).await
}
