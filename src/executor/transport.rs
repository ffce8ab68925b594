//! The fetch primitive underneath `get` and `post`.
//!
//! [`Transport`] sends one request and returns whatever response came back,
//! whatever its status. [`ReqwestTransport`] is the production implementation.

use crate::config::SdkConfig;
use crate::executor::error::RequestError;
use crate::models::{HttpResponse, RequestConfig};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use std::future::Future;

/// Anything that exposes an HTTP status code.
pub trait StatusResponse {
    fn status_code(&self) -> u16;

    /// Whether the status is in the success range, 200-299.
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code())
    }
}

impl StatusResponse for reqwest::Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

impl StatusResponse for HttpResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }
}

/// Sends a single request.
///
/// Implementations must pass `config` on as given: method (GET when unset),
/// headers, body and timeout. They must not judge the status code.
pub trait Transport {
    type Response: StatusResponse;

    fn fetch(
        &self,
        url: &str,
        config: &RequestConfig,
    ) -> impl Future<Output = Result<Self::Response, RequestError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport from client-wide settings.
    pub fn from_config(config: &SdkConfig) -> Result<Self, RequestError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let value = HeaderValue::from_str(value)
                .map_err(|_| RequestError::InvalidHeader(format!("bad value for {}", name)))?;
            headers.insert(HeaderName::from_bytes(name.as_bytes())?, value);
        }

        let redirect = if config.follow_redirects {
            Policy::limited(config.max_redirects as usize)
        } else {
            Policy::none()
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(redirect)
            .danger_accept_invalid_certs(!config.validate_ssl)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn fetch(
        &self,
        url: &str,
        config: &RequestConfig,
    ) -> Result<reqwest::Response, RequestError> {
        validate_url(url)?;

        let mut req_builder = self
            .client
            .request(config.effective_method().into(), url);

        for (name, value) in &config.headers {
            req_builder = req_builder.header(name, value);
        }

        if let Some(body) = &config.body {
            req_builder = req_builder.body(body.clone());
        }

        if let Some(timeout) = config.timeout() {
            req_builder = req_builder.timeout(timeout);
        }

        Ok(req_builder.send().await?)
    }
}

/// Validates that the URL is well-formed and uses HTTP or HTTPS.
fn validate_url(url: &str) -> Result<(), RequestError> {
    let parsed = url::Url::parse(url)?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(RequestError::UnsupportedProtocol(scheme.to_string()));
    }

    Ok(())
}
