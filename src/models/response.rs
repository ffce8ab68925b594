//! In-memory HTTP response.
//!
//! [`HttpResponse`] is a fully buffered response. `get`/`post` on the reqwest
//! transport hand back the unconsumed `reqwest::Response`; call
//! [`HttpResponse::from_reqwest`] to read it into memory.

use crate::json::ParseError;
use std::collections::HashMap;

/// A buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// Reason phrase for the status code.
    pub status_text: String,

    /// Response headers. Names are lower-case when read from reqwest.
    pub headers: HashMap<String, String>,

    /// Response body as raw bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HttpResponse with the given status code and text.
    pub fn new(status_code: u16, status_text: String) -> Self {
        Self {
            status_code,
            status_text,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Reads a reqwest response to the end.
    ///
    /// Header values that are not valid UTF-8 are skipped.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.as_str().to_string(), value_str.to_string());
            }
        }
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            headers,
            body,
        })
    }

    /// Parses the body with [`parse_json`](crate::json::parse_json).
    ///
    /// The body must be valid UTF-8; otherwise this fails with
    /// [`ParseError::InvalidUtf8`] instead of substituting characters.
    pub fn json(&self) -> crate::error::Result<crate::json::Value> {
        let text = std::str::from_utf8(&self.body).map_err(|e| ParseError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(crate::json::parse_json(text)?)
    }

    /// Sets the response body.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }
}
