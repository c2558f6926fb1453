//! HTTP response handling and error-envelope translation.

use serde::de::DeserializeOwned;

use crate::error::{ApiFailure, Error, ErrorKind, Result};

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Get the HTTP reason phrase for the status code, e.g. "Bad Request".
    ///
    /// Empty for non-standard status codes: the canonical phrase is all that
    /// is available (HTTP/2 carries no reason line at all).
    pub fn reason(&self) -> &'static str {
        self.inner.status().canonical_reason().unwrap_or("")
    }

    /// Get the final request URL.
    pub fn url(&self) -> &str {
        self.inner.url().as_str()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self.inner.text().await.map_err(Error::from)?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}

/// Extension trait for translating non-2xx responses into typed failures.
pub trait ResponseExt: Sized {
    /// Check the status code and, on a non-2xx response, consume the body
    /// into an [`ApiFailure`] error carrying the full diagnostics.
    fn check_api_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_api_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let url = self.url().to_string();
        let status = self.status();
        let reason = self.reason().to_string();
        // An unreadable body still produces a failure with the status intact.
        let body = self.text().await.unwrap_or_default();

        Err(Error::new(ErrorKind::Api(ApiFailure::from_response(
            url, status, reason, body,
        ))))
    }
}
