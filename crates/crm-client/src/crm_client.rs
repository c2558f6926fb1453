//! High-level CRM client: credentials plus HTTP infrastructure.
//!
//! `CrmClient` binds an instance URL, a session access token, and the API
//! version, and provides authenticated request builders and raw-body helpers
//! for the typed operation layer to build on.
//!
//! The access token is redacted in Debug output.

use serde::Serialize;
use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestBuilder;
use crate::response::Response;
use crate::DEFAULT_API_VERSION;

/// High-level CRM API client.
///
/// Stateless apart from its fixed configuration; cloning is cheap and the
/// client is safe for concurrent use.
#[derive(Clone)]
pub struct CrmClient {
    http: HttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for CrmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrmClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl CrmClient {
    /// Create a new client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g., "62.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// A path starting with `/` is appended to the instance URL unmodified;
    /// a full URL passes through. Server-issued locator paths go through
    /// here so their own version segment is preserved.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Build a versioned REST API URL for a path.
    ///
    /// Example: `rest_url("sobjects/Contact/")` ->
    /// `{instance}/services/data/v62.0/sobjects/Contact/`
    pub fn rest_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!(
            "{}/services/data/v{}/{}",
            self.instance_url, self.api_version, path
        )
    }

    // =========================================================================
    // Authenticated request builders
    // =========================================================================

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).bearer_auth(&self.access_token)
    }

    /// Create a POST request builder with authentication.
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.http.post(url).bearer_auth(&self.access_token)
    }

    /// Create a DELETE request builder with authentication.
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.http.delete(url).bearer_auth(&self.access_token)
    }

    /// Execute a request and return the checked response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request).await
    }

    // =========================================================================
    // Raw-body helpers
    // =========================================================================

    /// GET request returning the raw response body.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.execute(self.get(url)).await?;
        response.text().await
    }

    /// POST request with a JSON body, returning the raw response body.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post_text<B: Serialize>(&self, url: &str, body: &B) -> Result<String> {
        let request = self.post(url).json(body)?;
        let response = self.http.execute(request).await?;
        response.text().await
    }

    /// DELETE request. Success (2xx, including 204 No Content) yields `()`.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn delete_request(&self, url: &str) -> Result<()> {
        self.http.execute(self.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = CrmClient::new("https://na3.example-crm.com", "token123").unwrap();

        // Absolute paths
        assert_eq!(
            client.url("/services/data/v21.0/query/wrong"),
            "https://na3.example-crm.com/services/data/v21.0/query/wrong"
        );

        // Relative paths
        assert_eq!(
            client.url("services/oauth2/userinfo"),
            "https://na3.example-crm.com/services/oauth2/userinfo"
        );

        // Full URLs pass through
        assert_eq!(
            client.url("https://other.example.com/path"),
            "https://other.example.com/path"
        );

        // Versioned REST URL
        assert_eq!(
            client.rest_url("sobjects/Contact/"),
            "https://na3.example-crm.com/services/data/v62.0/sobjects/Contact/"
        );
    }

    #[test]
    fn test_api_version_override() {
        let client = CrmClient::new("https://na3.example-crm.com", "token")
            .unwrap()
            .with_api_version("21.0");

        assert_eq!(client.api_version(), "21.0");
        assert_eq!(
            client.rest_url("sobjects/"),
            "https://na3.example-crm.com/services/data/v21.0/sobjects/"
        );
    }

    #[test]
    fn test_trailing_slash_handling() {
        let client = CrmClient::new("https://na3.example-crm.com/", "token").unwrap();

        assert_eq!(client.instance_url(), "https://na3.example-crm.com");
        assert_eq!(
            client.rest_url("sobjects/"),
            "https://na3.example-crm.com/services/data/v62.0/sobjects/"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = CrmClient::new("https://na3.example-crm.com", "secret-token").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-token"));
    }
}
