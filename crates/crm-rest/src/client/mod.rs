//! CRM record-API client.
//!
//! `RestClient` wraps [`CrmClient`] from `crm-client` and exposes one method
//! per API operation. Each method is a thin protocol translator: it builds
//! the versioned URL, performs exactly one HTTP round trip, and returns the
//! raw success body (or a typed failure). No business logic lives here.

use crm_client::{ClientConfig, CrmClient};

use crate::error::Result;

mod crud;
mod describe;
mod query;
mod search;

/// Typed client for the CRM record API.
///
/// # Example
///
/// ```rust,ignore
/// use crm_rest::{Id, QueryResult, NextPage, RestClient, SObject};
///
/// let client = RestClient::new("https://na3.example-crm.com", "access_token")?;
///
/// // Create
/// let mut task = SObject::new("Task");
/// task.set_field("Priority", "High");
/// let body = client.create(&task).await?;
/// let id = Id::from_create_response(&body)?;
///
/// // Retrieve
/// let raw = client.retrieve("Task", &id, &["Priority", "Status"]).await?;
///
/// // Query with caller-driven pagination
/// let mut page = QueryResult::from_json(&client.query("SELECT Id FROM Task").await?)?;
/// while let NextPage::HasMore(locator) = page.next_page() {
///     page = QueryResult::from_json(&client.query_more(&locator).await?)?;
/// }
///
/// // Delete
/// client.delete("Task", &id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    client: CrmClient,
}

impl RestClient {
    /// Create a new client with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = CrmClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = CrmClient::with_config(instance_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a client from an existing CrmClient.
    pub fn from_client(client: CrmClient) -> Self {
        Self { client }
    }

    /// Get the underlying CrmClient.
    pub fn inner(&self) -> &CrmClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }
}
