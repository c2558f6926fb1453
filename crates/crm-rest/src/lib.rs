//! # crm-rest
//!
//! Typed client for the CRM record API: CRUD, Describe, Query, and Search
//! over the versioned REST endpoint.
//!
//! Every operation performs exactly one HTTP round trip and returns the raw
//! success body unchanged; typed views ([`QueryResult`], [`Id`]) parse on
//! top of it. Every non-2xx response surfaces as an error carrying the full
//! [`ApiFailure`] diagnostics: request URL, HTTP reason, status code, raw
//! body, and the parsed per-field error list. The client never pre-validates
//! business rules (required fields, locator shape, record existence); those
//! are discovered server-side and branch-able via
//! [`ApiError::error_code`](crm_client::ApiError).
//!
//! ## Example
//!
//! ```rust,ignore
//! use crm_rest::{Id, NextPage, QueryResult, RestClient, SObject};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), crm_rest::Error> {
//!     let client = RestClient::new(
//!         "https://na3.example-crm.com",
//!         "access_token_here",
//!     )?;
//!
//!     let mut task = SObject::new("Task");
//!     task.set_field("Priority", "High");
//!     task.set_field("Status", "In Progress");
//!
//!     let body = client.create(&task).await?;
//!     let id = Id::from_create_response(&body)?;
//!
//!     let raw = client.query("SELECT Id, Subject FROM Task").await?;
//!     let page = QueryResult::from_json(&raw)?;
//!     if let NextPage::HasMore(locator) = page.next_page() {
//!         let _next = client.query_more(&locator).await?;
//!     }
//!
//!     client.delete("Task", &id).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod id;
mod locator;
mod query;
mod sobject;

pub use client::RestClient;
pub use error::{ApiError, ApiFailure, Error, Result};
pub use id::Id;
pub use locator::QueryLocator;
pub use query::{NextPage, QueryResult};
pub use sobject::SObject;

// Re-export crm-client surface that callers configure the transport with.
pub use crm_client::{ClientConfig, ClientConfigBuilder, DEFAULT_API_VERSION};
