//! Typed view of a query result page and its continuation state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::locator::QueryLocator;

/// One page of query results.
///
/// Operations return raw bodies; this is the typed view for callers that
/// want to drive pagination. Parse a page with [`QueryResult::from_json`],
/// then follow [`QueryResult::next_page`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult {
    /// Total number of records matching the query, across all pages.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// Whether this page completes the result set.
    pub done: bool,

    /// Server-issued path for the next page; present iff `done` is false.
    #[serde(rename = "nextRecordsUrl", skip_serializing_if = "Option::is_none")]
    pub next_records_url: Option<String>,

    /// The records on this page.
    pub records: Vec<Value>,
}

/// Continuation state of a query result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// All records have been returned.
    Done,
    /// More records remain; feed the locator to `query_more`.
    HasMore(QueryLocator),
}

impl QueryResult {
    /// Parse a raw query response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(crm_client::Error::from)
            .map_err(Into::into)
    }

    /// The continuation state of this page.
    pub fn next_page(&self) -> NextPage {
        match &self.next_records_url {
            Some(url) if !self.done => NextPage::HasMore(QueryLocator::new(url.clone())),
            _ => NextPage::Done,
        }
    }
}
