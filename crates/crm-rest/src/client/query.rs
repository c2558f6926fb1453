//! SOQL query operations with locator-driven pagination.

use tracing::instrument;

use crate::error::Result;
use crate::locator::QueryLocator;

impl super::RestClient {
    /// Execute a SOQL query.
    ///
    /// Returns the raw body of the first page: `records`, `totalSize`,
    /// `done`, and (when more pages remain) `nextRecordsUrl`. Parse it with
    /// [`QueryResult::from_json`](crate::QueryResult::from_json) to drive
    /// pagination; this client never auto-paginates.
    ///
    /// Values interpolated into the SOQL text from user input must be
    /// escaped with `crm_client::security::soql::escape_string` first.
    #[instrument(skip(self))]
    pub async fn query(&self, soql: &str) -> Result<String> {
        let url = self
            .client
            .rest_url(&format!("query/?q={}", urlencoding::encode(soql)));
        self.client.get_text(&url).await.map_err(Into::into)
    }

    /// Fetch the next page of a query result set.
    ///
    /// The locator path is used verbatim as the request target. It carries
    /// whatever version segment the server issued it under, so this is the
    /// one operation that does not build a versioned URL. Stale or garbled
    /// locators are a server-side 400 with code `INVALID_QUERY_LOCATOR`.
    #[instrument(skip(self), fields(locator = %locator))]
    pub async fn query_more(&self, locator: &QueryLocator) -> Result<String> {
        let url = self.client.url(locator.path());
        self.client.get_text(&url).await.map_err(Into::into)
    }
}
