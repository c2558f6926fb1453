//! Metadata describe operations.

use tracing::instrument;

use crate::error::Result;

impl super::RestClient {
    /// List all object types known to the org.
    ///
    /// GET `.../sobjects/`; returns the raw listing body.
    #[instrument(skip(self))]
    pub async fn describe_global(&self) -> Result<String> {
        let url = self.client.rest_url("sobjects/");
        self.client.get_text(&url).await.map_err(Into::into)
    }

    /// Full metadata for one object type (fields, child relationships, ...).
    ///
    /// GET `.../sobjects/{type}/describe`.
    #[instrument(skip(self))]
    pub async fn describe_sobject(&self, sobject_type: &str) -> Result<String> {
        let url = self
            .client
            .rest_url(&format!("sobjects/{}/describe", sobject_type));
        self.client.get_text(&url).await.map_err(Into::into)
    }

    /// Basic metadata for one object type, less verbose than a full
    /// describe but with the same error handling.
    ///
    /// GET `.../sobjects/{type}/`.
    #[instrument(skip(self))]
    pub async fn basic_sobject_info(&self, sobject_type: &str) -> Result<String> {
        let url = self.client.rest_url(&format!("sobjects/{}/", sobject_type));
        self.client.get_text(&url).await.map_err(Into::into)
    }
}
