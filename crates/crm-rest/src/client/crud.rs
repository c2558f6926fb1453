//! Record CRUD operations.

use tracing::instrument;

use crate::error::{Error, Result};
use crate::id::Id;
use crate::sobject::SObject;

impl super::RestClient {
    /// Create a record.
    ///
    /// POSTs the record's fields to `.../sobjects/{type}/` and returns the
    /// raw response body, which carries the server-assigned id (see
    /// [`Id::from_create_response`]). Required-field validation is entirely
    /// server-side; a record the server rejects surfaces as an API failure
    /// with per-field detail (e.g. `REQUIRED_FIELD_MISSING`).
    #[instrument(skip(self, record), fields(sobject_type = %record.sobject_type()))]
    pub async fn create(&self, record: &SObject) -> Result<String> {
        if record.sobject_type().is_empty() {
            return Err(Error::InvalidRecord(
                "record has no object type".to_string(),
            ));
        }
        let url = self
            .client
            .rest_url(&format!("sobjects/{}/", record.sobject_type()));
        self.client.post_text(&url, record).await.map_err(Into::into)
    }

    /// Delete a record by id.
    ///
    /// Success (2xx, including 204 No Content) yields `()`; an unknown or
    /// inaccessible id is a server-side 404 with code `NOT_FOUND`.
    #[instrument(skip(self))]
    pub async fn delete(&self, sobject_type: &str, id: &Id) -> Result<()> {
        let url = self
            .client
            .rest_url(&format!("sobjects/{}/{}", sobject_type, id));
        self.client.delete_request(&url).await.map_err(Into::into)
    }

    /// Retrieve selected fields of a record by id.
    ///
    /// The field list is comma-joined in the given order. Returns the raw
    /// record body.
    #[instrument(skip(self, fields))]
    pub async fn retrieve(&self, sobject_type: &str, id: &Id, fields: &[&str]) -> Result<String> {
        let url = format!(
            "{}?fields={}",
            self.client
                .rest_url(&format!("sobjects/{}/{}", sobject_type, id)),
            fields.join(",")
        );
        self.client.get_text(&url).await.map_err(Into::into)
    }
}
