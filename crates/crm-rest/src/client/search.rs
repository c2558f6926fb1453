//! SOSL search operations.

use tracing::instrument;

use crate::error::Result;

impl super::RestClient {
    /// Execute a SOSL search.
    ///
    /// GET `.../search/?q={urlencoded sosl}`; returns the raw search result
    /// body. Escape user input with
    /// `crm_client::security::soql::escape_string` before interpolating it
    /// into the SOSL text.
    #[instrument(skip(self))]
    pub async fn search(&self, sosl: &str) -> Result<String> {
        let url = self
            .client
            .rest_url(&format!("search/?q={}", urlencoding::encode(sosl)));
        self.client.get_text(&url).await.map_err(Into::into)
    }
}
