//! Error types for crm-rest.

pub use crm_client::{ApiError, ApiFailure};

/// Result type alias for crm-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for crm-rest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the underlying HTTP layer, including API failures.
    #[error(transparent)]
    Client(#[from] crm_client::Error),

    /// A record identifier did not match the expected format.
    #[error("invalid record id: {0}")]
    InvalidId(String),

    /// A record was not usable for the requested operation.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl Error {
    /// Returns the API failure details if this error came from a non-2xx
    /// response.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Error::Client(err) => err.api_failure(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failure_forwarding() {
        let failure = ApiFailure::from_response("https://host/x", 404, "Not Found", "[]");
        let err: Error = crm_client::Error::new(crm_client::ErrorKind::Api(failure)).into();
        assert_eq!(err.api_failure().unwrap().http_response_code, 404);

        let err = Error::InvalidId("short".to_string());
        assert!(err.api_failure().is_none());
        assert_eq!(err.to_string(), "invalid record id: short");
    }
}
