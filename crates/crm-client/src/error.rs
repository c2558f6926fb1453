//! Error types for crm-client.

use serde::{Deserialize, Serialize};

/// Result type alias for crm-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for crm-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns the API failure details if this error came from a non-2xx response.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match &self.kind {
            ErrorKind::Api(failure) => Some(failure),
            _ => None,
        }
    }

    /// Returns true if this error came from the transport layer rather than
    /// an HTTP response (no status code or body exists to describe it).
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Timeout | ErrorKind::Connection(_)
        )
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The API returned a non-2xx response.
    #[error("{0}")]
    Api(ApiFailure),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// One structured error from the API's error envelope.
///
/// A failed call carries one or more of these; `fields` names the offending
/// record fields when the server reports them (validation errors) and is
/// empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code, e.g. `REQUIRED_FIELD_MISSING`.
    pub error_code: String,
    /// Human-readable message.
    pub message: String,
    /// Offending field names, empty when the server reports none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

/// Full diagnostic context for one failed API call.
///
/// Built exactly once per non-2xx response. The raw body is always preserved
/// even when it does not parse as an error envelope, so no diagnostic data is
/// lost to a malformed server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// The request URL.
    pub url: String,
    /// HTTP reason phrase, e.g. "Bad Request".
    pub http_reason: String,
    /// Numeric HTTP status code.
    pub http_response_code: u16,
    /// Raw response body text, verbatim.
    pub http_response_body: String,
    /// Parsed errors from the envelope, empty if the body was not parseable.
    pub errors: Vec<ApiError>,
}

impl ApiFailure {
    /// Build a failure from response parts, parsing the error envelope
    /// out of the body.
    pub fn from_response(
        url: impl Into<String>,
        http_response_code: u16,
        http_reason: impl Into<String>,
        http_response_body: impl Into<String>,
    ) -> Self {
        let http_response_body = http_response_body.into();
        let errors = parse_api_errors(&http_response_body);
        Self {
            url: url.into(),
            http_reason: http_reason.into(),
            http_response_code,
            http_response_body,
            errors,
        }
    }

    /// Returns true if any of the parsed errors carries the given code.
    pub fn has_error_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.error_code == code)
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HTTP {} {} for {}",
            self.http_response_code, self.http_reason, self.url
        )?;
        match self.errors.first() {
            Some(err) => write!(f, ": {} - {}", err.error_code, err.message),
            None => write!(f, " (unparseable error body)"),
        }
    }
}

/// Parse an error-envelope body into its constituent errors.
///
/// The wire format is a JSON array of `{message, errorCode, fields?}`
/// objects. Parsing is deliberately lenient: a bare object is accepted, and
/// anything else yields an empty list rather than a secondary error that
/// would mask the original HTTP diagnostics.
pub fn parse_api_errors(body: &str) -> Vec<ApiError> {
    if let Ok(errors) = serde_json::from_str::<Vec<ApiError>>(body) {
        return errors;
    }
    if let Ok(error) = serde_json::from_str::<ApiError>(body) {
        return vec![error];
    }
    Vec::new()
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_envelope_array() {
        let body = r#"[{"fields":["LastName"],"message":"Required fields are missing: [LastName]","errorCode":"REQUIRED_FIELD_MISSING"}]"#;
        let errors = parse_api_errors(body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code, "REQUIRED_FIELD_MISSING");
        assert_eq!(
            errors[0].message,
            "Required fields are missing: [LastName]"
        );
        assert_eq!(errors[0].fields, vec!["LastName".to_string()]);
    }

    #[test]
    fn test_parse_error_fields_default_empty() {
        let body = r#"[{"message":"invalid query locator","errorCode":"INVALID_QUERY_LOCATOR"}]"#;
        let errors = parse_api_errors(body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code, "INVALID_QUERY_LOCATOR");
        assert!(errors[0].fields.is_empty());
    }

    #[test]
    fn test_parse_error_single_object() {
        let body = r#"{"message":"The requested resource does not exist","errorCode":"NOT_FOUND"}"#;
        let errors = parse_api_errors(body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code, "NOT_FOUND");
    }

    #[test]
    fn test_parse_error_multiple_elements() {
        let body = r#"[
            {"errorCode":"REQUIRED_FIELD_MISSING","message":"Required fields are missing","fields":["Name","Email"]},
            {"errorCode":"FIELD_CUSTOM_VALIDATION_EXCEPTION","message":"Must be positive"}
        ]"#;
        let errors = parse_api_errors(body);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].fields,
            vec!["Name".to_string(), "Email".to_string()]
        );
        assert!(errors[1].fields.is_empty());
    }

    #[test]
    fn test_parse_error_malformed_body_yields_empty() {
        assert!(parse_api_errors("<html>502 Bad Gateway</html>").is_empty());
        assert!(parse_api_errors("").is_empty());
        assert!(parse_api_errors("[{\"truncated\":").is_empty());
        // Valid JSON but not the envelope shape
        assert!(parse_api_errors(r#"{"unexpected":"shape"}"#).is_empty());
    }

    #[test]
    fn test_api_failure_preserves_raw_body() {
        let body = "<html>gateway timeout</html>";
        let failure =
            ApiFailure::from_response("https://host/path", 504, "Gateway Timeout", body);
        assert_eq!(failure.http_response_body, body);
        assert_eq!(failure.http_response_code, 504);
        assert!(failure.errors.is_empty());
        assert!(failure.to_string().contains("unparseable error body"));
    }

    #[test]
    fn test_api_failure_display_and_code_lookup() {
        let failure = ApiFailure::from_response(
            "https://host/services/data/v62.0/sobjects/Contact/",
            400,
            "Bad Request",
            r#"[{"fields":["LastName"],"message":"Required fields are missing: [LastName]","errorCode":"REQUIRED_FIELD_MISSING"}]"#,
        );
        assert!(failure.has_error_code("REQUIRED_FIELD_MISSING"));
        assert!(!failure.has_error_code("NOT_FOUND"));

        let display = failure.to_string();
        assert!(display.contains("HTTP 400 Bad Request"));
        assert!(display.contains("REQUIRED_FIELD_MISSING"));
    }

    #[test]
    fn test_error_api_failure_accessor() {
        let failure = ApiFailure::from_response("https://host/x", 404, "Not Found", "[]");
        let err = Error::new(ErrorKind::Api(failure));
        assert_eq!(err.api_failure().unwrap().http_response_code, 404);
        assert!(!err.is_transport());

        let err = Error::new(ErrorKind::Timeout);
        assert!(err.api_failure().is_none());
        assert!(err.is_transport());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_api_error_serialize_round_trip() {
        let error = ApiError {
            error_code: "NOT_FOUND".to_string(),
            message: "gone".to_string(),
            fields: Vec::new(),
        };
        let json = serde_json::to_string(&error).unwrap();
        // Empty fields are omitted on the wire, matching the server's shape.
        assert_eq!(json, r#"{"errorCode":"NOT_FOUND","message":"gone"}"#);
    }
}
