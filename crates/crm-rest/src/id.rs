//! Validated record identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An opaque record identifier.
///
/// The CRM issues ids in two formats: 15 characters (case-sensitive) or 18
/// characters (case-safe). Construction validates the shape only; whether an
/// id refers to an accessible record is always a server-side question.
/// Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// Create an id from a literal string, validating the format.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !matches!(value.len(), 15 | 18) {
            return Err(Error::InvalidId(format!(
                "expected 15 or 18 characters, got {}",
                value.len()
            )));
        }
        if !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::InvalidId(format!(
                "non-alphanumeric character in {:?}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Extract the server-assigned id from a create response body.
    ///
    /// The create operation returns `{"id": "...", "success": true, ...}`.
    pub fn from_create_response(body: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(crm_client::Error::from)?;
        match value.get("id").and_then(|id| id.as_str()) {
            Some(id) => Self::new(id),
            None => Err(Error::InvalidId(
                "create response carries no id".to_string(),
            )),
        }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        let short = Id::new("00Q7zzz000Kj4Jn").unwrap();
        assert_eq!(short.as_str(), "00Q7zzz000Kj4Jn");
        assert_eq!(short.to_string(), "00Q7zzz000Kj4Jn");

        let long = Id::new("0037zzz000AbCdEfGH").unwrap();
        assert_eq!(long.as_str().len(), 18);
    }

    #[test]
    fn test_equality_by_value() {
        let a = Id::new("0035000000km1oh").unwrap();
        let b: Id = "0035000000km1oh".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(Id::new(""), Err(Error::InvalidId(_))));
        assert!(matches!(Id::new("0035000000km1o"), Err(Error::InvalidId(_))));
        assert!(matches!(
            Id::new("0035000000km1oh0"),
            Err(Error::InvalidId(_))
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            Id::new("0035000000km1o!"),
            Err(Error::InvalidId(_))
        ));
        assert!(matches!(
            Id::new("0035000000 m1oh"),
            Err(Error::InvalidId(_))
        ));
    }

    #[test]
    fn test_from_create_response() {
        let body = r#"{"id":"00T7zzz000HtUvWx","success":true,"errors":[]}"#;
        let id = Id::from_create_response(body).unwrap();
        assert_eq!(id.as_str(), "00T7zzz000HtUvWx");
    }

    #[test]
    fn test_from_create_response_missing_id() {
        assert!(Id::from_create_response(r#"{"success":true}"#).is_err());
        assert!(Id::from_create_response("not json").is_err());
    }
}
