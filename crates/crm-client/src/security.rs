//! Escaping utilities for query and search strings.
//!
//! User-provided values interpolated into SOQL/SOSL text must be escaped
//! before being handed to the query and search operations; the client sends
//! query strings as given and performs no escaping of its own.
//!
//! ```rust
//! use crm_client::security::soql;
//!
//! let name = soql::escape_string("O'Brien");
//! let query = format!("SELECT Id FROM Contact WHERE LastName = '{}'", name);
//! ```

/// SOQL escaping utilities.
pub mod soql {
    /// Escape a string value for use inside a SOQL string literal.
    ///
    /// Escapes single quotes, backslashes, and control characters that have
    /// special meaning in SOQL string literals.
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Escape a value for use in a SOQL LIKE clause.
    ///
    /// In addition to standard string escaping, escapes the LIKE wildcards
    /// `%` and `_`.
    #[must_use]
    pub fn escape_like(value: &str) -> String {
        let base = escape_string(value);
        let mut escaped = String::with_capacity(base.len() + 8);
        for ch in base.chars() {
            match ch {
                '%' => escaped.push_str("\\%"),
                '_' => escaped.push_str("\\_"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Validate that an object or field name contains only safe characters:
    /// a leading ASCII letter followed by alphanumerics and underscores.
    #[must_use]
    pub fn is_safe_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }
}

#[cfg(test)]
mod tests {
    use super::soql;

    #[test]
    fn test_escape_string() {
        assert_eq!(soql::escape_string("O'Brien"), "O\\'Brien");
        assert_eq!(soql::escape_string("a\\b"), "a\\\\b");
        assert_eq!(soql::escape_string("line1\nline2"), "line1\\nline2");
        assert_eq!(soql::escape_string("plain"), "plain");
    }

    #[test]
    fn test_escape_injection_attempt() {
        let input = "' OR Name LIKE '%";
        let escaped = soql::escape_string(input);
        assert!(!escaped.contains("' OR"));
        assert!(escaped.starts_with("\\'"));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(soql::escape_like("50%_off"), "50\\%\\_off");
    }

    #[test]
    fn test_is_safe_name() {
        assert!(soql::is_safe_name("Contact"));
        assert!(soql::is_safe_name("Custom_Field__c"));
        assert!(!soql::is_safe_name(""));
        assert!(!soql::is_safe_name("1starts_with_digit"));
        assert!(!soql::is_safe_name("Bad'; DROP--"));
        assert!(!soql::is_safe_name("dotted.path"));
    }
}
