//! Opaque query continuation locator.

use std::fmt;

/// A server-issued continuation reference for fetching the next page of a
/// query result set.
///
/// The path is a relative URL (typically carrying its own version segment)
/// and must be used verbatim as the next request target. The client performs
/// no validation here: a stale or garbled locator is rejected by the server
/// with `INVALID_QUERY_LOCATOR`, not by us.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryLocator {
    path: String,
}

impl QueryLocator {
    /// Wrap a server-issued locator path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Get the locator path, verbatim.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for QueryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
