//! # crm-client
//!
//! Core HTTP client infrastructure for the CRM record API.
//!
//! This crate provides the foundational layer the typed operation crate
//! (`crm-rest`) builds on:
//! - Request building with bearer authentication
//! - Response handling with error-envelope translation
//! - A typed error model preserving per-field validation detail
//! - Versioned URL construction
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      crm-rest                               │
//! │  (typed operations: create, retrieve, query, search, ...)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CrmClient                              │
//! │  - Holds instance URL + access token + API version          │
//! │  - Versioned URL helpers (url, rest_url)                    │
//! │  - Authenticated raw-body helpers                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - One round trip per call over reqwest                     │
//! │  - Non-2xx -> ApiFailure with full diagnostics              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every non-2xx response is surfaced as [`ErrorKind::Api`] carrying the
//! request URL, HTTP reason phrase, status code, raw body, and the parsed
//! [`ApiError`] list; transport failures (timeouts, refused connections)
//! keep their own error kinds since no HTTP response exists to describe.

mod client;
mod config;
mod crm_client;
mod error;
mod request;
mod response;
pub mod security;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use crm_client::CrmClient;
pub use error::{parse_api_errors, ApiError, ApiFailure, Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};

/// Default API version targeted by constructed URLs.
pub const DEFAULT_API_VERSION: &str = "62.0";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("crm-client/", env!("CARGO_PKG_VERSION"));
