//! Shared error type across reqtally crates.
//!
//! The aggregator itself never fails; these errors cover configuration and
//! startup paths around it.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReqTallyError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ReqTallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("internal: {0}")]
    Internal(String),
}

impl ReqTallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ReqTallyError::BadRequest(_) => ClientCode::BadRequest,
            ReqTallyError::UnsupportedVersion(_) => ClientCode::UnsupportedVersion,
            ReqTallyError::Internal(_) => ClientCode::Internal,
        }
    }
}
