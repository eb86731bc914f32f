//! Error types for ton-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by every facade method
//!   - [`TransportError`] — HTTP-level failures (non-2xx status, network I/O)
//!   - [`ParseAddressError`] — Invalid `"workchain:hex"` address format
//!   - [`ParseHashError`] — Invalid 64-hex-character hash
//!   - [`ParseTokensError`] — Invalid decimal amount string
//!
//! Nothing is recovered locally: a call either fully succeeds with a decoded
//! typed value or fails with one of these, and the caller owns any retry
//! policy.
//!
//! # Distinguishing failure kinds
//!
//! ```rust,no_run
//! use ton_kit::{Error, Ton};
//!
//! # async fn example() -> Result<(), Error> {
//! let ton = Ton::mainnet().build()?;
//!
//! match ton.v2().masterchain_info().await {
//!     Ok(info) => println!("seqno {}", info.last.seqno),
//!     Err(Error::Api { code, message }) => {
//!         // The remote call itself failed (v2 envelope with ok: false)
//!         println!("remote error {code:?}: {message}");
//!     }
//!     Err(Error::Decode { what, .. }) => {
//!         // Got 200 OK but the body didn't match the schema
//!         println!("schema drift decoding {what}");
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error parsing an address from its `"{workchain}:{hex}"` string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseAddressError {
    #[error("Invalid address format: '{0}'. Expected 'workchain:hex64'")]
    InvalidFormat(String),

    #[error("Invalid workchain in address '{0}': not a 32-bit integer")]
    InvalidWorkchain(String),
}

/// Error parsing a block/transaction/message hash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseHashError {
    #[error("Invalid hash '{0}': expected 64 hex characters")]
    InvalidFormat(String),
}

/// Error parsing a token amount from its decimal wire string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTokensError {
    #[error("Invalid token amount: '{0}'. Expected a decimal digit string")]
    InvalidFormat(String),
}

// ============================================================================
// Transport Errors
// ============================================================================

/// HTTP transport failures, surfaced unchanged from the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level failure: connection refused, DNS, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
}

impl TransportError {
    /// The HTTP status code, if the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            TransportError::Status { code, .. } => Some(*code),
        }
    }
}

// ============================================================================
// Main Error Type
// ============================================================================

/// Main error type for ton-kit operations.
#[derive(Debug, Error)]
pub enum Error {
    // ─── Configuration ───
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ─── Parsing (caller-supplied input, reported before any network call) ───
    #[error(transparent)]
    ParseAddress(#[from] ParseAddressError),

    #[error(transparent)]
    ParseHash(#[from] ParseHashError),

    #[error(transparent)]
    ParseTokens(#[from] ParseTokensError),

    // ─── Transport ───
    #[error(transparent)]
    Transport(#[from] TransportError),

    // ─── Protocol (the remote call itself failed) ───
    /// A v2 response reported `ok: false`.
    #[error("API error{}: {message}", code.map(|c| format!(" (code {c})")).unwrap_or_default())]
    Api { code: Option<i64>, message: String },

    /// A v2 response body that isn't the expected `{ok, result}` envelope.
    #[error("Malformed response envelope: {0}")]
    Envelope(String),

    // ─── Decoding (200 OK, but the body doesn't match the schema) ───
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The HTTP status code, if this is a transport error that carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns true if the remote service reported the failure itself
    /// (as opposed to a transport or decoding problem on our side).
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_status_code() {
        let err = TransportError::Status {
            code: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.status_code(), Some(500));

        let err: Error = err.into();
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn api_error_display() {
        let err = Error::Api {
            code: Some(404),
            message: "block not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (code 404): block not found");
        assert!(err.is_api_error());

        let err = Error::Api {
            code: None,
            message: "unknown".to_string(),
        };
        assert_eq!(err.to_string(), "API error: unknown");
    }

    #[test]
    fn decode_error_names_the_type() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::Decode {
            what: "MasterchainInfo",
            source,
        };
        assert!(err.to_string().contains("MasterchainInfo"));
        assert!(!err.is_api_error());
    }
}
