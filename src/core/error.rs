//! Error types for password hashing operations.
//!
//! This module provides a unified error type for hashing, verification and
//! registry management. Messages never carry password, salt or digest
//! material, only identifiers and structural details.

use thiserror::Error;

/// Structural problems found while decoding a stored hash string.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input was not valid UTF-8 text.
    #[error("encoded hash is not valid UTF-8")]
    NotUtf8,

    /// The input has no `$` separating the identifier from the fragment.
    #[error("encoded hash has no algorithm identifier")]
    MissingIdentifier,

    /// The number of `$`-delimited fields does not match the algorithm layout.
    #[error("expected {expected} `$`-delimited fields, found {found}")]
    FieldCount {
        /// Fields required by the matched layout (identifier included).
        expected: usize,
        /// Fields actually present.
        found: usize,
    },

    /// A parameter field (e.g. `c=<cost>`) could not be parsed.
    #[error("invalid parameter field: {0}")]
    Parameter(String),

    /// A base64 segment failed to decode.
    #[error("invalid base64 in {field} field: {source}")]
    Base64 {
        /// Which field was being decoded.
        field: &'static str,
        /// The underlying base64 error.
        #[source]
        source: base64::DecodeError,
    },
}

/// Errors that can occur when hashing or verifying passwords.
#[derive(Debug, Error)]
pub enum MincerError {
    /// The algorithm identifier is not registered.
    #[error("Unsupported hashing strategy: {0}")]
    StrategyNotSupported(String),

    /// A stored hash string is malformed.
    #[error("Malformed encoded hash: {0}")]
    Decode(#[from] DecodeError),

    /// The key-derivation primitive rejected its parameters or input.
    #[error("Key derivation failed for {algorithm}: {reason}")]
    DerivationFailed {
        /// Identifier of the failing algorithm.
        algorithm: &'static str,
        /// Description from the underlying primitive.
        reason: String,
    },

    /// The operating system's secure random source could not be read.
    ///
    /// This is unrecoverable from the library's point of view; callers decide
    /// whether to abort or retry.
    #[error("Secure random source unavailable: {0}")]
    EntropyFailure(#[source] rand_core::OsError),

    /// The configured nonce length is unusable for the selected algorithm.
    #[error("Nonce of {actual} bytes is too short for {algorithm} (minimum {minimum})")]
    InvalidNonce {
        /// Identifier of the selected algorithm.
        algorithm: String,
        /// Minimum salt length accepted by the algorithm.
        minimum: usize,
        /// Configured nonce length.
        actual: usize,
    },

    /// An identifier was registered twice.
    #[error("Algorithm identifier already registered: {0}")]
    DuplicateIdentifier(String),
}

impl MincerError {
    /// Wraps a primitive's error with the identifier of the failing algorithm.
    pub(crate) fn derivation(algorithm: &'static str, reason: impl core::fmt::Display) -> Self {
        Self::DerivationFailed {
            algorithm,
            reason: reason.to_string(),
        }
    }

    /// Returns `true` for errors caused by a malformed stored hash.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result type alias for hashing operations.
pub type MincerResult<T> = Result<T, MincerError>;
