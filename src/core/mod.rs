//! Core hashing types and operations.
//!
//! - [`algorithm`] - Algorithm identifiers and the default choice
//! - [`error`] - Error types for hashing and verification
//! - [`nonce`] - Per-hash salt sources
//! - [`encoding`] - The `$`-delimited wire format
//! - [`operations`] - Key-derivation strategies
//! - [`registry`] - Identifier to strategy mapping
//! - [`hasher`] - The hashing facade and the verification protocol
//! - [`config`] - Deserializable hasher configuration
//! - [`default`] - The process-wide default hasher

pub mod algorithm;
pub mod config;
pub mod default;
pub mod encoding;
pub mod error;
pub mod hasher;
pub mod nonce;
pub mod operations;
pub mod registry;

// Re-export commonly used items
pub use algorithm::{Algorithm, DEFAULT_ALGORITHM};
pub use error::{DecodeError, MincerError, MincerResult};
pub use hasher::{Hasher, HasherBuilder};
