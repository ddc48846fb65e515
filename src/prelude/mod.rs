//! Ergonomic imports for hashing and verification.
//!
//! # Usage
//!
//! ```rust
//! use mincer::prelude::*;
//!
//! let hasher = Hasher::builder()
//!     .algorithm(Algorithm::Pbkdf2Sha3_512)
//!     .nonce(NonceSource::random(32))
//!     .build()
//!     .expect("pbkdf2+sha3-512 is registered");
//! let encoded = hasher.hash("hunter2").expect("hashing should succeed");
//! assert!(verify(&encoded, "hunter2").expect("well-formed hash"));
//! ```

// Re-export core types for convenience
pub use crate::core::algorithm::{Algorithm, DEFAULT_ALGORITHM};
pub use crate::core::config::HasherConfig;
pub use crate::core::default::{default_hasher, hash, needs_upgrade, verify};
pub use crate::core::encoding::{EncodedHash, Layout, Params};
pub use crate::core::error::{DecodeError, MincerError, MincerResult};
pub use crate::core::hasher::{verify_with, Hasher, HasherBuilder};
pub use crate::core::nonce::NonceSource;
pub use crate::core::operations::Strategy;
pub use crate::core::registry::{Registry, Scheme};
