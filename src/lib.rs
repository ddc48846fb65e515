//! Self-describing password hashes over pluggable key-derivation strategies.
//!
//! Every hash produced by this crate is a single string that names the
//! algorithm that made it, so it can be verified later without any other
//! metadata and flagged for rehashing once the default algorithm changes.
//!
//! # Quick Start
//!
//! ```rust
//! let encoded = mincer::hash("correct horse battery staple").expect("hashing should succeed");
//! assert!(encoded.starts_with("pbkdf2+blake2b-512$"));
//!
//! assert!(mincer::verify(&encoded, "correct horse battery staple").expect("well-formed hash"));
//! assert!(!mincer::verify(&encoded, "wrong password").expect("well-formed hash"));
//! assert!(!mincer::needs_upgrade(&encoded));
//! ```
//!
//! # Algorithms
//!
//! | Identifier | Derivation | Encoded form |
//! |------------|------------|--------------|
//! | `argon2i` | Argon2i, library defaults | `argon2i${salt}${digest}` |
//! | `scrypt+blake2b-512` | scrypt (log2 N = 12) over BLAKE2b-512 | `scrypt+blake2b-512${salt}${digest}` |
//! | `pbkdf2+blake2b-512` | PBKDF2, 50 000 rounds, HMAC-BLAKE2b-512 (**default**) | `pbkdf2+blake2b-512${salt}${digest}` |
//! | `pbkdf2+sha512` | PBKDF2, 50 000 rounds, HMAC-SHA-512 | `pbkdf2+sha512${salt}${digest}` |
//! | `pbkdf2+sha3-512` | PBKDF2, 50 000 rounds, HMAC-SHA3-512 | `pbkdf2+sha3-512${salt}${digest}` |
//! | `bcrypt+hmac-sha512` | bcrypt over an HMAC-SHA-512 pre-hash | `bcrypt+hmac-sha512$c={cost}${salt}${bcrypt}` |
//!
//! Binary fields are base64 (standard alphabet, no padding). The first five
//! make up [`Registry::standard()`](core::registry::Registry::standard);
//! bcrypt is available through [`Registry::extended()`](core::registry::Registry::extended).
//!
//! # Choosing an algorithm
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mincer::core::registry::Registry;
//! use mincer::Hasher;
//!
//! let hasher = Hasher::builder()
//!     .algorithm("bcrypt+hmac-sha512")
//!     .cost(4)
//!     .registry(Arc::new(Registry::extended()))
//!     .build()
//!     .expect("bcrypt is in the extended registry");
//!
//! let encoded = hasher.hash("hunter2").expect("hashing should succeed");
//! assert!(encoded.starts_with("bcrypt+hmac-sha512$c=4$"));
//! assert!(hasher.verify(&encoded, "hunter2").expect("well-formed hash"));
//! ```
//!
//! # Security
//!
//! - Verification compares the whole re-encoded string in constant time
//! - Salts are drawn from the operating system CSPRNG with no fallback
//! - Salt and digest buffers are zeroized on drop
//! - Debug output redacts salts and digests
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::algorithm::{Algorithm, DEFAULT_ALGORITHM};
pub use core::config::HasherConfig;
pub use core::default::{default_hasher, hash, needs_upgrade, verify};
pub use core::error::{DecodeError, MincerError, MincerResult};
pub use core::hasher::{verify_with, Hasher, HasherBuilder};
pub use core::nonce::NonceSource;
pub use core::registry::{Registry, Scheme};
