//! Key-derivation strategies.
//!
//! Each strategy is bound to one salt and one fixed parameter set when it is
//! constructed, and turns a password into the algorithm-specific fragment of
//! the encoded hash (everything after the leading identifier):
//!
//! - [`argon2_impl`] - Argon2i with the library's recommended parameters
//! - [`scrypt_impl`] - scrypt over a BLAKE2b-512 pre-hash
//! - [`pbkdf2_impl`] - PBKDF2 over HMAC-BLAKE2b-512, HMAC-SHA-512 or HMAC-SHA3-512
//! - [`bcrypt_impl`] - bcrypt over an HMAC-SHA-512 pre-hash keyed with the salt
//!
//! Strategies hold no per-password state, so one instance can be shared
//! between threads and used for any number of passwords.

pub mod argon2_impl;
pub mod bcrypt_impl;
pub mod pbkdf2_impl;
pub mod scrypt_impl;

pub use argon2_impl::Argon2iStrategy;
pub use bcrypt_impl::{BcryptStrategy, BCRYPT_SALT_SIZE, DEFAULT_BCRYPT_COST};
pub use pbkdf2_impl::{
    Pbkdf2Blake2b512, Pbkdf2Sha3_512, Pbkdf2Sha512, Pbkdf2Strategy, PBKDF2_OUTPUT_SIZE,
    PBKDF2_ROUNDS,
};
pub use scrypt_impl::ScryptStrategy;

use crate::core::error::MincerResult;

/// A key-derivation strategy bound to one salt and parameter set.
pub trait Strategy: Send + Sync {
    /// Derives the digest for `password` and formats the encoded fragment.
    ///
    /// The returned fragment excludes the algorithm identifier and its
    /// separator; the caller prepends them.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::DerivationFailed` if the underlying primitive
    /// rejects its parameters or input.
    fn hash(&self, password: &[u8]) -> MincerResult<String>;
}
