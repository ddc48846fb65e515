//! Argon2i strategy.
//!
//! Uses Argon2i v0x13 with the `argon2` crate's recommended parameters
//! (19 MiB memory, 2 iterations, 1 lane) and a 32-byte digest.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::core::algorithm::ARGON2I;
use crate::core::encoding::{self, salt_digest_fragment};
use crate::core::error::{MincerError, MincerResult};
use crate::core::nonce::Nonce;
use crate::core::operations::Strategy;

/// Minimum salt size accepted by Argon2 (8 bytes).
pub const ARGON2_MIN_SALT_SIZE: usize = 8;

/// Digest size (32 bytes).
pub const ARGON2_OUTPUT_SIZE: usize = Params::DEFAULT_OUTPUT_LEN;

/// Argon2i with fixed parameters.
pub struct Argon2iStrategy {
    salt: Nonce,
    params: Params,
}

impl Argon2iStrategy {
    /// Creates a strategy with the library's recommended parameters.
    #[must_use]
    pub fn new(salt: &[u8]) -> Self {
        Self::with_params(salt, Params::default())
    }

    /// Creates a strategy with explicit Argon2 parameters.
    #[must_use]
    pub fn with_params(salt: &[u8], params: Params) -> Self {
        Self {
            salt: Zeroizing::new(salt.to_vec()),
            params,
        }
    }
}

impl Strategy for Argon2iStrategy {
    fn hash(&self, password: &[u8]) -> MincerResult<String> {
        let argon2 = Argon2::new(Algorithm::Argon2i, Version::V0x13, self.params.clone());

        let mut digest = Zeroizing::new([0u8; ARGON2_OUTPUT_SIZE]);
        argon2
            .hash_password_into(password, &self.salt, digest.as_mut_slice())
            .map_err(|err| MincerError::derivation(ARGON2I, err))?;

        Ok(salt_digest_fragment(&self.salt, digest.as_slice()))
    }
}

/// Registry constructor for `argon2i`.
pub(crate) fn construct(salt: &[u8], _: encoding::Params) -> MincerResult<Box<dyn Strategy>> {
    Ok(Box::new(Argon2iStrategy::new(salt)))
}
