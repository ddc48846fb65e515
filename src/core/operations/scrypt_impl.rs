//! scrypt strategy.
//!
//! The password is first reduced to a BLAKE2b-512 digest, which is then
//! stretched with scrypt (log2(N) = 12, r = 8, p = 1) into a 64-byte digest.

use blake2::{Blake2b512, Digest};
use zeroize::Zeroizing;

use crate::core::algorithm::SCRYPT_BLAKE2B_512;
use crate::core::encoding::{salt_digest_fragment, Params};
use crate::core::error::{MincerError, MincerResult};
use crate::core::nonce::Nonce;
use crate::core::operations::Strategy;

/// scrypt cost factor, log2(N).
pub const SCRYPT_LOG_N: u8 = 12;

/// scrypt block size.
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelism.
pub const SCRYPT_P: u32 = 1;

/// Digest size (64 bytes, the BLAKE2b-512 output size).
pub const SCRYPT_OUTPUT_SIZE: usize = 64;

/// scrypt over a BLAKE2b-512 pre-hash.
pub struct ScryptStrategy {
    salt: Nonce,
    params: scrypt::Params,
}

impl ScryptStrategy {
    /// Creates a strategy with the fixed `scrypt+blake2b-512` parameters.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::DerivationFailed` if scrypt rejects the parameters.
    pub fn new(salt: &[u8]) -> MincerResult<Self> {
        Self::with_cost(salt, SCRYPT_LOG_N)
    }

    /// Creates a strategy with a custom cost factor.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::DerivationFailed` if scrypt rejects `log_n`.
    pub fn with_cost(salt: &[u8], log_n: u8) -> MincerResult<Self> {
        let params = scrypt::Params::new(log_n, SCRYPT_R, SCRYPT_P, SCRYPT_OUTPUT_SIZE)
            .map_err(|err| MincerError::derivation(SCRYPT_BLAKE2B_512, err))?;

        Ok(Self {
            salt: Zeroizing::new(salt.to_vec()),
            params,
        })
    }
}

impl Strategy for ScryptStrategy {
    fn hash(&self, password: &[u8]) -> MincerResult<String> {
        let prehash = Zeroizing::new(Blake2b512::digest(password).to_vec());

        let mut digest = Zeroizing::new([0u8; SCRYPT_OUTPUT_SIZE]);
        scrypt::scrypt(&prehash, &self.salt, &self.params, digest.as_mut_slice())
            .map_err(|err| MincerError::derivation(SCRYPT_BLAKE2B_512, err))?;

        Ok(salt_digest_fragment(&self.salt, digest.as_slice()))
    }
}

/// Registry constructor for `scrypt+blake2b-512`.
pub(crate) fn construct(salt: &[u8], _: Params) -> MincerResult<Box<dyn Strategy>> {
    Ok(Box::new(ScryptStrategy::new(salt)?))
}
