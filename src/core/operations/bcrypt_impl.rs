//! bcrypt strategy with an HMAC-SHA-512 pre-hash.
//!
//! bcrypt only consumes the first 72 bytes of its input, so the password is
//! first reduced with HMAC-SHA-512 keyed with the salt. The 64-byte MAC is
//! what bcrypt actually hashes.
//!
//! bcrypt's own 16-byte salt is taken from the first 16 bytes of the
//! external salt. This keeps the result reproducible from the encoded string
//! alone: the same salt, password and cost always produce the same bcrypt
//! output.
//!
//! Format: `bcrypt+hmac-sha512$c={cost}${base64(salt)}${base64(bcrypt-string)}`

use core::fmt::{self, Debug};

use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::core::algorithm::BCRYPT_HMAC_SHA512;
use crate::core::encoding::{cost_salt_digest_fragment, Params};
use crate::core::error::{MincerError, MincerResult};
use crate::core::nonce::Nonce;
use crate::core::operations::Strategy;

/// Salt size consumed by bcrypt itself (16 bytes).
pub const BCRYPT_SALT_SIZE: usize = 16;

/// Cost used when none is configured.
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Pre-hash output size (64 bytes).
const PREHASH_SIZE: usize = 64;

/// bcrypt over an HMAC-SHA-512 pre-hash.
#[derive(Clone)]
pub struct BcryptStrategy {
    salt: Nonce,
    bcrypt_salt: Zeroizing<[u8; BCRYPT_SALT_SIZE]>,
    cost: u32,
    /// Keyed once; every call works on its own clone.
    prehash: Hmac<Sha512>,
}

impl BcryptStrategy {
    /// Creates a strategy for `salt` and `cost`.
    ///
    /// The cost itself is only checked when hashing, by bcrypt.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::InvalidNonce` if `salt` is shorter than
    /// `BCRYPT_SALT_SIZE`.
    pub fn new(salt: &[u8], cost: u32) -> MincerResult<Self> {
        let bcrypt_salt: [u8; BCRYPT_SALT_SIZE] = salt
            .get(..BCRYPT_SALT_SIZE)
            .and_then(|prefix| prefix.try_into().ok())
            .ok_or_else(|| MincerError::InvalidNonce {
                algorithm: BCRYPT_HMAC_SHA512.to_string(),
                minimum: BCRYPT_SALT_SIZE,
                actual: salt.len(),
            })?;

        let prehash = <Hmac<Sha512> as Mac>::new_from_slice(salt)
            .map_err(|err| MincerError::derivation(BCRYPT_HMAC_SHA512, err))?;

        Ok(Self {
            salt: Zeroizing::new(salt.to_vec()),
            bcrypt_salt: Zeroizing::new(bcrypt_salt),
            cost,
            prehash,
        })
    }

    /// Returns the configured cost factor.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Computes the keyed pre-hash of `password` on a fresh copy of the MAC.
    fn digest(&self, password: &[u8]) -> Zeroizing<[u8; PREHASH_SIZE]> {
        let mut mac = self.prehash.clone();
        mac.update(password);

        let mut output = Zeroizing::new([0u8; PREHASH_SIZE]);
        output.copy_from_slice(&mac.finalize().into_bytes());
        output
    }
}

impl Strategy for BcryptStrategy {
    fn hash(&self, password: &[u8]) -> MincerResult<String> {
        let prehash = self.digest(password);

        let parts = bcrypt::hash_with_salt(prehash.as_slice(), self.cost, *self.bcrypt_salt)
            .map_err(|err| MincerError::derivation(BCRYPT_HMAC_SHA512, err))?;
        let modular = Zeroizing::new(parts.format_for_version(bcrypt::Version::TwoB));

        Ok(cost_salt_digest_fragment(
            self.cost,
            &self.salt,
            modular.as_bytes(),
        ))
    }
}

impl Debug for BcryptStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BcryptStrategy")
            .field("cost", &self.cost)
            .field("salt_len", &self.salt.len())
            .finish_non_exhaustive()
    }
}

/// Registry constructor for `bcrypt+hmac-sha512`.
pub(crate) fn construct(salt: &[u8], params: Params) -> MincerResult<Box<dyn Strategy>> {
    let cost = params.cost.unwrap_or(DEFAULT_BCRYPT_COST);
    Ok(Box::new(BcryptStrategy::new(salt, cost)?))
}
