//! PBKDF2-based strategies.
//!
//! PBKDF2 runs a fixed number of rounds over an HMAC keyed with the password.
//! Three PRFs are provided: HMAC-BLAKE2b-512, HMAC-SHA-512 and HMAC-SHA3-512.

use core::marker::PhantomData;

use blake2::Blake2b512;
use hmac::digest::{FixedOutput, KeyInit, Update};
use hmac::{Hmac, SimpleHmac};
use sha2::Sha512;
use sha3::Sha3_512;
use zeroize::Zeroizing;

use crate::core::algorithm::{PBKDF2_BLAKE2B_512, PBKDF2_SHA3_512, PBKDF2_SHA512};
use crate::core::encoding::{salt_digest_fragment, Params};
use crate::core::error::{MincerError, MincerResult};
use crate::core::nonce::Nonce;
use crate::core::operations::Strategy;

/// Number of PBKDF2 rounds for every PBKDF2 identifier.
pub const PBKDF2_ROUNDS: u32 = 50_000;

/// Digest size (64 bytes), the output size of all three PRFs.
pub const PBKDF2_OUTPUT_SIZE: usize = 64;

/// PBKDF2 over HMAC-BLAKE2b-512.
///
/// BLAKE2b buffers lazily, so it goes through `SimpleHmac` rather than `Hmac`.
pub type Pbkdf2Blake2b512 = Pbkdf2Strategy<SimpleHmac<Blake2b512>>;

/// PBKDF2 over HMAC-SHA-512.
pub type Pbkdf2Sha512 = Pbkdf2Strategy<Hmac<Sha512>>;

/// PBKDF2 over HMAC-SHA3-512.
pub type Pbkdf2Sha3_512 = Pbkdf2Strategy<Hmac<Sha3_512>>;

/// PBKDF2 strategy, generic over its PRF.
pub struct Pbkdf2Strategy<Prf> {
    algorithm: &'static str,
    salt: Nonce,
    rounds: u32,
    output_len: usize,
    _prf: PhantomData<fn() -> Prf>,
}

impl<Prf> Pbkdf2Strategy<Prf> {
    /// Creates a strategy with explicit parameters.
    ///
    /// `algorithm` only labels errors; it does not select the PRF.
    #[must_use]
    pub fn new(algorithm: &'static str, salt: &[u8], rounds: u32, output_len: usize) -> Self {
        Self {
            algorithm,
            salt: Zeroizing::new(salt.to_vec()),
            rounds,
            output_len,
            _prf: PhantomData,
        }
    }
}

impl<Prf> Strategy for Pbkdf2Strategy<Prf>
where
    Prf: KeyInit + Update + FixedOutput + Clone + Sync,
{
    fn hash(&self, password: &[u8]) -> MincerResult<String> {
        let mut digest = Zeroizing::new(vec![0u8; self.output_len]);
        pbkdf2::pbkdf2::<Prf>(password, &self.salt, self.rounds, &mut digest)
            .map_err(|err| MincerError::derivation(self.algorithm, err))?;

        Ok(salt_digest_fragment(&self.salt, &digest))
    }
}

/// Registry constructor for `pbkdf2+blake2b-512`.
pub(crate) fn construct_blake2b512(salt: &[u8], _: Params) -> MincerResult<Box<dyn Strategy>> {
    Ok(Box::new(Pbkdf2Blake2b512::new(
        PBKDF2_BLAKE2B_512,
        salt,
        PBKDF2_ROUNDS,
        PBKDF2_OUTPUT_SIZE,
    )))
}

/// Registry constructor for `pbkdf2+sha512`.
pub(crate) fn construct_sha512(salt: &[u8], _: Params) -> MincerResult<Box<dyn Strategy>> {
    Ok(Box::new(Pbkdf2Sha512::new(
        PBKDF2_SHA512,
        salt,
        PBKDF2_ROUNDS,
        PBKDF2_OUTPUT_SIZE,
    )))
}

/// Registry constructor for `pbkdf2+sha3-512`.
pub(crate) fn construct_sha3_512(salt: &[u8], _: Params) -> MincerResult<Box<dyn Strategy>> {
    Ok(Box::new(Pbkdf2Sha3_512::new(
        PBKDF2_SHA3_512,
        salt,
        PBKDF2_ROUNDS,
        PBKDF2_OUTPUT_SIZE,
    )))
}
