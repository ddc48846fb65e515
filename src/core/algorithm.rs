//! Built-in algorithm identifiers.
//!
//! Identifiers are permanent wire-format constants: once a password has been
//! hashed under one of these strings it must keep meaning the same algorithm
//! and parameter set forever.

use core::fmt::{self, Display};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::MincerError;

/// Identifier for Argon2i with the library's recommended parameters.
pub const ARGON2I: &str = "argon2i";

/// Identifier for scrypt over a BLAKE2b-512 pre-hash.
pub const SCRYPT_BLAKE2B_512: &str = "scrypt+blake2b-512";

/// Identifier for PBKDF2-HMAC-BLAKE2b-512.
pub const PBKDF2_BLAKE2B_512: &str = "pbkdf2+blake2b-512";

/// Identifier for PBKDF2-HMAC-SHA-512.
pub const PBKDF2_SHA512: &str = "pbkdf2+sha512";

/// Identifier for PBKDF2-HMAC-SHA3-512.
pub const PBKDF2_SHA3_512: &str = "pbkdf2+sha3-512";

/// Identifier for bcrypt over an HMAC-SHA-512 pre-hash keyed with the salt.
pub const BCRYPT_HMAC_SHA512: &str = "bcrypt+hmac-sha512";

/// Algorithm used when none is selected explicitly.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Pbkdf2Blake2b512;

/// The algorithms shipped with this crate.
///
/// Custom algorithms can still be registered under their own identifier
/// through [`Registry::register`](crate::core::registry::Registry::register);
/// this enum only names the built-in set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// `argon2i`
    Argon2i,
    /// `scrypt+blake2b-512`
    ScryptBlake2b512,
    /// `pbkdf2+blake2b-512`
    #[default]
    Pbkdf2Blake2b512,
    /// `pbkdf2+sha512`
    Pbkdf2Sha512,
    /// `pbkdf2+sha3-512`
    Pbkdf2Sha3_512,
    /// `bcrypt+hmac-sha512`
    BcryptHmacSha512,
}

impl Algorithm {
    /// Every built-in algorithm, in registration order.
    pub const ALL: [Self; 6] = [
        Self::Argon2i,
        Self::ScryptBlake2b512,
        Self::Pbkdf2Blake2b512,
        Self::Pbkdf2Sha512,
        Self::Pbkdf2Sha3_512,
        Self::BcryptHmacSha512,
    ];

    /// Returns the wire identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Argon2i => ARGON2I,
            Self::ScryptBlake2b512 => SCRYPT_BLAKE2B_512,
            Self::Pbkdf2Blake2b512 => PBKDF2_BLAKE2B_512,
            Self::Pbkdf2Sha512 => PBKDF2_SHA512,
            Self::Pbkdf2Sha3_512 => PBKDF2_SHA3_512,
            Self::BcryptHmacSha512 => BCRYPT_HMAC_SHA512,
        }
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.identifier()
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Algorithm {
    type Err = MincerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.identifier() == s)
            .ok_or_else(|| MincerError::StrategyNotSupported(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = MincerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.identifier()
    }
}
