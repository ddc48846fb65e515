//! Per-hash salt sources.
//!
//! A [`NonceSource`] either draws fresh bytes from the operating system's
//! CSPRNG on every call, or replays one stored salt so that a previously
//! encoded hash can be recomputed during verification.

use core::fmt::{self, Debug};

use zeroize::Zeroizing;

use crate::core::error::{MincerError, MincerResult};

/// Length of the salt drawn by the default nonce source.
pub const DEFAULT_NONCE_LENGTH: usize = 64;

/// Salt bytes, wiped on drop.
pub type Nonce = Zeroizing<Vec<u8>>;

/// Produces the salt bytes for one hash operation.
#[derive(Clone)]
pub enum NonceSource {
    /// Fresh random bytes of a fixed length on every call.
    Random {
        /// Number of bytes to draw.
        length: usize,
    },
    /// Always the same bytes; used to replay a stored salt.
    Fixed(Nonce),
}

impl Default for NonceSource {
    fn default() -> Self {
        Self::random(DEFAULT_NONCE_LENGTH)
    }
}

impl NonceSource {
    /// Creates a source drawing `length` random bytes per call.
    #[must_use]
    pub const fn random(length: usize) -> Self {
        Self::Random { length }
    }

    /// Creates a source replaying `salt` on every call.
    #[must_use]
    pub fn fixed(salt: impl Into<Vec<u8>>) -> Self {
        Self::Fixed(Zeroizing::new(salt.into()))
    }

    /// Returns the number of bytes each call produces.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Random { length } => *length,
            Self::Fixed(salt) => salt.len(),
        }
    }

    /// Returns `true` if the source produces empty salts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produces the salt for one hash operation.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::EntropyFailure` if the secure random source
    /// cannot be read. There is no fallback to weaker randomness.
    pub fn generate(&self) -> MincerResult<Nonce> {
        match self {
            Self::Random { length } => {
                use rand_core::{OsRng, TryRngCore};

                let mut salt = Zeroizing::new(vec![0u8; *length]);
                OsRng.try_fill_bytes(&mut salt).map_err(|err| {
                    tracing::warn!(length, "secure random source unavailable");
                    MincerError::EntropyFailure(err)
                })?;
                Ok(salt)
            }
            Self::Fixed(salt) => Ok(salt.clone()),
        }
    }
}

impl Debug for NonceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random { length } => f.debug_struct("Random").field("length", length).finish(),
            Self::Fixed(salt) => f
                .debug_struct("Fixed")
                .field("len", &salt.len())
                .field("salt", &"[REDACTED]")
                .finish(),
        }
    }
}
