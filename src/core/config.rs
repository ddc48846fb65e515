//! Deserializable hasher configuration.
//!
//! Applications usually keep their hashing choice in a config file. Missing
//! fields fall back to the crate defaults; unknown fields are rejected.
//!
//! ```rust
//! use mincer::core::config::HasherConfig;
//! use mincer::core::hasher::Hasher;
//!
//! let config = HasherConfig {
//!     algorithm: "pbkdf2+sha3-512".to_string(),
//!     ..HasherConfig::default()
//! };
//! let hasher = Hasher::from_config(&config).expect("valid configuration");
//! assert_eq!(hasher.algorithm(), "pbkdf2+sha3-512");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::algorithm::DEFAULT_ALGORITHM;
use crate::core::error::MincerResult;
use crate::core::hasher::{Hasher, HasherBuilder};
use crate::core::nonce::{NonceSource, DEFAULT_NONCE_LENGTH};

/// Algorithm, nonce length and optional cost for a [`Hasher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HasherConfig {
    /// Algorithm identifier, e.g. `pbkdf2+blake2b-512`.
    pub algorithm: String,
    /// Bytes of random salt drawn per hash.
    pub nonce_length: usize,
    /// Cost factor for algorithms that encode one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.identifier().to_string(),
            nonce_length: DEFAULT_NONCE_LENGTH,
            cost: None,
        }
    }
}

impl HasherConfig {
    /// Returns a builder preloaded with this configuration.
    #[must_use]
    pub fn builder(&self) -> HasherBuilder {
        let builder = Hasher::builder()
            .algorithm(&self.algorithm)
            .nonce(NonceSource::random(self.nonce_length));
        match self.cost {
            Some(cost) => builder.cost(cost),
            None => builder,
        }
    }

    /// Builds a hasher against the standard registry.
    ///
    /// # Errors
    ///
    /// Same as [`HasherBuilder::build`].
    pub fn build(&self) -> MincerResult<Hasher> {
        Hasher::from_config(self)
    }
}
