//! Password hashing facade.
//!
//! A [`Hasher`] binds one algorithm, one nonce source and one registry. It is
//! validated when built and immutable afterwards, so a single instance can be
//! shared across any number of threads.
//!
//! # Example
//!
//! ```rust
//! use mincer::core::hasher::Hasher;
//!
//! let hasher = Hasher::builder()
//!     .algorithm("pbkdf2+sha512")
//!     .build()
//!     .expect("pbkdf2+sha512 is registered");
//!
//! let encoded = hasher.hash("hunter2").expect("hashing should succeed");
//! assert!(encoded.starts_with("pbkdf2+sha512$"));
//! assert!(hasher.verify(&encoded, "hunter2").expect("well-formed hash"));
//! assert!(!hasher.verify(&encoded, "hunter3").expect("well-formed hash"));
//! ```

use core::fmt::{self, Debug};
use std::sync::Arc;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::core::algorithm::DEFAULT_ALGORITHM;
use crate::core::config::HasherConfig;
use crate::core::encoding::{self, Layout, Params};
use crate::core::error::{DecodeError, MincerResult};
use crate::core::nonce::NonceSource;
use crate::core::registry::{Registry, Scheme};

/// Hashes and verifies passwords with one configured algorithm.
#[derive(Clone)]
pub struct Hasher {
    scheme: Scheme,
    params: Params,
    nonce: NonceSource,
    registry: Arc<Registry>,
}

impl Hasher {
    /// Creates a hasher with the default algorithm and a 64-byte random nonce.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::StrategyNotSupported` only if the standard
    /// registry lacks the default algorithm.
    pub fn new() -> MincerResult<Self> {
        Self::builder().build()
    }

    /// Starts building a hasher.
    #[must_use]
    pub fn builder() -> HasherBuilder {
        HasherBuilder::default()
    }

    /// Creates a hasher from deserialized configuration.
    ///
    /// # Errors
    ///
    /// Same as [`HasherBuilder::build`].
    pub fn from_config(config: &HasherConfig) -> MincerResult<Self> {
        config.builder().build()
    }

    /// Returns the configured algorithm identifier.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.scheme.identifier()
    }

    /// Returns the parameters encoded into new hashes.
    #[must_use]
    pub fn params(&self) -> Params {
        self.params
    }

    /// Returns the registry used for verification.
    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Hashes `password` under a fresh nonce.
    ///
    /// Returns `{identifier}${fragment}`.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::EntropyFailure` if no nonce can be drawn, or
    /// `MincerError::DerivationFailed` if the primitive rejects its input.
    pub fn hash(&self, password: impl AsRef<[u8]>) -> MincerResult<String> {
        let salt = self.nonce.generate()?;
        let strategy = self.scheme.construct(&salt, self.params)?;
        let fragment = strategy.hash(password.as_ref())?;

        tracing::trace!(algorithm = self.algorithm(), "hashed password");
        Ok(encoding::join(self.algorithm(), &fragment))
    }

    /// Checks `password` against a stored hash.
    ///
    /// The algorithm is taken from `encoded`, not from this hasher; it only
    /// has to be present in this hasher's registry.
    ///
    /// # Errors
    ///
    /// See [`verify_with`].
    pub fn verify(
        &self,
        encoded: impl AsRef<[u8]>,
        password: impl AsRef<[u8]>,
    ) -> MincerResult<bool> {
        verify_with(&self.registry, encoded.as_ref(), password.as_ref())
    }

    /// Returns `true` if `encoded` was produced by a different algorithm
    /// than the one this hasher is configured with.
    #[must_use]
    pub fn needs_upgrade(&self, encoded: impl AsRef<[u8]>) -> bool {
        identifier_differs(encoded.as_ref(), self.algorithm())
    }
}

impl Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.algorithm())
            .field("params", &self.params)
            .field("nonce", &self.nonce)
            .field("registered", &self.registry.len())
            .finish()
    }
}

/// Builder for [`Hasher`].
#[derive(Debug, Clone)]
pub struct HasherBuilder {
    algorithm: String,
    nonce: NonceSource,
    cost: Option<u32>,
    registry: Option<Arc<Registry>>,
}

impl Default for HasherBuilder {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.identifier().to_string(),
            nonce: NonceSource::default(),
            cost: None,
            registry: None,
        }
    }
}

impl HasherBuilder {
    /// Selects the algorithm by identifier.
    #[must_use]
    pub fn algorithm(mut self, identifier: impl AsRef<str>) -> Self {
        self.algorithm = identifier.as_ref().to_string();
        self
    }

    /// Sets the nonce source.
    #[must_use]
    pub fn nonce(mut self, nonce: NonceSource) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the cost factor for algorithms that encode one.
    #[must_use]
    pub fn cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Uses `registry` instead of the standard one.
    #[must_use]
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Validates the configuration and builds the hasher.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::StrategyNotSupported` if the algorithm is not
    /// registered, or `MincerError::InvalidNonce` if the nonce source
    /// produces salts shorter than the algorithm accepts.
    pub fn build(self) -> MincerResult<Hasher> {
        let registry = self.registry.unwrap_or_else(Registry::global);
        let scheme = *registry.lookup(&self.algorithm)?;
        scheme.check_salt_len(self.nonce.len())?;

        let params = match (scheme.layout(), self.cost) {
            (Layout::CostSaltDigest, Some(cost)) => Params::with_cost(cost),
            (Layout::SaltDigest, Some(cost)) => {
                tracing::warn!(
                    algorithm = scheme.identifier(),
                    cost,
                    "algorithm has no cost parameter; ignoring configured cost"
                );
                scheme.default_params()
            }
            (_, None) => scheme.default_params(),
        };

        tracing::debug!(
            algorithm = scheme.identifier(),
            nonce_length = self.nonce.len(),
            ?params,
            "built hasher"
        );

        Ok(Hasher {
            scheme,
            params,
            nonce: self.nonce,
            registry,
        })
    }
}

/// Checks `password` against `encoded` using the schemes in `registry`.
///
/// Decodes `encoded`, replays its salt and parameters through the named
/// algorithm, and compares the re-encoded result with the whole input in
/// constant time.
///
/// # Errors
///
/// - `MincerError::Decode` if `encoded` is malformed
/// - `MincerError::StrategyNotSupported` if its identifier is not registered
/// - `MincerError::DerivationFailed` if its parameters are rejected
pub fn verify_with(registry: &Registry, encoded: &[u8], password: &[u8]) -> MincerResult<bool> {
    let text = core::str::from_utf8(encoded).map_err(|_| DecodeError::NotUtf8)?;
    let (scheme, decoded) = registry.decode(text)?;

    let salt = NonceSource::fixed(decoded.salt()).generate()?;
    let strategy = scheme.construct(&salt, decoded.params())?;
    let recomputed = Zeroizing::new(encoding::join(
        scheme.identifier(),
        &strategy.hash(password)?,
    ));

    let matches = bool::from(recomputed.as_bytes().ct_eq(encoded));
    tracing::trace!(algorithm = scheme.identifier(), matches, "verified password");
    Ok(matches)
}

/// Returns `true` unless `encoded` starts with `{current}$`.
///
/// Input without any separator has no identifier and always differs.
pub(crate) fn identifier_differs(encoded: &[u8], current: &str) -> bool {
    match encoded.iter().position(|b| *b == b'$') {
        Some(end) => &encoded[..end] != current.as_bytes(),
        None => true,
    }
}
