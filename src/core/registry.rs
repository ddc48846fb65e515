//! Algorithm registry.
//!
//! Maps wire identifiers to [`Scheme`]s: the field layout of the encoded
//! string, the minimum salt length, default parameters, and a constructor
//! that binds a [`Strategy`] to a salt.
//!
//! [`Registry::standard()`] holds the five built-in PBKDF2, scrypt and Argon2
//! identifiers. [`Registry::extended()`] adds `bcrypt+hmac-sha512`. Further
//! schemes can be added with [`Registry::register`]; an identifier that is
//! already present can never be replaced.

use core::fmt::{self, Debug};
use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::algorithm::Algorithm;
use crate::core::encoding::{self, EncodedHash, Layout, Params};
use crate::core::error::{DecodeError, MincerError, MincerResult};
use crate::core::operations::{
    argon2_impl, bcrypt_impl, pbkdf2_impl, scrypt_impl, Strategy, BCRYPT_SALT_SIZE,
    DEFAULT_BCRYPT_COST,
};

/// Builds a strategy bound to `salt` and the decoded or configured parameters.
pub type Constructor = fn(&[u8], Params) -> MincerResult<Box<dyn Strategy>>;

/// Process-wide standard registry, built on first use.
static STANDARD: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::standard()));

/// One registered algorithm.
#[derive(Clone, Copy)]
pub struct Scheme {
    identifier: &'static str,
    layout: Layout,
    min_salt_len: usize,
    default_params: Params,
    constructor: Constructor,
}

impl Scheme {
    /// Describes a scheme.
    #[must_use]
    pub const fn new(
        identifier: &'static str,
        layout: Layout,
        min_salt_len: usize,
        default_params: Params,
        constructor: Constructor,
    ) -> Self {
        Self {
            identifier,
            layout,
            min_salt_len,
            default_params,
            constructor,
        }
    }

    /// Returns the scheme for a built-in algorithm.
    #[must_use]
    pub const fn builtin(algorithm: Algorithm) -> Self {
        let identifier = algorithm.identifier();
        match algorithm {
            Algorithm::Argon2i => Self::new(
                identifier,
                Layout::SaltDigest,
                argon2_impl::ARGON2_MIN_SALT_SIZE,
                Params { cost: None },
                argon2_impl::construct,
            ),
            Algorithm::ScryptBlake2b512 => Self::new(
                identifier,
                Layout::SaltDigest,
                1,
                Params { cost: None },
                scrypt_impl::construct,
            ),
            Algorithm::Pbkdf2Blake2b512 => Self::new(
                identifier,
                Layout::SaltDigest,
                1,
                Params { cost: None },
                pbkdf2_impl::construct_blake2b512,
            ),
            Algorithm::Pbkdf2Sha512 => Self::new(
                identifier,
                Layout::SaltDigest,
                1,
                Params { cost: None },
                pbkdf2_impl::construct_sha512,
            ),
            Algorithm::Pbkdf2Sha3_512 => Self::new(
                identifier,
                Layout::SaltDigest,
                1,
                Params { cost: None },
                pbkdf2_impl::construct_sha3_512,
            ),
            Algorithm::BcryptHmacSha512 => Self::new(
                identifier,
                Layout::CostSaltDigest,
                BCRYPT_SALT_SIZE,
                Params::with_cost(DEFAULT_BCRYPT_COST),
                bcrypt_impl::construct,
            ),
        }
    }

    /// Returns the wire identifier.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// Returns the field layout of encoded hashes.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the minimum accepted salt length.
    #[must_use]
    pub fn min_salt_len(&self) -> usize {
        self.min_salt_len
    }

    /// Returns the parameters used when none are configured.
    #[must_use]
    pub fn default_params(&self) -> Params {
        self.default_params
    }

    /// Ensures a salt of `len` bytes is acceptable.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::InvalidNonce` if `len` is below the minimum.
    pub fn check_salt_len(&self, len: usize) -> MincerResult<()> {
        if len < self.min_salt_len {
            return Err(MincerError::InvalidNonce {
                algorithm: self.identifier.to_string(),
                minimum: self.min_salt_len,
                actual: len,
            });
        }
        Ok(())
    }

    /// Builds a strategy bound to `salt`.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::InvalidNonce` for a short salt, or whatever the
    /// constructor reports.
    pub fn construct(&self, salt: &[u8], params: Params) -> MincerResult<Box<dyn Strategy>> {
        self.check_salt_len(salt.len())?;
        (self.constructor)(salt, params)
    }

    /// Decodes `encoded` with this scheme's layout.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::Decode` if `encoded` does not match the layout.
    pub fn decode(&self, encoded: &str) -> MincerResult<EncodedHash> {
        Ok(EncodedHash::decode(encoded, self.layout)?)
    }
}

impl Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme")
            .field("identifier", &self.identifier)
            .field("layout", &self.layout)
            .field("min_salt_len", &self.min_salt_len)
            .field("default_params", &self.default_params)
            .finish_non_exhaustive()
    }
}

/// Identifier to scheme mapping.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemes: BTreeMap<&'static str, Scheme>,
}

impl Registry {
    /// Creates a registry with no schemes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry with the five standard identifiers.
    #[must_use]
    pub fn standard() -> Self {
        let schemes = [
            Algorithm::Argon2i,
            Algorithm::ScryptBlake2b512,
            Algorithm::Pbkdf2Blake2b512,
            Algorithm::Pbkdf2Sha512,
            Algorithm::Pbkdf2Sha3_512,
        ]
        .into_iter()
        .map(|algorithm| (algorithm.identifier(), Scheme::builtin(algorithm)))
        .collect();

        Self { schemes }
    }

    /// Creates a registry with the standard identifiers plus `bcrypt+hmac-sha512`.
    #[must_use]
    pub fn extended() -> Self {
        let mut registry = Self::standard();
        let bcrypt = Scheme::builtin(Algorithm::BcryptHmacSha512);
        registry.schemes.insert(bcrypt.identifier(), bcrypt);
        registry
    }

    /// Returns the shared standard registry.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Adds a scheme.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::DuplicateIdentifier` if the identifier is
    /// already registered, or `MincerError::Decode` if it contains the
    /// field separator or is empty.
    pub fn register(&mut self, scheme: Scheme) -> MincerResult<()> {
        let identifier = scheme.identifier();
        if identifier.is_empty() || identifier.contains(encoding::SEPARATOR) {
            return Err(DecodeError::MissingIdentifier.into());
        }
        if self.schemes.contains_key(identifier) {
            return Err(MincerError::DuplicateIdentifier(identifier.to_string()));
        }

        tracing::debug!(identifier, layout = ?scheme.layout(), "registered hashing scheme");
        self.schemes.insert(identifier, scheme);
        Ok(())
    }

    /// Adds a scheme, builder style.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::register`].
    pub fn with(mut self, scheme: Scheme) -> MincerResult<Self> {
        self.register(scheme)?;
        Ok(self)
    }

    /// Looks up the scheme for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::StrategyNotSupported` if it is not registered.
    /// There is no fallback to another algorithm.
    pub fn lookup(&self, identifier: &str) -> MincerResult<&Scheme> {
        self.schemes.get(identifier).ok_or_else(|| {
            tracing::warn!(identifier, "unsupported hashing strategy");
            MincerError::StrategyNotSupported(identifier.to_string())
        })
    }

    /// Builds a strategy for `identifier` bound to `salt`.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::StrategyNotSupported` for an unknown identifier,
    /// or any error from [`Scheme::construct`].
    pub fn construct(
        &self,
        identifier: &str,
        salt: &[u8],
        params: Params,
    ) -> MincerResult<Box<dyn Strategy>> {
        self.lookup(identifier)?.construct(salt, params)
    }

    /// Decodes an encoded hash, resolving its layout from its identifier.
    ///
    /// # Errors
    ///
    /// Returns `MincerError::Decode` for a missing identifier or a layout
    /// mismatch, and `MincerError::StrategyNotSupported` for an unknown one.
    pub fn decode(&self, encoded: &str) -> MincerResult<(&Scheme, EncodedHash)> {
        let (identifier, _) = encoding::split_identifier(encoded)?;
        let scheme = self.lookup(identifier)?;
        Ok((scheme, scheme.decode(encoded)?))
    }

    /// Returns `true` if `identifier` is registered.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.schemes.contains_key(identifier)
    }

    /// Iterates over the registered identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemes.keys().copied()
    }

    /// Returns the number of registered schemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithm::{
        ARGON2I, BCRYPT_HMAC_SHA512, PBKDF2_BLAKE2B_512, PBKDF2_SHA3_512, PBKDF2_SHA512,
        SCRYPT_BLAKE2B_512,
    };

    fn reversed(_: &[u8], _: Params) -> MincerResult<Box<dyn Strategy>> {
        struct Reversed;

        impl Strategy for Reversed {
            fn hash(&self, password: &[u8]) -> MincerResult<String> {
                Ok(password.iter().rev().map(|b| char::from(*b)).collect())
            }
        }

        Ok(Box::new(Reversed))
    }

    #[test]
    fn test_standard_has_exactly_five() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 5);
        for identifier in [
            ARGON2I,
            SCRYPT_BLAKE2B_512,
            PBKDF2_BLAKE2B_512,
            PBKDF2_SHA512,
            PBKDF2_SHA3_512,
        ] {
            assert!(registry.contains(identifier), "{identifier} missing");
        }
        assert!(!registry.contains(BCRYPT_HMAC_SHA512));
    }

    #[test]
    fn test_extended_adds_bcrypt() -> MincerResult<()> {
        let registry = Registry::extended();
        assert_eq!(registry.len(), 6);
        let scheme = registry.lookup(BCRYPT_HMAC_SHA512)?;
        assert_eq!(scheme.layout(), Layout::CostSaltDigest);
        assert_eq!(scheme.default_params(), Params::with_cost(DEFAULT_BCRYPT_COST));
        Ok(())
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = Registry::standard();
        let result = registry.lookup("md5");
        assert!(matches!(result, Err(MincerError::StrategyNotSupported(id)) if id == "md5"));
    }

    #[test]
    fn test_register_custom() -> MincerResult<()> {
        let scheme = Scheme::new("rev", Layout::SaltDigest, 0, Params::default(), reversed);
        let registry = Registry::standard().with(scheme)?;
        assert_eq!(registry.len(), 6);
        let fragment = registry.construct("rev", b"", Params::default())?.hash(b"abc")?;
        assert_eq!(fragment, "cba");
        Ok(())
    }

    #[test]
    fn test_register_cannot_replace() {
        let mut registry = Registry::standard();
        let result = registry.register(Scheme::new(
            PBKDF2_SHA512,
            Layout::SaltDigest,
            0,
            Params::default(),
            reversed,
        ));
        assert!(matches!(result, Err(MincerError::DuplicateIdentifier(id)) if id == PBKDF2_SHA512));

        // The registered scheme is untouched
        assert!(registry
            .lookup(PBKDF2_SHA512)
            .map(|scheme| scheme.min_salt_len() == 1)
            .unwrap_or(false));
    }

    #[test]
    fn test_register_rejects_separator() {
        let mut registry = Registry::empty();
        let result = registry.register(Scheme::new(
            "a$b",
            Layout::SaltDigest,
            0,
            Params::default(),
            reversed,
        ));
        assert!(matches!(
            result,
            Err(MincerError::Decode(DecodeError::MissingIdentifier))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_construct_checks_salt_len() {
        let result = Registry::standard().construct(ARGON2I, &[0u8; 4], Params::default());
        assert!(matches!(
            result,
            Err(MincerError::InvalidNonce {
                minimum: 8,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_resolves_layout() -> MincerResult<()> {
        let registry = Registry::extended();

        let (scheme, decoded) = registry.decode("pbkdf2+sha512$c2FsdA$aGFzaA")?;
        assert_eq!(scheme.identifier(), PBKDF2_SHA512);
        assert_eq!(decoded.salt(), b"salt");

        let (scheme, decoded) = registry.decode("bcrypt+hmac-sha512$c=6$c2FsdA$aGFzaA")?;
        assert_eq!(scheme.identifier(), BCRYPT_HMAC_SHA512);
        assert_eq!(decoded.params(), Params::with_cost(6));
        Ok(())
    }

    #[test]
    fn test_decode_unknown_identifier() {
        let registry = Registry::standard();
        let result = registry.decode("md5$c2FsdA$aGFzaA");
        assert!(matches!(result, Err(MincerError::StrategyNotSupported(_))));
    }

    #[test]
    fn test_decode_layout_mismatch() {
        // A bcrypt-shaped fragment under a PBKDF2 identifier
        let registry = Registry::standard();
        let result = registry.decode("pbkdf2+sha512$c=6$c2FsdA$aGFzaA");
        assert!(matches!(
            result,
            Err(MincerError::Decode(DecodeError::FieldCount {
                expected: 3,
                found: 4
            }))
        ));
    }

    #[test]
    fn test_global_is_shared() {
        let first = Registry::global();
        let second = Registry::global();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_identifiers_sorted() {
        let identifiers: Vec<_> = Registry::standard().identifiers().collect();
        let mut sorted = identifiers.clone();
        sorted.sort_unstable();
        assert_eq!(identifiers, sorted);
    }
}
