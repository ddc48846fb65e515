//! Process-wide default hasher and the convenience functions built on it.
//!
//! The default [`Hasher`] is created on first use, exactly once, and shared
//! by every caller afterwards. Concurrent first callers block until the one
//! initialization finishes and then all observe the same instance.

use once_cell::sync::OnceCell;

use crate::core::algorithm::DEFAULT_ALGORITHM;
use crate::core::error::MincerResult;
use crate::core::hasher::{identifier_differs, verify_with, Hasher};
use crate::core::registry::Registry;

static DEFAULT_HASHER: OnceCell<Hasher> = OnceCell::new();

/// Returns the process-wide default hasher, creating it on first use.
///
/// # Errors
///
/// Returns the construction error if initialization fails. A failed
/// initialization is retried by the next caller.
pub fn default_hasher() -> MincerResult<&'static Hasher> {
    DEFAULT_HASHER.get_or_try_init(|| {
        tracing::debug!(
            algorithm = DEFAULT_ALGORITHM.identifier(),
            "initializing default hasher"
        );
        Hasher::new()
    })
}

/// Hashes `password` with the default hasher.
///
/// # Errors
///
/// See [`Hasher::hash`].
pub fn hash(password: impl AsRef<[u8]>) -> MincerResult<String> {
    default_hasher()?.hash(password)
}

/// Checks `password` against `encoded` using the standard registry.
///
/// Works for any hash whose identifier is one of the standard algorithms,
/// regardless of the default algorithm.
///
/// # Errors
///
/// See [`verify_with`].
pub fn verify(encoded: impl AsRef<[u8]>, password: impl AsRef<[u8]>) -> MincerResult<bool> {
    verify_with(&Registry::global(), encoded.as_ref(), password.as_ref())
}

/// Returns `true` if `encoded` was not produced by the default algorithm.
#[must_use]
pub fn needs_upgrade(encoded: impl AsRef<[u8]>) -> bool {
    identifier_differs(encoded.as_ref(), DEFAULT_ALGORITHM.identifier())
}
