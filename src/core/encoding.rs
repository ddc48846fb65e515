//! Encoding and decoding of the `$`-delimited hash format.
//!
//! Every encoded hash starts with its algorithm identifier:
//!
//! - `Layout::SaltDigest`: `{id}${salt}${digest}`
//! - `Layout::CostSaltDigest`: `{id}$c={cost}${salt}${digest}`
//!
//! Binary fields use the standard base64 alphabet without padding. The
//! identifier decides the layout, and the layout decides exactly how many
//! fields must follow it.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;
use zeroize::Zeroizing;

use crate::core::error::DecodeError;
use crate::core::nonce::Nonce;

/// Field separator.
pub const SEPARATOR: char = '$';

/// Prefix of the cost parameter field.
const COST_PREFIX: &str = "c=";

/// Field layout of one algorithm's encoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `{id}${salt}${digest}`
    SaltDigest,
    /// `{id}$c={cost}${salt}${digest}`
    CostSaltDigest,
}

impl Layout {
    /// Number of `$`-delimited fields, identifier included.
    #[must_use]
    pub const fn field_count(self) -> usize {
        match self {
            Self::SaltDigest => 3,
            Self::CostSaltDigest => 4,
        }
    }
}

/// Parameters carried in the encoded string besides salt and digest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    /// Cost factor, present only for `Layout::CostSaltDigest`.
    pub cost: Option<u32>,
}

impl Params {
    /// Parameters with a cost factor.
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost: Some(cost) }
    }
}

/// Splits an encoded hash into its identifier and the remaining fragment.
///
/// # Errors
///
/// Returns `DecodeError::MissingIdentifier` if there is no separator or the
/// identifier is empty.
pub fn split_identifier(encoded: &str) -> Result<(&str, &str), DecodeError> {
    match encoded.split_once(SEPARATOR) {
        Some((identifier, fragment)) if !identifier.is_empty() => Ok((identifier, fragment)),
        _ => Err(DecodeError::MissingIdentifier),
    }
}

/// Joins an identifier and a strategy fragment into the full encoded form.
#[must_use]
pub fn join(identifier: &str, fragment: &str) -> String {
    format!("{identifier}{SEPARATOR}{fragment}")
}

/// Builds the `{salt}${digest}` fragment.
#[must_use]
pub fn salt_digest_fragment(salt: &[u8], digest: &[u8]) -> String {
    format!(
        "{}{SEPARATOR}{}",
        BASE64_STANDARD_NO_PAD.encode(salt),
        BASE64_STANDARD_NO_PAD.encode(digest)
    )
}

/// Builds the `c={cost}${salt}${digest}` fragment.
#[must_use]
pub fn cost_salt_digest_fragment(cost: u32, salt: &[u8], digest: &[u8]) -> String {
    format!(
        "{COST_PREFIX}{cost}{SEPARATOR}{}",
        salt_digest_fragment(salt, digest)
    )
}

/// A decoded hash string.
///
/// Holds everything needed to recompute the hash for a candidate password:
/// identifier, parameters, salt and the stored digest.
#[derive(Clone)]
pub struct EncodedHash {
    identifier: String,
    layout: Layout,
    params: Params,
    salt: Nonce,
    digest: Zeroizing<Vec<u8>>,
}

impl EncodedHash {
    /// Decodes `encoded` according to `layout`.
    ///
    /// The identifier is taken as-is; resolving it to an algorithm (and hence
    /// a layout) is the registry's job.
    ///
    /// # Errors
    ///
    /// Returns a `DecodeError` if the field count does not match the layout,
    /// a parameter field is malformed, or a base64 field fails to decode.
    pub fn decode(encoded: &str, layout: Layout) -> Result<Self, DecodeError> {
        let (identifier, fragment) = split_identifier(encoded)?;
        let fields: Vec<&str> = fragment.split(SEPARATOR).collect();

        let (params, salt, digest) = match (layout, fields.as_slice()) {
            (Layout::SaltDigest, [salt, digest]) => (Params::default(), *salt, *digest),
            (Layout::CostSaltDigest, [cost, salt, digest]) => {
                (Params::with_cost(parse_cost(cost)?), *salt, *digest)
            }
            _ => {
                return Err(DecodeError::FieldCount {
                    expected: layout.field_count(),
                    found: fields.len() + 1,
                })
            }
        };

        Ok(Self {
            identifier: identifier.to_string(),
            layout,
            params,
            salt: Zeroizing::new(decode_field("salt", salt)?),
            digest: Zeroizing::new(decode_field("digest", digest)?),
        })
    }

    /// Returns the algorithm identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the field layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the encoded parameters.
    #[must_use]
    pub fn params(&self) -> Params {
        self.params
    }

    /// Returns the salt bytes.
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Returns the stored digest bytes.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}

fn parse_cost(field: &str) -> Result<u32, DecodeError> {
    let value = field
        .strip_prefix(COST_PREFIX)
        .ok_or_else(|| DecodeError::Parameter(format!("expected `{COST_PREFIX}<cost>`")))?;

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::Parameter("cost is not a decimal number".to_string()));
    }

    value
        .parse()
        .map_err(|_| DecodeError::Parameter("cost out of range".to_string()))
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, DecodeError> {
    BASE64_STANDARD_NO_PAD
        .decode(value)
        .map_err(|source| DecodeError::Base64 { field, source })
}

// =============================================================================
// Display (re-encoding)
// =============================================================================

impl Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fragment = match (self.layout, self.params.cost) {
            (Layout::CostSaltDigest, Some(cost)) => {
                cost_salt_digest_fragment(cost, &self.salt, &self.digest)
            }
            _ => salt_digest_fragment(&self.salt, &self.digest),
        };
        f.write_str(&join(&self.identifier, &fragment))
    }
}

impl Debug for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedHash")
            .field("identifier", &self.identifier)
            .field("layout", &self.layout)
            .field("params", &self.params)
            .field("salt_len", &self.salt.len())
            .field("digest", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_identifier() -> Result<(), DecodeError> {
        let (identifier, fragment) = split_identifier("pbkdf2+sha512$AAAA$BBBB")?;
        assert_eq!(identifier, "pbkdf2+sha512");
        assert_eq!(fragment, "AAAA$BBBB");
        Ok(())
    }

    #[test]
    fn test_split_identifier_missing() {
        assert!(matches!(
            split_identifier("pbkdf2+sha512"),
            Err(DecodeError::MissingIdentifier)
        ));
        assert!(matches!(
            split_identifier("$AAAA$BBBB"),
            Err(DecodeError::MissingIdentifier)
        ));
        assert!(matches!(
            split_identifier(""),
            Err(DecodeError::MissingIdentifier)
        ));
    }

    #[test]
    fn test_fragments() {
        assert_eq!(salt_digest_fragment(b"salt", b"hash"), "c2FsdA$aGFzaA");
        assert_eq!(
            cost_salt_digest_fragment(10, b"salt", b"hash"),
            "c=10$c2FsdA$aGFzaA"
        );
        assert_eq!(join("x", "c2FsdA$aGFzaA"), "x$c2FsdA$aGFzaA");
    }

    #[test]
    fn test_decode_salt_digest() -> Result<(), DecodeError> {
        let decoded = EncodedHash::decode("pbkdf2+sha512$c2FsdA$aGFzaA", Layout::SaltDigest)?;
        assert_eq!(decoded.identifier(), "pbkdf2+sha512");
        assert_eq!(decoded.params(), Params::default());
        assert_eq!(decoded.salt(), b"salt");
        assert_eq!(decoded.digest(), b"hash");
        assert_eq!(decoded.to_string(), "pbkdf2+sha512$c2FsdA$aGFzaA");
        Ok(())
    }

    #[test]
    fn test_decode_cost_salt_digest() -> Result<(), DecodeError> {
        let encoded = "bcrypt+hmac-sha512$c=12$c2FsdA$aGFzaA";
        let decoded = EncodedHash::decode(encoded, Layout::CostSaltDigest)?;
        assert_eq!(decoded.params(), Params::with_cost(12));
        assert_eq!(decoded.salt(), b"salt");
        assert_eq!(decoded.to_string(), encoded);
        Ok(())
    }

    #[test]
    fn test_decode_too_few_fields() {
        let result = EncodedHash::decode("pbkdf2+sha512$c2FsdA", Layout::SaltDigest);
        assert!(matches!(
            result,
            Err(DecodeError::FieldCount {
                expected: 3,
                found: 2
            })
        ));

        let result = EncodedHash::decode("bcrypt+hmac-sha512$c2FsdA$aGFzaA", Layout::CostSaltDigest);
        assert!(matches!(
            result,
            Err(DecodeError::FieldCount {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_decode_too_many_fields() {
        let result = EncodedHash::decode("pbkdf2+sha512$a$b$c$d$e$f", Layout::SaltDigest);
        assert!(matches!(
            result,
            Err(DecodeError::FieldCount {
                expected: 3,
                found: 7
            })
        ));
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = EncodedHash::decode("pbkdf2+sha512$!!!!$aGFzaA", Layout::SaltDigest);
        assert!(matches!(
            result,
            Err(DecodeError::Base64 { field: "salt", .. })
        ));

        // Padding is not part of the format
        let result = EncodedHash::decode("pbkdf2+sha512$c2FsdA$aGFzaA==", Layout::SaltDigest);
        assert!(matches!(
            result,
            Err(DecodeError::Base64 {
                field: "digest",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_invalid_cost() {
        for field in ["12", "c=", "c=+12", "c=abc", "c=99999999999", "cost=12"] {
            let encoded = format!("bcrypt+hmac-sha512${field}$c2FsdA$aGFzaA");
            let result = EncodedHash::decode(&encoded, Layout::CostSaltDigest);
            assert!(
                matches!(result, Err(DecodeError::Parameter(_))),
                "{field} should be rejected"
            );
        }
    }

    #[test]
    fn test_debug_redacts_digest() -> Result<(), DecodeError> {
        let decoded = EncodedHash::decode("pbkdf2+sha512$c2FsdA$aGFzaA", Layout::SaltDigest)?;
        let debug_str = format!("{decoded:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("aGFzaA"));
        Ok(())
    }
}
