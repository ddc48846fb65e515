//! Test vector types for the encoded hash format.
//!
//! Each JSON file holds one suite per algorithm identifier. Success vectors
//! carry the password, the hex-encoded salt and the exact expected encoding;
//! expect-fail vectors carry a malformed or unsupported encoding that must be
//! rejected with an error.

// Some fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for one encoded hash.
#[derive(Debug, Deserialize)]
pub struct HashTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Plaintext password, used as UTF-8 bytes
    pub password: String,
    /// Hex-encoded salt (null for fail tests)
    pub salt: Option<String>,
    /// Expected encoded hash, or the malformed input for fail tests
    pub hash: String,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
