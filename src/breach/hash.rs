//! SHA-1 split into range-query prefix and locally-compared suffix.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

/// Length of the hash prefix sent to the range endpoint (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// Length of the hash suffix kept in-process (35 hex characters).
pub const SUFFIX_LEN: usize = 35;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// First 5 uppercase hex characters of the password's SHA-1.
///
/// The only value derived from the password that may leave the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashPrefix([u8; PREFIX_LEN]);

/// Remaining 35 uppercase hex characters of the password's SHA-1.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HashSuffix([u8; SUFFIX_LEN]);

/// Hashes the password and splits the uppercase hex digest.
pub fn split_hash(password: &SecretString) -> (HashPrefix, HashSuffix) {
    let digest: [u8; 20] = Sha1::digest(password.expose_secret().as_bytes()).into();

    let mut hex = [0u8; PREFIX_LEN + SUFFIX_LEN];
    for (i, byte) in digest.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }

    let mut prefix = [0u8; PREFIX_LEN];
    let mut suffix = [0u8; SUFFIX_LEN];
    prefix.copy_from_slice(&hex[..PREFIX_LEN]);
    suffix.copy_from_slice(&hex[PREFIX_LEN..]);

    (HashPrefix(prefix), HashSuffix(suffix))
}

impl HashPrefix {
    /// Parses a 5-character hex prefix, normalizing to uppercase.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != PREFIX_LEN || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        let mut prefix = [0u8; PREFIX_LEN];
        for (dst, src) in prefix.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Some(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        // Only ever built from HEX_CHARS or validated ASCII hex digits.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for HashPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HashPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashPrefix").field(&self.as_str()).finish()
    }
}

impl HashSuffix {
    /// Exact comparison against a suffix read from a range response.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_slice() == candidate.as_bytes()
    }
}

impl fmt::Debug for HashSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashSuffix([REDACTED])")
    }
}
