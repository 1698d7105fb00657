//! System prompt fingerprinting.
//!
//! Brains log a fingerprint of their system prompt at startup so operators can
//! tell which prompt revision a running instance was configured with.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Compute a stable lowercase-hex SHA-256 fingerprint of a prompt.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest
        .iter()
        .fold(String::with_capacity(digest.len() * 2), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}
