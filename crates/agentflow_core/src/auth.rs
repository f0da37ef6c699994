//! Credential primitives: password digests and API-key tokens.
//!
//! # Responsibility
//! - Produce and compare deterministic password digests.
//! - Generate high-entropy bearer tokens with a recognizable prefix.
//!
//! # Invariants
//! - `hash_password` is deterministic: equal inputs produce equal digests.
//! - Generated API keys always start with [`API_KEY_PREFIX`].
//! - Plaintext passwords never leave this module's call frame.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Recognizable prefix carried by every generated API key.
pub const API_KEY_PREFIX: &str = "afk_";

const API_KEY_RANDOM_BYTES: usize = 32;

/// Returns the SHA-256 hex digest of a plaintext password.
///
/// Deterministic by contract: the store compares digests directly, so the
/// same password must always map to the same 64-character string.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Checks a plaintext password against a stored digest.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}

/// Generates a fresh API key: `afk_` plus 43 URL-safe base64 characters
/// encoding 32 bytes from the OS CSPRNG.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_RANDOM_BYTES];
    OsRng.fill_bytes(&mut bytes);
    format!("{API_KEY_PREFIX}{}", URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_hex_encoded() {
        let first = hash_password("password123");
        let second = hash_password("password123");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_passwords_produce_different_digests() {
        assert_ne!(hash_password("password123"), hash_password("password456"));
    }

    #[test]
    fn verify_accepts_matching_and_rejects_wrong_password() {
        let digest = hash_password("correct horse");
        assert!(verify_password("correct horse", &digest));
        assert!(!verify_password("wrong horse", &digest));
    }

    #[test]
    fn api_keys_have_prefix_and_fixed_length() {
        let key = generate_api_key();
        assert!(key.starts_with(API_KEY_PREFIX));
        // 4-char prefix + 43 chars of unpadded base64 for 32 bytes.
        assert_eq!(key.len(), 47);
    }

    #[test]
    fn api_keys_are_unique_per_call() {
        assert_ne!(generate_api_key(), generate_api_key());
    }
}
