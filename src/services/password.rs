//! Password hashing and verification
//!
//! Credentials are stored as `base64(salt).base64(key)` where the key is
//! derived with PBKDF2-HMAC-SHA256. The salt length, output length,
//! iteration count and separator are part of the stored format: hashes
//! written by one build must verify under another.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{AppError, AppResult};

const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;
const ITERATIONS: u32 = 100_000;
const SEPARATOR: char = '.';

/// Derive a stored hash from a password.
///
/// Every call draws a fresh salt, so hashing the same password twice
/// yields different strings. Fails only if the system random source is
/// unavailable.
pub fn hash_password(password: &str) -> AppResult<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| AppError::Internal(format!("System random source unavailable: {}", e)))?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut key);

    Ok(format!(
        "{}{}{}",
        STANDARD.encode(salt),
        SEPARATOR,
        STANDARD.encode(key)
    ))
}

/// Check a candidate password against a stored hash.
///
/// A malformed stored hash (missing separator, undecodable base64) is a
/// verification failure, indistinguishable from a wrong password.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Some((salt_part, key_part)) = stored_hash.split_once(SEPARATOR) else {
        return false;
    };
    let Ok(salt) = STANDARD.decode(salt_part) else {
        return false;
    };
    let Ok(stored_key) = STANDARD.decode(key_part) else {
        return false;
    };

    let mut derived = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, ITERATIONS, &mut derived);

    // ct_eq resolves to false on length mismatch without early exit
    bool::from(derived.as_slice().ct_eq(stored_key.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_contains_single_separator() {
        let hash = hash_password("password123").unwrap();
        assert_eq!(hash.matches(SEPARATOR).count(), 1);
        let (salt, key) = hash.split_once(SEPARATOR).unwrap();
        assert!(!salt.is_empty());
        assert!(!key.is_empty());
    }

    #[test]
    fn test_distinct_salts_per_call() {
        let hash1 = hash_password("same").unwrap();
        let hash2 = hash_password("same").unwrap();
        assert_ne!(hash1, hash2);
        assert!(verify_password("same", &hash1));
        assert!(verify_password("same", &hash2));
    }

    #[test]
    fn test_verify_matching_password() {
        let hash = hash_password("MySecretPassword!").unwrap();
        assert!(verify_password("MySecretPassword!", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("any", ""));
        assert!(!verify_password("any", "onlyonepart"));
        assert!(!verify_password("any", "not-base64!.also-not"));
        // Valid base64 but the wrong key length
        assert!(!verify_password("any", "YQ==.YQ=="));
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let hash = hash_password("").unwrap();
        assert!(verify_password("", &hash));
        assert!(!verify_password("x", &hash));
    }
}
