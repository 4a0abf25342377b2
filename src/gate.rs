//! Local password gate
//!
//! A shared-secret gate, not real authentication: the newsletter data is
//! only as private as the published files themselves. The configured
//! password is stored as a SHA-256 digest; a successful entry is
//! remembered for thirty days in the persisted state.

use crate::core::{PersistedState, StoredAuth};
use sha2::{Digest, Sha256};

/// How long a successful entry is remembered
pub const AUTH_VALIDITY_DAYS: i64 = 30;

/// Hexadecimal SHA-256 digest of a password
pub fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compares password attempts and stored grants against one digest
pub struct PasswordGate {
    expected_hash: String,
}

impl PasswordGate {
    pub fn new(expected_hash: &str) -> Self {
        Self {
            expected_hash: expected_hash.to_string(),
        }
    }

    /// Whether the persisted grant is still valid. An expired grant or one
    /// minted for a different password does not count.
    pub fn is_authenticated(&self, state: &PersistedState, now: i64) -> bool {
        match &state.auth {
            Some(auth) => now <= auth.expires && auth.hash == self.expected_hash,
            None => false,
        }
    }

    /// Check a password attempt
    pub fn verify(&self, input: &str) -> bool {
        !self.expected_hash.is_empty() && sha256_hex(input) == self.expected_hash
    }

    /// Record a successful entry in the persisted state
    pub fn grant(&self, state: &mut PersistedState, now: i64) {
        state.auth = Some(StoredAuth {
            hash: self.expected_hash.clone(),
            expires: now + AUTH_VALIDITY_DAYS * 24 * 60 * 60,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_verify_round_trip() {
        let gate = PasswordGate::new(&sha256_hex("tigers2026"));
        assert!(gate.verify("tigers2026"));
        assert!(!gate.verify("Tigers2026"));
    }

    #[test]
    fn test_empty_configured_hash_never_verifies() {
        let gate = PasswordGate::new("");
        assert!(!gate.verify(""));
    }

    #[test]
    fn test_grant_and_expiry() {
        let gate = PasswordGate::new(&sha256_hex("tigers2026"));
        let mut state = PersistedState::default();
        let now = 1_700_000_000;

        assert!(!gate.is_authenticated(&state, now));

        gate.grant(&mut state, now);
        assert!(gate.is_authenticated(&state, now));
        assert!(gate.is_authenticated(&state, now + AUTH_VALIDITY_DAYS * 24 * 60 * 60));
        assert!(!gate.is_authenticated(
            &state,
            now + AUTH_VALIDITY_DAYS * 24 * 60 * 60 + 1
        ));
    }

    #[test]
    fn test_grant_for_old_password_is_rejected() {
        let old_gate = PasswordGate::new(&sha256_hex("lions2025"));
        let mut state = PersistedState::default();
        old_gate.grant(&mut state, 1_700_000_000);

        let gate = PasswordGate::new(&sha256_hex("tigers2026"));
        assert!(!gate.is_authenticated(&state, 1_700_000_000));
    }
}
