//! Password Digesting
//!
//! Deterministic unsalted SHA-256 digest of the plaintext password,
//! stored as lowercase hex. Verification re-digests the supplied
//! plaintext and compares in constant time.
//!
//! This scheme is deliberately kept compatible with the existing stored
//! digests: switching to a salted, memory-hard hash would make every
//! stored digest unverifiable. See DESIGN.md for the migration note.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, sha256, to_hex};

// ============================================================================
// Plaintext password (zeroized on drop)
// ============================================================================

/// Plaintext password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted. Any string is a
/// valid password at this layer — length rules live with form validation.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Digest the password (SHA-256, lowercase hex)
    pub fn digest(&self) -> PasswordDigest {
        PasswordDigest {
            hex: to_hex(&sha256(self.as_bytes())),
        }
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password digest (safe to store)
// ============================================================================

/// Stored password digest (64 lowercase hex characters)
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

impl PasswordDigest {
    /// Wrap a digest loaded from storage
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hex: s.into() }
    }

    /// Get the hex string for storage
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Verify a plaintext password against this digest
    ///
    /// Re-digests and compares in constant time.
    pub fn verify(&self, password: &PlainPassword) -> bool {
        let candidate = password.digest();
        constant_time_eq(self.hex.as_bytes(), candidate.hex.as_bytes())
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hex", &"[DIGEST]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = PlainPassword::new("secret123").digest();
        let b = PlainPassword::new("secret123").digest();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_digest_known_vector() {
        // SHA-256 of "hello"
        let digest = PlainPassword::new("hello").digest();
        assert_eq!(
            digest.as_str(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_digest_shape() {
        let digest = PlainPassword::new("будь-який пароль").digest();
        assert_eq!(digest.as_str().len(), 64);
        assert!(
            digest
                .as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_verify() {
        let digest = PlainPassword::new("correct horse").digest();
        assert!(digest.verify(&PlainPassword::new("correct horse")));
        assert!(!digest.verify(&PlainPassword::new("wrong horse")));
    }

    #[test]
    fn test_verify_stored_roundtrip() {
        let digest = PlainPassword::new("secret123").digest();
        let restored = PasswordDigest::from_stored(digest.as_str().to_string());
        assert!(restored.verify(&PlainPassword::new("secret123")));
    }

    #[test]
    fn test_debug_redaction() {
        let password = PlainPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let digest = password.digest();
        let debug_output = format!("{:?}", digest);
        assert!(!debug_output.contains("2cf2"));
    }
}
