//! Authentication primitives: salted password digests.
//!
//! Passwords are hashed with argon2 before they ever reach a repository, so
//! the persistence layer only sees opaque PHC strings. Plain-text input is
//! kept in zeroizing buffers by the callers and dropped as early as possible.

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

/// Error raised when a plain-text password cannot be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashError(String);

impl fmt::Display for PasswordHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "password hashing failed: {}", self.0)
    }
}

impl std::error::Error for PasswordHashError {}

/// Salted one-way digest of a user password, stored as a PHC string.
///
/// ## Invariants
/// - The wrapped string is either a valid argon2 PHC string produced by
///   [`PasswordDigest::hash`] or whatever the database returned; malformed
///   stored values simply never verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hash a plain-text password with a freshly generated salt.
    pub fn hash(plain: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|digest| Self(digest.to_string()))
            .map_err(|error| PasswordHashError(error.to_string()))
    }

    /// Wrap a digest string read back from storage.
    pub fn from_stored(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Check a plain-text password against this digest.
    ///
    /// A digest that fails to parse counts as a mismatch rather than an
    /// error; the caller cannot do anything more useful with the distinction.
    pub fn verify(&self, plain: &str) -> bool {
        PasswordHash::new(&self.0)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// The PHC string handed to the persistence layer.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
