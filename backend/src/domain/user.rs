//! User entity and signup validation.

use std::fmt;

use zeroize::Zeroizing;

use super::auth::PasswordDigest;

/// Minimum accepted plain-text password length.
pub const PASSWORD_MIN: usize = 5;

/// Validation errors returned by [`NewUser::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Username was missing or blank once trimmed.
    BlankUsername,
    /// Email address did not contain an `@`.
    InvalidEmail,
    /// Plain-text password was shorter than [`PASSWORD_MIN`].
    PasswordTooShort { min: usize },
    /// The password could not be hashed.
    HashingFailed,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankUsername => write!(f, "username must not be blank"),
            Self::InvalidEmail => write!(f, "email address must contain an @"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::HashingFailed => write!(f, "password could not be hashed"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stored user record as read back from the repository.
#[derive(Debug, Clone)]
pub struct User {
    /// Generated primary key.
    pub id: i32,
    /// Display name chosen at signup.
    pub username: String,
    /// Unique email address used to log in.
    pub email: String,
    /// Salted one-way digest of the signup password.
    pub password: PasswordDigest,
}

/// Validated signup payload, password already hashed.
///
/// ## Invariants
/// - `email` contains an `@`.
/// - The digest was produced from a password of at least [`PASSWORD_MIN`]
///   characters.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name chosen at signup.
    pub username: String,
    /// Email address used to log in; uniqueness is enforced by the schema.
    pub email: String,
    /// Digest of the plain-text password.
    pub password: PasswordDigest,
}

impl NewUser {
    /// Validate raw signup input and hash the password.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UserValidationError::BlankUsername);
        }
        if !email.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        // Hold the plain text in a zeroizing buffer while hashing.
        let plain = Zeroizing::new(password.to_owned());
        if plain.len() < PASSWORD_MIN {
            return Err(UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        let password =
            PasswordDigest::hash(&plain).map_err(|_| UserValidationError::HashingFailed)?;
        Ok(Self {
            username: username.to_owned(),
            email: email.to_owned(),
            password,
        })
    }
}
