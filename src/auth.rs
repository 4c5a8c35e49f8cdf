//! Credential comparison used by the login screen.
//!
//! This is a placeholder check, not an authentication mechanism: a pair is
//! accepted when username and password are textually equal. Nothing is
//! stored, hashed or sent anywhere.

use thiserror::Error;

/// Inline message shown when the comparison fails.
pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

/// Errors a login attempt can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Credenciais inválidas")]
    InvalidCredentials,
}

/// Borrowed view of the two login fields at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }

    /// Accept the pair when both fields hold exactly the same string.
    ///
    /// Empty equals empty. No trimming or case folding.
    pub fn verify(&self) -> Result<(), AuthError> {
        if self.username == self.password {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_fields_accepted() {
        assert!(Credentials::new("abc", "abc").verify().is_ok());
        assert!(Credentials::new("", "").verify().is_ok());
        assert!(Credentials::new("Tênis ⚽", "Tênis ⚽").verify().is_ok());
    }

    #[test]
    fn test_different_fields_rejected() {
        assert_eq!(
            Credentials::new("abc", "xyz").verify(),
            Err(AuthError::InvalidCredentials)
        );
        assert!(Credentials::new("abc", "").verify().is_err());
    }

    #[test]
    fn test_no_normalization() {
        assert!(Credentials::new("abc", "abc ").verify().is_err());
        assert!(Credentials::new("abc", "ABC").verify().is_err());
    }

    #[test]
    fn test_error_message_matches_constant() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), INVALID_CREDENTIALS);
    }
}
