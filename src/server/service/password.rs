//! Password hashing and verification using Argon2
//!
//! Hashes are stored in PHC string format, which embeds the salt and the parameters
//! used, so verification does not depend on the parameters of the current service.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::server::error::AppError;

/// One-way password hash & verify primitive.
///
/// Cheap to clone, shared through `AppState`.
#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Creates a service using the Argon2id defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with minimal Argon2 cost for fast tests.
    #[cfg(test)]
    pub fn insecure_for_tests() -> Self {
        use argon2::{Algorithm, Params, Version};

        let params = Params::new(
            Params::MIN_M_COST,
            Params::MIN_T_COST,
            Params::MIN_P_COST,
            None,
        )
        .expect("minimal argon2 params are valid");

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// # Arguments
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(String)` - PHC formatted hash
    /// - `Err(AppError::PasswordHash)` - Hashing failed
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::PasswordHash(e.to_string()))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// # Arguments
    /// - `password` - Plaintext password to check
    /// - `hash` - Stored PHC formatted hash
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::PasswordHash)` - Stored hash could not be parsed or checked
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| AppError::PasswordHash(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::PasswordHash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let passwords = PasswordService::insecure_for_tests();
        let hash = passwords.hash("correct-horse-battery-staple").unwrap();

        assert!(hash.starts_with("$argon2id"));
        assert!(passwords
            .verify("correct-horse-battery-staple", &hash)
            .unwrap());
    }

    #[test]
    fn rejects_wrong_password() {
        let passwords = PasswordService::insecure_for_tests();
        let hash = passwords.hash("password").unwrap();

        assert!(!passwords.verify("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn salts_every_hash() {
        let passwords = PasswordService::insecure_for_tests();

        let first = passwords.hash("password").unwrap();
        let second = passwords.hash("password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn verifies_hash_from_default_parameters() {
        let hash = PasswordService::new().hash("password").unwrap();

        assert!(PasswordService::insecure_for_tests()
            .verify("password", &hash)
            .unwrap());
    }

    #[test]
    fn errors_on_malformed_hash() {
        let result = PasswordService::insecure_for_tests().verify("password", "plaintext");

        assert!(matches!(result, Err(AppError::PasswordHash(_))));
    }
}
