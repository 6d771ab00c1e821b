//! Password hashing.
//!
//! Passwords are kept as Argon2id PHC strings with a random per-password
//! salt. Verification goes through the `argon2` verifier, which compares
//! in constant time.

use argon2::password_hash::{self, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::config::SecurityConfig;
use crate::error::AuthError;

/// A hashed password in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHash")
            .field("phc_string", &"[REDACTED]")
            .finish()
    }
}

/// Argon2id hasher configured from [`SecurityConfig`].
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Build a hasher, validating the cost parameters.
    pub fn new(config: SecurityConfig) -> Result<Self, AuthError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|err| AuthError::Hashing(err.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<PasswordHash, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| AuthError::Hashing(err.to_string()))?;

        Ok(PasswordHash(hash.to_string()))
    }

    /// Check `password` against a stored hash.
    ///
    /// A hash that does not parse never verifies.
    pub fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        let Ok(parsed) = password_hash::PasswordHash::new(hash.as_str()) else {
            return false;
        };
        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> PasswordHasher {
        PasswordHasher::new(SecurityConfig {
            memory_kib: 256,
            iterations: 1,
            parallelism: 1,
        })
        .expect("valid params")
    }

    #[test]
    fn hash_is_salted_phc() {
        let hasher = cheap();
        let first = hasher.hash("abc123").expect("hash");
        let second = hasher.hash("abc123").expect("hash");

        assert!(first.as_str().starts_with("$argon2id$v=19$"));
        assert_ne!(first, second);
        assert!(!first.as_str().contains("abc123"));
    }

    #[test]
    fn verify_matches_only_original() {
        let hasher = cheap();
        let hash = hasher.hash("abc123").expect("hash");

        assert!(hasher.verify("abc123", &hash));
        assert!(!hasher.verify("abc124", &hash));
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        let hasher = cheap();
        assert!(!hasher.verify("abc123", &PasswordHash("abc123".to_string())));
    }

    #[test]
    fn rejects_invalid_params() {
        let result = PasswordHasher::new(SecurityConfig {
            memory_kib: 1,
            iterations: 0,
            parallelism: 0,
        });
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }

    #[test]
    fn debug_redacts() {
        let hash = cheap().hash("abc123").expect("hash");
        assert!(format!("{hash:?}").contains("REDACTED"));
    }
}
