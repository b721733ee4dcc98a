use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use sha2::{Digest, Sha256};

use crate::error::FrontdeskError;

/// Pluggable password hashing strategy. Object-safe so the selected scheme
/// can live in shared state as `Arc<dyn PasswordHasher>`.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, FrontdeskError>;

    /// Recompute-and-compare (legacy) or parse-and-verify (Argon2). Any
    /// malformed stored hash verifies as false, never as an error.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}

impl<T: PasswordHasher + ?Sized> PasswordHasher for Arc<T> {
    fn hash(&self, password: &str) -> Result<String, FrontdeskError> {
        (**self).hash(password)
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        (**self).verify(password, stored_hash)
    }
}

/// Legacy scheme: unsalted SHA-256 hex digest. Deterministic, so equal
/// passwords produce equal hashes. Selectable only for behavioral parity
/// with data written by the predecessor system.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256PasswordHasher;

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, FrontdeskError> {
        Ok(hex::encode(Sha256::digest(password.as_bytes())))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        hex::encode(Sha256::digest(password.as_bytes())) == stored_hash
    }
}

/// Default scheme: Argon2id with a random per-password salt, stored as a
/// PHC string.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, FrontdeskError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow::anyhow!("argon2 hash: {e}").into())
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        PasswordHash::new(stored_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// Which hashing scheme a deployment runs. Hashes written by one scheme do
/// not verify under the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    Sha256,
    #[default]
    Argon2,
}

impl PasswordScheme {
    /// Parse the `PASSWORD_SCHEME` env value; anything but `sha256` selects
    /// the default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "sha256" => Self::Sha256,
            _ => Self::Argon2,
        }
    }

    pub fn hasher(self) -> Arc<dyn PasswordHasher> {
        match self {
            Self::Sha256 => Arc::new(Sha256PasswordHasher),
            Self::Argon2 => Arc::new(Argon2PasswordHasher),
        }
    }
}
