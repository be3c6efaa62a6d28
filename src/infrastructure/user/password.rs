//! Password hashing using peppered SHA-256

use sha2::{Digest, Sha256};

use crate::domain::user::PasswordHasher;

/// Deterministic SHA-256 hasher
///
/// Produces the lowercase hex digest of `pepper || password`. The same input
/// always yields the same output, which login relies on.
#[derive(Clone, Default)]
pub struct Sha256Hasher {
    pepper: String,
}

impl Sha256Hasher {
    /// Create a hasher without a pepper
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher that prefixes every password with `pepper`
    pub fn with_pepper(pepper: impl Into<String>) -> Self {
        Self {
            pepper: pepper.into(),
        }
    }
}

impl std::fmt::Debug for Sha256Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256Hasher")
            .field("pepper", &"[REDACTED]")
            .finish()
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> String {
        let digest = Sha256::new()
            .chain_update(self.pepper.as_bytes())
            .chain_update(plaintext.as_bytes())
            .finalize();

        hex::encode(digest)
    }
}
