use sha2::{Digest, Sha256};

use crate::{PseudonymConfig, PseudonymViolation, Result, pseudonym::Salt};

/// Hex length of a full SHA-256 digest.
pub const MAX_DIGEST_HEX_LEN: usize = 64;

/// Maps values to stable pseudonyms under one salt.
#[derive(Clone, Debug)]
pub struct Pseudonymizer {
    salt: Salt,
    digest_hex_len: usize,
}

impl Pseudonymizer {
    pub fn new(salt: Salt, digest_hex_len: usize) -> Result<Self> {
        if digest_hex_len == 0 || digest_hex_len > MAX_DIGEST_HEX_LEN {
            return Err(PseudonymViolation::DigestLength {
                got: digest_hex_len,
                max: MAX_DIGEST_HEX_LEN,
            }
            .into());
        }
        Ok(Self { salt, digest_hex_len })
    }

    pub fn with_config(salt: Salt, cfg: &PseudonymConfig) -> Result<Self> {
        Self::new(salt, cfg.digest_hex_len)
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// Truncated hex of `SHA-256(salt || 0x00 || value)`.
    pub fn pseudonymize(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update([0u8]);
        hasher.update(value.as_bytes());
        let digest: [u8; 32] = hasher.finalize().into();

        let mut out: String = hex::encode(digest);
        out.truncate(self.digest_hex_len);
        out
    }
}
