use serde::Serialize;

use crate::{CipherInputViolation, Result};

/// The shared modulus-like key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToySecret {
    pub(crate) key: u64,
}

impl ToySecret {
    pub fn new(key: i64) -> Result<Self> {
        if key <= 0 {
            return Err(CipherInputViolation::NonPositiveKey(key).into());
        }
        Ok(Self { key: key as u64 })
    }

    pub fn key(&self) -> u64 {
        self.key
    }
}
