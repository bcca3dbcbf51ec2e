use serde::Serialize;

use crate::{CipherInputViolation, Result, toy::ToySecret};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ToyPlaintext {
    pub(crate) value: u64,
}

impl ToyPlaintext {
    /// Any non-negative value is accepted; values at or above the key are
    /// encrypted but will not decrypt back to themselves.
    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(CipherInputViolation::NegativePlaintext(value).into());
        }
        Ok(Self { value: value as u64 })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Whether `self` lies in `[0, key)`.
    pub fn fits(&self, sk: &ToySecret) -> bool {
        self.value < sk.key
    }
}
