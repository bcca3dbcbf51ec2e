use rand_core::RngCore;

use crate::{PseudonymViolation, Result};

/// Secret bytes mixed into every pseudonym digest.
#[derive(Clone, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
    pub fn generate<R: RngCore + ?Sized>(len: usize, source: &mut R) -> Result<Self> {
        if len == 0 {
            return Err(PseudonymViolation::EmptySalt.into());
        }
        let mut bytes: Vec<u8> = vec![0u8; len];
        source.fill_bytes(&mut bytes);
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(PseudonymViolation::EmptySalt.into());
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes: Vec<u8> = hex::decode(s.trim()).map_err(|e| PseudonymViolation::MalformedSalt(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Salt").field(&format_args!("{} bytes", self.0.len())).finish()
    }
}
