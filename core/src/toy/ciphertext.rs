use serde::Serialize;

/// A toy ciphertext. Wide enough that `pt + r * key` cannot overflow for any
/// `i64` plaintext and key and any blinding factor up to
/// [`BLINDING_LIMIT`](crate::toy::BLINDING_LIMIT). Only produced by
/// encryption and [`homomorphic_add`](Self::homomorphic_add), so every value
/// stays below `2^94` per encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ToyCiphertext {
    pub(crate) value: u128,
}

impl ToyCiphertext {
    pub fn value(&self) -> u128 {
        self.value
    }
}
