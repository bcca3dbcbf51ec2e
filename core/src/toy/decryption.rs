use crate::toy::{ToyCiphertext, ToyPlaintext, ToySecret};

impl ToyCiphertext {
    /// `ct mod key`. Exact for a fresh ciphertext of a plaintext below the key.
    pub fn decrypt(&self, sk: &ToySecret) -> ToyPlaintext {
        // The remainder is below the key, which itself fits in an i64.
        ToyPlaintext {
            value: (self.value % sk.key as u128) as u64,
        }
    }
}
