use crate::{CipherInputViolation, Result, toy::ToyCiphertext};

impl ToyCiphertext {
    /// Plain integer addition of the two ciphertexts. No key or plaintext is
    /// involved. Fails only if the sum leaves the `u128` range, which takes
    /// billions of fresh ciphertexts.
    pub fn homomorphic_add(&self, other: &ToyCiphertext) -> Result<ToyCiphertext> {
        let value: u128 = self
            .value
            .checked_add(other.value)
            .ok_or(CipherInputViolation::CiphertextOverflow)?;
        Ok(ToyCiphertext { value })
    }

    /// Folds any number of ciphertexts with [`homomorphic_add`](Self::homomorphic_add).
    /// An empty input sums to the zero ciphertext.
    pub fn try_sum<'a, I>(cts: I) -> Result<ToyCiphertext>
    where
        I: IntoIterator<Item = &'a ToyCiphertext>,
    {
        cts.into_iter()
            .try_fold(ToyCiphertext { value: 0 }, |acc, ct| acc.homomorphic_add(ct))
    }
}
