use serde::Serialize;

use crate::toy::{ToyCiphertext, ToyPlaintext, ToySecret};

/// Classification of a decrypted sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SumVerdict {
    /// No overflow and the decrypted sum is the true sum.
    Exact,
    /// `pa + pb >= key`: the decrypted sum wrapped around the key. Expected
    /// behaviour of the scheme, not a fault. A decryption is always below the
    /// key, so under overflow it can never match the true sum.
    OverflowWrapped,
    /// No overflow but the decryption is wrong: the ciphertext does not come
    /// from these plaintexts.
    Mismatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SumCheck {
    /// `pa + pb` computed in the clear.
    pub expected: u128,
    pub decrypted: u64,
    pub correct: bool,
    pub overflow_detected: bool,
}

impl SumCheck {
    pub fn verdict(&self) -> SumVerdict {
        if self.overflow_detected {
            SumVerdict::OverflowWrapped
        } else if self.correct {
            SumVerdict::Exact
        } else {
            SumVerdict::Mismatch
        }
    }
}

pub fn check_sum(pa: &ToyPlaintext, pb: &ToyPlaintext, sk: &ToySecret, ct_sum: &ToyCiphertext) -> SumCheck {
    let expected: u128 = pa.value as u128 + pb.value as u128;
    let decrypted: u64 = ct_sum.decrypt(sk).value;
    SumCheck {
        expected,
        decrypted,
        correct: decrypted as u128 == expected,
        overflow_detected: expected >= sk.key as u128,
    }
}

/// Whether `ct_sum` decrypts to `pa + pb`. False whenever `pa + pb >= key`
/// for honest ciphertexts; use [`check_sum`] to tell overflow from a wrong
/// ciphertext.
pub fn verify_sum(pa: &ToyPlaintext, pb: &ToyPlaintext, sk: &ToySecret, ct_sum: &ToyCiphertext) -> bool {
    check_sum(pa, pb, sk, ct_sum).correct
}
