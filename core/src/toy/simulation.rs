use rand_core::RngCore;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    CipherConfig, Result,
    toy::{Blinding, SumVerdict, ToyCiphertext, ToyPlaintext, ToySecret, check_sum},
};

/// A plaintext together with the blinding factor that hid it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncryptedValue {
    pub plaintext: ToyPlaintext,
    pub blinding_factor: u64,
    pub ciphertext: ToyCiphertext,
}

impl EncryptedValue {
    fn generate<R: RngCore + ?Sized>(pt: ToyPlaintext, sk: &ToySecret, blinding: &Blinding, source: &mut R) -> Self {
        let r = blinding.draw(source);
        Self {
            plaintext: pt,
            blinding_factor: r.get(),
            ciphertext: ToyCiphertext::encrypt_with_blinding(&pt, sk, r),
        }
    }
}

/// Two values encrypted under one key, fresh for every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CipherPair {
    pub key: ToySecret,
    pub a: EncryptedValue,
    pub b: EncryptedValue,
}

impl CipherPair {
    pub fn generate<R: RngCore + ?Sized>(
        sk: &ToySecret,
        pa: ToyPlaintext,
        pb: ToyPlaintext,
        blinding: &Blinding,
        source: &mut R,
    ) -> Self {
        let a: EncryptedValue = EncryptedValue::generate(pa, sk, blinding, source);
        let b: EncryptedValue = EncryptedValue::generate(pb, sk, blinding, source);
        Self { key: *sk, a, b }
    }
}

/// Everything a caller needs to display one run of the demonstration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub ciphertext_a: ToyCiphertext,
    pub ciphertext_b: ToyCiphertext,
    pub ciphertext_sum: ToyCiphertext,
    pub decrypted_a: u64,
    pub decrypted_b: u64,
    pub decrypted_sum: u64,
    pub expected_sum: u128,
    pub overflow_detected: bool,
    pub correct: bool,
    pub verdict: SumVerdict,
    pub pair: CipherPair,
}

/// The toy additive scheme with its blinding range fixed.
#[derive(Clone, Copy, Debug)]
pub struct ToyCipher {
    blinding: Blinding,
}

impl ToyCipher {
    pub fn new(cfg: &CipherConfig) -> Result<Self> {
        Ok(Self {
            blinding: Blinding::with_config(cfg)?,
        })
    }

    pub fn blinding(&self) -> &Blinding {
        &self.blinding
    }

    pub fn encrypt<R: RngCore + ?Sized>(&self, pt: &ToyPlaintext, sk: &ToySecret, source: &mut R) -> ToyCiphertext {
        ToyCiphertext::encrypt_sk(pt, sk, &self.blinding, source)
    }

    /// Encrypts `a` and `b` under `key`, adds the ciphertexts and decrypts
    /// everything. Overflow of `a + b` past the key is reported, not an error.
    pub fn simulate<R: RngCore + ?Sized>(&self, key: i64, a: i64, b: i64, source: &mut R) -> Result<SimulationReport> {
        let sk: ToySecret = ToySecret::new(key)?;
        let pa: ToyPlaintext = ToyPlaintext::new(a)?;
        let pb: ToyPlaintext = ToyPlaintext::new(b)?;

        let pair: CipherPair = CipherPair::generate(&sk, pa, pb, &self.blinding, source);
        let ct_sum: ToyCiphertext = pair.a.ciphertext.homomorphic_add(&pair.b.ciphertext)?;
        let check = check_sum(&pa, &pb, &sk, &ct_sum);

        debug!(
            key = sk.key(),
            r_a = pair.a.blinding_factor,
            r_b = pair.b.blinding_factor,
            ct_sum = %ct_sum.value(),
            "toy cipher run"
        );
        if check.overflow_detected {
            info!(
                key = sk.key(),
                expected = %check.expected,
                decrypted = check.decrypted,
                "plaintext sum reached the key, decrypted sum wrapped"
            );
        }

        Ok(SimulationReport {
            ciphertext_a: pair.a.ciphertext,
            ciphertext_b: pair.b.ciphertext,
            ciphertext_sum: ct_sum,
            decrypted_a: pair.a.ciphertext.decrypt(&sk).value(),
            decrypted_b: pair.b.ciphertext.decrypt(&sk).value(),
            decrypted_sum: check.decrypted,
            expected_sum: check.expected,
            overflow_detected: check.overflow_detected,
            correct: check.correct,
            verdict: check.verdict(),
            pair,
        })
    }
}
