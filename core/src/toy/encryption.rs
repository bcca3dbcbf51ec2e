use std::num::NonZeroU64;

use rand_core::RngCore;
use rand_distr::Distribution;
use sampling::BoundedUniform;

use crate::{
    CipherConfig, CipherInputViolation, Result,
    toy::{ToyCiphertext, ToyPlaintext, ToySecret},
};

/// Largest blinding factor a [`Blinding`] may be configured to draw.
pub const BLINDING_LIMIT: u64 = 1_000_000_000;

/// Uniform draw of blinding factors over a closed range.
#[derive(Clone, Copy, Debug)]
pub struct Blinding {
    dist: BoundedUniform,
}

impl Blinding {
    pub fn new(min: u64, max: u64) -> Result<Self> {
        let violation = CipherInputViolation::BlindingRange {
            min,
            max,
            limit: BLINDING_LIMIT,
        };
        if min == 0 || max > BLINDING_LIMIT {
            return Err(violation.into());
        }
        let dist: BoundedUniform = BoundedUniform::new(min, max).ok_or(violation)?;
        Ok(Self { dist })
    }

    pub fn with_config(cfg: &CipherConfig) -> Result<Self> {
        Self::new(cfg.blinding_min, cfg.blinding_max)
    }

    pub fn min(&self) -> u64 {
        self.dist.lo()
    }

    pub fn max(&self) -> u64 {
        self.dist.hi()
    }

    pub fn draw<R: RngCore + ?Sized>(&self, source: &mut R) -> NonZeroU64 {
        let r: u64 = self.dist.sample(source);
        NonZeroU64::new(r).unwrap_or(NonZeroU64::MIN)
    }
}

impl ToyCiphertext {
    /// `pt + blinding_factor * key`, no randomness involved.
    pub fn encrypt_with_blinding(pt: &ToyPlaintext, sk: &ToySecret, blinding_factor: NonZeroU64) -> Self {
        Self {
            value: pt.value as u128 + blinding_factor.get() as u128 * sk.key as u128,
        }
    }

    /// Encrypts `pt` with a blinding factor drawn from `source`.
    pub fn encrypt_sk<R: RngCore + ?Sized>(pt: &ToyPlaintext, sk: &ToySecret, blinding: &Blinding, source: &mut R) -> Self {
        Self::encrypt_with_blinding(pt, sk, blinding.draw(source))
    }
}
