use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Uniform distribution over the closed range `[lo, hi]`.
#[derive(Clone, Copy, Debug)]
pub struct BoundedUniform {
    lo: u64,
    hi: u64,
    inner: Uniform<u64>,
}

impl BoundedUniform {
    /// Returns `None` when `lo > hi`.
    pub fn new(lo: u64, hi: u64) -> Option<Self> {
        let inner: Uniform<u64> = Uniform::new_inclusive(lo, hi).ok()?;
        Some(Self { lo, hi, inner })
    }

    pub fn lo(&self) -> u64 {
        self.lo
    }

    pub fn hi(&self) -> u64 {
        self.hi
    }
}

impl Distribution<u64> for BoundedUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        self.inner.sample(rng)
    }
}
