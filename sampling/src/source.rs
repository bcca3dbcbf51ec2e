use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

pub const SEED_BYTES: usize = 32;

/// Seedable randomness source handed to every operation that draws.
pub struct Source {
    source: ChaCha8Rng,
}

/// Draws a fresh seed from the thread-local OS-seeded generator.
pub fn new_seed() -> [u8; SEED_BYTES] {
    let mut seed: [u8; SEED_BYTES] = [0u8; SEED_BYTES];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; SEED_BYTES]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn from_entropy() -> Source {
        Source::new(new_seed())
    }

    /// Derives an independent child source, e.g. one per what-if scenario.
    pub fn branch(&mut self) -> ([u8; SEED_BYTES], Self) {
        let seed: [u8; SEED_BYTES] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; SEED_BYTES] {
        let mut seed: [u8; SEED_BYTES] = [0u8; SEED_BYTES];
        self.fill_bytes(&mut seed);
        seed
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
