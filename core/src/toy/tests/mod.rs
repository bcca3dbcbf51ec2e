mod properties;

use rand_core::RngCore;

/// Returns the same word forever. Lets tests pin the randomness source.
pub(crate) struct Constant(pub u64);

impl RngCore for Constant {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        bytes
            .iter_mut()
            .zip(self.0.to_le_bytes().into_iter().cycle())
            .for_each(|(b, x)| *b = x);
    }
}
