//! Pseudonymization: salted one-way digests and character masking.

pub mod masking;
pub mod pseudonymizer;
pub mod salt;

pub use masking::{MaskStyle, mask};
pub use pseudonymizer::{MAX_DIGEST_HEX_LEN, Pseudonymizer};
pub use salt::Salt;
