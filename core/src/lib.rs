//! Toy privacy-preserving-data primitives: k-anonymity by generalization, an
//! additive toy homomorphic cipher and salted pseudonymization.
//!
//! Every operation is a pure function of its arguments. Operations that need
//! randomness take it from a caller-supplied [`rand_core::RngCore`], usually a
//! seeded [`sampling::Source`].

pub mod anonymity;
pub mod config;
pub mod error;
pub mod pseudonym;
pub mod toy;

pub use config::*;
pub use error::*;
