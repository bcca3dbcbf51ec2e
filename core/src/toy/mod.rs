//! Additive toy cipher: `ct = pt + r * key` with a small random blinding
//! factor `r`, decrypted as `ct mod key`.
//!
//! The sum of two ciphertexts decrypts to the sum of the plaintexts as long
//! as that sum stays below `key`. Past that point the result wraps, which is
//! reported as an overflow. The scheme is insecure on purpose.

pub mod ciphertext;
pub mod decryption;
pub mod encryption;
pub mod ops;
pub mod plaintext;
pub mod secret;
pub mod simulation;
pub mod verification;
#[cfg(test)]
mod tests;

pub use ciphertext::ToyCiphertext;
pub use encryption::{BLINDING_LIMIT, Blinding};
pub use plaintext::ToyPlaintext;
pub use secret::ToySecret;
pub use simulation::{CipherPair, EncryptedValue, SimulationReport, ToyCipher};
pub use verification::{SumCheck, SumVerdict, check_sum, verify_sum};
