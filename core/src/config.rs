use serde::{Deserialize, Serialize};

/// Engine tuning, usually read from a JSON file by the caller. Every field
/// has a default so partial documents are accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub escalation: EscalationConfig,
    pub cipher: CipherConfig,
    pub pseudonym: PseudonymConfig,
}

/// Parameters of the single escalation step applied when k is too small.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Doubling of the age bucket width stops here.
    pub max_age_bucket_width: u32,
    /// Characters removed from the postal prefix per escalation.
    pub postal_prefix_step: usize,
    /// The postal prefix is never shortened below this.
    pub min_postal_prefix_length: usize,
    /// Reject policies whose prefix is longer than some record's postal code.
    pub strict_postal_length: bool,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            max_age_bucket_width: 40,
            postal_prefix_step: 2,
            min_postal_prefix_length: 1,
            strict_postal_length: false,
        }
    }
}

/// Inclusive range the toy cipher draws its blinding factors from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    pub blinding_min: u64,
    pub blinding_max: u64,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            blinding_min: 1,
            blinding_max: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudonymConfig {
    /// Bytes of salt generated when none is supplied.
    pub salt_len: usize,
    /// Hex characters of the digest kept in a pseudonym.
    pub digest_hex_len: usize,
}

impl Default for PseudonymConfig {
    fn default() -> Self {
        Self {
            salt_len: 16,
            digest_hex_len: 16,
        }
    }
}
