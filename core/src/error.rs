use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the core can report. None of them are transient: the only
/// remedy is corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid generalization policy: {0}")]
    InvalidPolicy(#[from] PolicyViolation),

    #[error("invalid cipher input: {0}")]
    InvalidCipherInput(#[from] CipherInputViolation),

    #[error("invalid pseudonym parameters: {0}")]
    InvalidPseudonymParams(#[from] PseudonymViolation),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("age bucket width must be positive, got {0}")]
    NonPositiveBucketWidth(i64),

    #[error("age bucket width {0} does not fit in 32 bits")]
    BucketWidthTooLarge(i64),

    #[error("postal prefix length must be non-negative, got {0}")]
    NegativePrefixLength(i64),

    #[error("postal prefix length {prefix} exceeds the {len} characters of postal code {code:?}")]
    PrefixExceedsCode { prefix: usize, code: String, len: usize },

    #[error("escalation ceiling for the age bucket width must be positive")]
    ZeroBucketCeiling,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherInputViolation {
    #[error("plaintext must be non-negative, got {0}")]
    NegativePlaintext(i64),

    #[error("key must be positive, got {0}")]
    NonPositiveKey(i64),

    #[error("blinding range [{min}, {max}] must satisfy 1 <= min <= max <= {limit}")]
    BlindingRange { min: u64, max: u64, limit: u64 },

    #[error("ciphertext sum exceeds 128 bits")]
    CiphertextOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PseudonymViolation {
    #[error("digest length must be in [1, {max}], got {got}")]
    DigestLength { got: usize, max: usize },

    #[error("salt must be non-empty hex: {0}")]
    MalformedSalt(String),

    #[error("salt must hold at least one byte")]
    EmptySalt,
}
