use std::num::NonZeroU32;

use crate::pseudonym::{MaskStyle, mask};

pub const POSTAL_WILDCARD: char = '*';

/// Start of the width-`bucket_width` bucket holding `age`.
#[inline]
pub fn age_bucket_start(age: u32, bucket_width: NonZeroU32) -> u32 {
    (age / bucket_width.get()) * bucket_width.get()
}

/// Label of the bucket holding `age`, e.g. `generalize_age(23, 10) == "20~29"`.
/// Both ends are inclusive.
pub fn generalize_age(age: u32, bucket_width: NonZeroU32) -> String {
    let start: u64 = age_bucket_start(age, bucket_width) as u64;
    let end: u64 = start + bucket_width.get() as u64 - 1;
    format!("{start}~{end}")
}

/// Keeps the first `keep_prefix_length` characters of `code` and masks every
/// other one with [`POSTAL_WILDCARD`]. Codes no longer than the prefix are
/// returned unchanged. The code is treated as an opaque string.
pub fn generalize_postal(code: &str, keep_prefix_length: usize) -> String {
    if keep_prefix_length >= code.chars().count() {
        return code.to_string();
    }
    mask(code, MaskStyle::PreservePrefix(keep_prefix_length, POSTAL_WILDCARD))
}
