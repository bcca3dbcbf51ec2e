use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{EscalationConfig, PolicyViolation, Result, anonymity::Record};

/// How strongly quasi-identifiers are generalized.
///
/// A policy can only be built through [`GeneralizationPolicy::new`] or
/// [`GeneralizationPolicy::from_parts`], so a zero bucket width or a negative
/// prefix length never reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PolicyParams")]
pub struct GeneralizationPolicy {
    age_bucket_width: NonZeroU32,
    postal_prefix_length: usize,
}

/// Unchecked wire form, signed so that negative input can be reported.
#[derive(Deserialize)]
struct PolicyParams {
    age_bucket_width: i64,
    postal_prefix_length: i64,
}

impl TryFrom<PolicyParams> for GeneralizationPolicy {
    type Error = crate::Error;

    fn try_from(params: PolicyParams) -> Result<Self> {
        GeneralizationPolicy::new(params.age_bucket_width, params.postal_prefix_length)
    }
}

impl GeneralizationPolicy {
    pub fn new(age_bucket_width: i64, postal_prefix_length: i64) -> Result<Self> {
        if age_bucket_width <= 0 {
            return Err(PolicyViolation::NonPositiveBucketWidth(age_bucket_width).into());
        }
        if postal_prefix_length < 0 {
            return Err(PolicyViolation::NegativePrefixLength(postal_prefix_length).into());
        }
        let width: NonZeroU32 = u32::try_from(age_bucket_width)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(PolicyViolation::BucketWidthTooLarge(age_bucket_width))?;
        Ok(Self::from_parts(width, postal_prefix_length as usize))
    }

    pub fn from_parts(age_bucket_width: NonZeroU32, postal_prefix_length: usize) -> Self {
        Self {
            age_bucket_width,
            postal_prefix_length,
        }
    }

    pub fn age_bucket_width(&self) -> NonZeroU32 {
        self.age_bucket_width
    }

    pub fn postal_prefix_length(&self) -> usize {
        self.postal_prefix_length
    }

    /// Strict-mode check: the kept prefix must not be longer than any postal code.
    pub fn check_postal_lengths<'a, I>(&self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            let len: usize = record.postal_code.chars().count();
            if self.postal_prefix_length > len {
                return Err(PolicyViolation::PrefixExceedsCode {
                    prefix: self.postal_prefix_length,
                    code: record.postal_code.clone(),
                    len,
                }
                .into());
            }
        }
        Ok(())
    }

    /// One escalation step.
    ///
    /// The bucket width doubles unless that would pass the ceiling, in which
    /// case it is kept: a clamped, non-multiple width would split existing
    /// buckets and could lower k. The prefix shrinks by the configured step but
    /// never below the floor, and is never lengthened.
    pub fn widened(&self, cfg: &EscalationConfig) -> Result<Self> {
        if cfg.max_age_bucket_width == 0 {
            return Err(PolicyViolation::ZeroBucketCeiling.into());
        }

        let width: u32 = self.age_bucket_width.get();
        let doubled: u32 = match width.checked_mul(2) {
            Some(w) if w <= cfg.max_age_bucket_width => w,
            _ => width,
        };

        let prefix: usize = self.postal_prefix_length;
        let shortened: usize = prefix
            .saturating_sub(cfg.postal_prefix_step)
            .max(cfg.min_postal_prefix_length)
            .min(prefix);

        Ok(Self {
            age_bucket_width: NonZeroU32::new(doubled).unwrap_or(self.age_bucket_width),
            postal_prefix_length: shortened,
        })
    }

    /// True when every group under `finer` lies entirely inside one group
    /// under `self`: the width is a multiple and the prefix is not longer.
    pub fn coarsens(&self, finer: &GeneralizationPolicy) -> bool {
        self.age_bucket_width.get() % finer.age_bucket_width.get() == 0
            && self.postal_prefix_length <= finer.postal_prefix_length
    }
}
