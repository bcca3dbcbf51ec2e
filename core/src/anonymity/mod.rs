//! k-anonymity by generalization of two quasi-identifiers: age and postal code.
//!
//! Ages are folded into fixed-width buckets, postal codes keep a prefix and
//! have the rest replaced by [`POSTAL_WILDCARD`]. Records sharing both
//! generalized values form a group; the smallest group size is the achieved k.
//! [`enforce_minimum_k`] widens a policy once when k falls short of a target.

pub mod escalation;
pub mod generalize;
pub mod groups;
pub mod policy;
pub mod record;
#[cfg(test)]
mod tests;

pub use escalation::{AnonymizationReport, enforce_minimum_k};
pub use generalize::{POSTAL_WILDCARD, age_bucket_start, generalize_age, generalize_postal};
pub use groups::{GeneralizedGroups, GroupKey, GroupRow, compute_groups};
pub use policy::GeneralizationPolicy;
pub use record::Record;
