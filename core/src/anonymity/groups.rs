use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Serialize, Serializer};
use utils::Tally;

use crate::anonymity::{GeneralizationPolicy, Record, generalize_age, generalize_postal};

/// Generalized quasi-identifiers shared by every member of a group.
/// Ordered by age bucket label, then postal mask.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    pub age_bucket: String,
    pub postal_mask: String,
}

impl GroupKey {
    pub fn of(record: &Record, policy: &GeneralizationPolicy) -> Self {
        Self {
            age_bucket: generalize_age(record.age, policy.age_bucket_width()),
            postal_mask: generalize_postal(&record.postal_code, policy.postal_prefix_length()),
        }
    }
}

/// One line of the presentation table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupRow {
    pub age_bucket: String,
    pub postal_mask: String,
    pub count: usize,
}

/// Group sizes of a record set under one policy. Rebuilt, never updated.
#[derive(Clone, Debug)]
pub struct GeneralizedGroups {
    policy: GeneralizationPolicy,
    counts: Tally<GroupKey>,
}

pub fn compute_groups(records: &[Record], policy: &GeneralizationPolicy) -> GeneralizedGroups {
    let counts: Tally<GroupKey> = records.iter().map(|r| GroupKey::of(r, policy)).collect();

    #[cfg(debug_assertions)]
    {
        assert_eq!(counts.total(), records.len());
    }

    GeneralizedGroups {
        policy: *policy,
        counts,
    }
}

impl GeneralizedGroups {
    pub fn policy(&self) -> &GeneralizationPolicy {
        &self.policy
    }

    /// Size of the smallest group, 0 for an empty record set.
    pub fn achieved_k(&self) -> usize {
        self.counts.min_count().unwrap_or(0)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of records that were grouped.
    pub fn record_count(&self) -> usize {
        self.counts.total()
    }

    pub fn count(&self, key: &GroupKey) -> usize {
        self.counts.get(key)
    }

    /// Groups smaller than `target_k`.
    pub fn undersized(&self, target_k: usize) -> usize {
        self.counts.iter().filter(|(_, c)| *c < target_k).count()
    }

    /// Rows by descending count, ties broken by group key.
    pub fn rows(&self) -> Vec<GroupRow> {
        self.counts
            .iter()
            .sorted_by(|(ka, ca), (kb, cb)| presentation_order((*ka, *ca), (*kb, *cb)))
            .map(|(k, count)| GroupRow {
                age_bucket: k.age_bucket.clone(),
                postal_mask: k.postal_mask.clone(),
                count,
            })
            .collect()
    }
}

fn presentation_order(a: (&GroupKey, usize), b: (&GroupKey, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

impl Serialize for GeneralizedGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
