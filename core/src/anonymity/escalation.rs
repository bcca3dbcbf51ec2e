use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    EscalationConfig, Result,
    anonymity::{GeneralizationPolicy, GeneralizedGroups, GroupRow, Record, compute_groups},
};

/// Outcome of [`enforce_minimum_k`].
#[derive(Clone, Debug, Serialize)]
pub struct AnonymizationReport {
    pub requested_policy: GeneralizationPolicy,
    pub effective_policy: GeneralizationPolicy,
    pub groups: GeneralizedGroups,
    pub achieved_k: usize,
    pub target_k: usize,
    pub was_escalated: bool,
}

impl AnonymizationReport {
    pub fn target_met(&self) -> bool {
        self.achieved_k >= self.target_k
    }

    pub fn rows(&self) -> Vec<GroupRow> {
        self.groups.rows()
    }
}

/// Groups `records` under `policy` and, if the achieved k is below
/// `target_k`, widens the policy exactly once and regroups.
///
/// This is a single best-effort step: the returned k may still be short of
/// the target, see [`AnonymizationReport::target_met`]. A policy already at
/// the width ceiling and prefix floor is returned as is and the report is
/// not marked escalated.
pub fn enforce_minimum_k(
    records: &[Record],
    policy: &GeneralizationPolicy,
    target_k: usize,
    cfg: &EscalationConfig,
) -> Result<AnonymizationReport> {
    if cfg.strict_postal_length {
        policy.check_postal_lengths(records)?;
    }

    let groups: GeneralizedGroups = compute_groups(records, policy);
    let achieved_k: usize = groups.achieved_k();

    if achieved_k >= target_k {
        return Ok(AnonymizationReport {
            requested_policy: *policy,
            effective_policy: *policy,
            groups,
            achieved_k,
            target_k,
            was_escalated: false,
        });
    }

    let widened: GeneralizationPolicy = policy.widened(cfg)?;

    #[cfg(debug_assertions)]
    {
        assert!(widened.coarsens(policy));
    }

    let report: AnonymizationReport = if widened == *policy {
        debug!(
            achieved_k,
            target_k,
            width = policy.age_bucket_width().get(),
            prefix = policy.postal_prefix_length(),
            "k below target, policy already at the escalation limits"
        );
        AnonymizationReport {
            requested_policy: *policy,
            effective_policy: *policy,
            groups,
            achieved_k,
            target_k,
            was_escalated: false,
        }
    } else {
        debug!(
            achieved_k,
            target_k,
            undersized = groups.undersized(target_k),
            from_width = policy.age_bucket_width().get(),
            to_width = widened.age_bucket_width().get(),
            from_prefix = policy.postal_prefix_length(),
            to_prefix = widened.postal_prefix_length(),
            "k below target, widening policy"
        );
        let groups: GeneralizedGroups = compute_groups(records, &widened);
        AnonymizationReport {
            requested_policy: *policy,
            effective_policy: widened,
            achieved_k: groups.achieved_k(),
            groups,
            target_k,
            was_escalated: true,
        }
    };

    if !report.target_met() {
        warn!(
            achieved_k = report.achieved_k,
            target_k, "widened policy still below target k"
        );
    }

    Ok(report)
}
