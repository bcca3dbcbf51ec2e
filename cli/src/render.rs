use std::fmt::Write;

use privlab_core::{anonymity::AnonymizationReport, toy::SimulationReport, toy::SumVerdict};

pub fn anonymization(report: &AnonymizationReport) -> String {
    let mut out: String = String::new();
    let requested = report.requested_policy;
    let effective = report.effective_policy;

    let _ = writeln!(
        out,
        "policy: age width {}, postal prefix {}",
        requested.age_bucket_width(),
        requested.postal_prefix_length()
    );
    if report.was_escalated {
        let _ = writeln!(
            out,
            "escalated to: age width {}, postal prefix {}",
            effective.age_bucket_width(),
            effective.postal_prefix_length()
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<12} {:<12} {:>5}", "age", "postal", "count");
    report.rows().iter().for_each(|row| {
        let _ = writeln!(out, "{:<12} {:<12} {:>5}", row.age_bucket, row.postal_mask, row.count);
    });
    let _ = writeln!(out);
    let status: &str = if report.target_met() { "met" } else { "NOT met" };
    let _ = writeln!(out, "achieved k = {} (target {}: {})", report.achieved_k, report.target_k, status);
    out
}

pub fn simulation(report: &SimulationReport, seed: &str) -> String {
    let mut out: String = String::new();
    let pair = &report.pair;

    let _ = writeln!(out, "key            {}", pair.key.key());
    let _ = writeln!(
        out,
        "a = {:<10} r = {:<4} ct = {}",
        pair.a.plaintext.value(),
        pair.a.blinding_factor,
        report.ciphertext_a.value()
    );
    let _ = writeln!(
        out,
        "b = {:<10} r = {:<4} ct = {}",
        pair.b.plaintext.value(),
        pair.b.blinding_factor,
        report.ciphertext_b.value()
    );
    let _ = writeln!(out, "ct_a + ct_b    {}", report.ciphertext_sum.value());
    let _ = writeln!(out, "decrypted a    {}", report.decrypted_a);
    let _ = writeln!(out, "decrypted b    {}", report.decrypted_b);
    let _ = writeln!(out, "decrypted sum  {}", report.decrypted_sum);
    let _ = writeln!(out, "a + b          {}", report.expected_sum);
    let verdict: &str = match report.verdict {
        SumVerdict::Exact => "decrypted sum equals a + b",
        SumVerdict::OverflowWrapped => "overflow: a + b reached the key, result differs from true sum",
        SumVerdict::Mismatch => "decrypted sum differs from a + b",
    };
    let _ = writeln!(out, "{verdict}");
    let _ = writeln!(out, "seed           {seed}");
    out
}
