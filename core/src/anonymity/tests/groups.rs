use std::num::NonZeroU32;

use crate::anonymity::{GeneralizationPolicy, GeneralizedGroups, GroupKey, GroupRow, Record, compute_groups};

fn policy(width: i64, prefix: i64) -> GeneralizationPolicy {
    GeneralizationPolicy::new(width, prefix).unwrap()
}

fn row(age_bucket: &str, postal_mask: &str, count: usize) -> GroupRow {
    GroupRow {
        age_bucket: age_bucket.to_string(),
        postal_mask: postal_mask.to_string(),
        count,
    }
}

#[test]
fn distinct_codes_give_singletons() {
    let records: Vec<Record> = super::ten_distinct_records();
    let groups: GeneralizedGroups = compute_groups(&records, &policy(10, 5));

    assert_eq!(groups.len(), 10);
    assert_eq!(groups.record_count(), 10);
    assert_eq!(groups.achieved_k(), 1);
    assert_eq!(groups.undersized(3), 10);
}

#[test]
fn age_only_grouping() {
    let records: Vec<Record> = super::ten_distinct_records();
    let groups: GeneralizedGroups = compute_groups(&records, &policy(10, 0));

    assert_eq!(
        groups.rows(),
        vec![
            row("20~29", "*****", 3),
            row("30~39", "*****", 2),
            row("40~49", "*****", 2),
            row("50~59", "*****", 2),
            row("60~69", "*****", 1),
        ]
    );
    assert_eq!(groups.achieved_k(), 1);
    assert_eq!(
        groups.count(&GroupKey {
            age_bucket: "20~29".into(),
            postal_mask: "*****".into(),
        }),
        3
    );
}

#[test]
fn category_is_ignored() {
    let records: Vec<Record> = vec![
        Record::new(31, "12345", "flu"),
        Record::new(33, "12399", "asthma"),
        Record::new(38, "12311", "flu"),
    ];
    let groups: GeneralizedGroups = compute_groups(&records, &policy(10, 3));
    assert_eq!(groups.rows(), vec![row("30~39", "123**", 3)]);
    assert_eq!(groups.achieved_k(), 3);
}

#[test]
fn ties_break_on_key() {
    let records: Vec<Record> = vec![
        Record::new(45, "22222", "a"),
        Record::new(15, "11111", "b"),
        Record::new(45, "11111", "c"),
        Record::new(15, "22222", "d"),
        Record::new(15, "22222", "e"),
    ];
    let groups: GeneralizedGroups = compute_groups(&records, &policy(10, 1));
    assert_eq!(
        groups.rows(),
        vec![
            row("10~19", "2****", 2),
            row("10~19", "1****", 1),
            row("40~49", "1****", 1),
            row("40~49", "2****", 1),
        ]
    );
}

#[test]
fn empty_record_set() {
    let groups: GeneralizedGroups = compute_groups(&[], &policy(5, 2));
    assert!(groups.is_empty());
    assert_eq!(groups.achieved_k(), 0);
    assert!(groups.rows().is_empty());
}

#[test]
fn groups_serialize_as_sorted_rows() {
    let records: Vec<Record> = vec![Record::new(41, "777", "x"), Record::new(40, "778", "y")];
    let groups: GeneralizedGroups = compute_groups(
        &records,
        &GeneralizationPolicy::from_parts(NonZeroU32::new(5).unwrap(), 2),
    );
    let json: serde_json::Value = serde_json::to_value(&groups).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"age_bucket": "40~44", "postal_mask": "77*", "count": 2}])
    );
}
