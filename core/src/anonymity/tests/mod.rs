mod groups;

use crate::anonymity::Record;

pub(crate) const TEN_AGES: [u32; 10] = [23, 25, 27, 34, 36, 42, 44, 52, 55, 60];

/// Ten records with distinct postal codes, so any policy keeping all five
/// digits yields singleton groups.
pub(crate) fn ten_distinct_records() -> Vec<Record> {
    let codes: [&str; 10] = [
        "13011", "13025", "13172", "13208", "13390", "14021", "14117", "14256", "15003", "15480",
    ];
    TEN_AGES
        .iter()
        .zip(codes)
        .enumerate()
        .map(|(i, (&age, code))| Record::new(age, code, format!("diagnosis-{}", i % 3)))
        .collect()
}
