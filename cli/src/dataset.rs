use privlab_core::anonymity::Record;

/// Fixed demonstration table used when no records file is given.
pub fn demo_records() -> Vec<Record> {
    vec![
        Record::new(23, "13011", "influenza"),
        Record::new(25, "13025", "asthma"),
        Record::new(27, "13172", "influenza"),
        Record::new(34, "13208", "diabetes"),
        Record::new(36, "13390", "hypertension"),
        Record::new(42, "14021", "asthma"),
        Record::new(44, "14117", "diabetes"),
        Record::new(52, "14256", "hypertension"),
        Record::new(55, "15003", "influenza"),
        Record::new(60, "15480", "arthritis"),
    ]
}
