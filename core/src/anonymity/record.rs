use serde::{Deserialize, Serialize};

/// One subject's row. Only `age` and `postal_code` are quasi-identifiers;
/// `category` is carried along and never used for grouping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub age: u32,
    pub postal_code: String,
    pub category: String,
}

impl Record {
    pub fn new(age: u32, postal_code: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            age,
            postal_code: postal_code.into(),
            category: category.into(),
        }
    }
}
