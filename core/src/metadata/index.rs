use serde::{Deserialize, Serialize};

/// A secondary index. The catalog's own primary-key index is never surfaced as one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetadata {
    pub name: String,
    /// Member columns in index key order.
    pub columns: Vec<String>,
    pub is_unique: bool,
    pub is_primary: bool,
}

impl IndexMetadata {
    pub fn new(name: impl Into<String>, is_unique: bool) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            is_unique,
            is_primary: false,
        }
    }
}
