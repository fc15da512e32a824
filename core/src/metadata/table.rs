use serde::{Deserialize, Serialize};

use crate::metadata::{ColumnMetadata, IndexMetadata};

/// Everything the crawler knows about one table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadata {
    pub table_name: String,
    /// Catalog column order.
    pub columns: Vec<ColumnMetadata>,
    /// Key order, which need not match declaration order.
    pub primary_keys: Vec<String>,
    /// Constraint names only. The referenced table and column live on the owning column.
    pub foreign_keys: Vec<String>,
    pub indexes: Vec<IndexMetadata>,
}

impl TableMetadata {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn foreign_key_columns(&self) -> impl Iterator<Item = &ColumnMetadata> + '_ {
        self.columns.iter().filter(|c| c.is_foreign_key())
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnMetadata> + '_ {
        self.primary_keys.iter().filter_map(|k| self.column(k))
    }

    /// Test helper. Derives the primary-key sequence from the columns' flags.
    #[doc(hidden)]
    pub fn mock(table_name: &str, columns: Vec<ColumnMetadata>) -> Self {
        let primary_keys = columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.clone())
            .collect();
        Self {
            table_name: table_name.to_string(),
            columns,
            primary_keys,
            foreign_keys: vec![],
            indexes: vec![],
        }
    }
}
