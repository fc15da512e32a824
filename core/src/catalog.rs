//! The catalog's native metadata query surface.
//!
//! Rows here are in the catalog's own vocabulary (`IS_NULLABLE = "YES"`, `NON_UNIQUE = 1`).
//! Normalizing them is the crawler's job.
use async_trait::async_trait;

use crate::Result;

#[doc(hidden)]
pub use memory::MemoryCatalog;
pub use mysql::MySqlCatalog;

mod memory;
mod mysql;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TableRow {
    pub table_schema: Option<String>,
    pub table_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ColumnRow {
    pub column_name: String,
    pub type_name: String,
    pub column_size: Option<i64>,
    pub is_nullable: String,
    pub column_default: Option<String>,
    pub remarks: Option<String>,
    pub is_auto_increment: String,
}

impl ColumnRow {
    pub fn nullable(&self) -> bool {
        self.is_nullable.eq_ignore_ascii_case("YES")
    }

    pub fn auto_increment(&self) -> bool {
        self.is_auto_increment.eq_ignore_ascii_case("YES")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PrimaryKeyRow {
    pub column_name: String,
    pub key_seq: i64,
}

/// One row per (constraint, column) pair of a foreign key declared on the table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ImportedKeyRow {
    pub fk_name: Option<String>,
    pub fk_column_name: Option<String>,
    pub pk_table_name: String,
    pub pk_column_name: String,
}

/// One row per (index, column) pair, in key order within each index.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct IndexRow {
    pub index_name: Option<String>,
    pub column_name: Option<String>,
    pub non_unique: i64,
}

/// A source of schema metadata.
///
/// Every call acquires its own connection and releases it before returning, so two calls
/// may observe the schema at different instants.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// An explicit connectivity probe.
    async fn ping(&self) -> Result<()>;

    async fn tables(&self) -> Result<Vec<TableRow>>;

    async fn columns(&self, table: &str) -> Result<Vec<ColumnRow>>;

    /// Rows are returned in key order.
    async fn primary_keys(&self, table: &str) -> Result<Vec<PrimaryKeyRow>>;

    async fn imported_keys(&self, table: &str) -> Result<Vec<ImportedKeyRow>>;

    async fn index_info(&self, table: &str) -> Result<Vec<IndexRow>>;

    /// Name the catalog reserves for the index backing a primary key.
    fn primary_index_name(&self) -> &str {
        "PRIMARY"
    }

    /// Case-insensitive substrings identifying the engine's own schemas.
    fn system_schema_markers(&self) -> &[&str] {
        &["information_schema"]
    }
}
