use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::catalog::{Catalog, ColumnRow, ImportedKeyRow, IndexRow, PrimaryKeyRow, TableRow};
use crate::facet::FacetKind;
use crate::{Error, Result};

/// A catalog held in memory. Used to exercise the crawler without a database.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    tables: Vec<TableRow>,
    columns: HashMap<String, Vec<ColumnRow>>,
    primary_keys: HashMap<String, Vec<PrimaryKeyRow>>,
    imported_keys: HashMap<String, Vec<ImportedKeyRow>>,
    index_info: HashMap<String, Vec<IndexRow>>,
    failing: HashSet<FacetKind>,
    offline: bool,
    column_queries: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, schema: &str, name: &str) -> Self {
        self.tables.push(TableRow {
            table_schema: Some(schema.to_string()),
            table_name: name.to_string(),
        });
        self
    }

    pub fn column_row(mut self, table: &str, row: ColumnRow) -> Self {
        self.columns.entry(table.to_string()).or_default().push(row);
        self
    }

    /// A nullable column with no default, size or remark.
    pub fn column(self, table: &str, name: &str, type_name: &str) -> Self {
        self.column_row(
            table,
            ColumnRow {
                column_name: name.to_string(),
                type_name: type_name.to_string(),
                column_size: None,
                is_nullable: "YES".to_string(),
                column_default: None,
                remarks: None,
                is_auto_increment: "NO".to_string(),
            },
        )
    }

    /// Appends `column` to the table's primary key.
    pub fn primary_key(mut self, table: &str, column: &str) -> Self {
        let keys = self.primary_keys.entry(table.to_string()).or_default();
        keys.push(PrimaryKeyRow {
            column_name: column.to_string(),
            key_seq: keys.len() as i64 + 1,
        });
        self
    }

    pub fn foreign_key(mut self, table: &str, constraint: &str, column: &str, ref_table: &str, ref_column: &str) -> Self {
        self.imported_keys.entry(table.to_string()).or_default().push(ImportedKeyRow {
            fk_name: Some(constraint.to_string()),
            fk_column_name: Some(column.to_string()),
            pk_table_name: ref_table.to_string(),
            pk_column_name: ref_column.to_string(),
        });
        self
    }

    pub fn index_row(mut self, table: &str, row: IndexRow) -> Self {
        self.index_info.entry(table.to_string()).or_default().push(row);
        self
    }

    pub fn index(self, table: &str, index: &str, column: &str, unique: bool) -> Self {
        self.index_row(
            table,
            IndexRow {
                index_name: Some(index.to_string()),
                column_name: Some(column.to_string()),
                non_unique: if unique { 0 } else { 1 },
            },
        )
    }

    /// Every query for this facet fails.
    pub fn failing(mut self, kind: FacetKind) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Every query fails, including the connectivity probe.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Number of column queries served so far.
    pub fn column_queries(&self) -> usize {
        self.column_queries.load(Ordering::SeqCst)
    }

    fn check(&self, kind: FacetKind, table: &str) -> Result<()> {
        if self.offline {
            return Err(Error::CatalogError("catalog is offline".to_string()));
        }
        if self.failing.contains(&kind) {
            return Err(Error::CatalogError(format!("{kind} query failed for {table}")));
        }
        Ok(())
    }

    fn rows<R: Clone>(map: &HashMap<String, Vec<R>>, table: &str) -> Vec<R> {
        map.get(table).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn ping(&self) -> Result<()> {
        if self.offline {
            return Err(Error::CatalogError("catalog is offline".to_string()));
        }
        Ok(())
    }

    async fn tables(&self) -> Result<Vec<TableRow>> {
        self.check(FacetKind::Tables, "*")?;
        Ok(self.tables.clone())
    }

    async fn columns(&self, table: &str) -> Result<Vec<ColumnRow>> {
        self.column_queries.fetch_add(1, Ordering::SeqCst);
        self.check(FacetKind::Columns, table)?;
        Ok(Self::rows(&self.columns, table))
    }

    async fn primary_keys(&self, table: &str) -> Result<Vec<PrimaryKeyRow>> {
        self.check(FacetKind::PrimaryKeys, table)?;
        Ok(Self::rows(&self.primary_keys, table))
    }

    async fn imported_keys(&self, table: &str) -> Result<Vec<ImportedKeyRow>> {
        self.check(FacetKind::ForeignKeys, table)?;
        Ok(Self::rows(&self.imported_keys, table))
    }

    async fn index_info(&self, table: &str) -> Result<Vec<IndexRow>> {
        self.check(FacetKind::Indexes, table)?;
        Ok(Self::rows(&self.index_info, table))
    }
}
