use std::collections::HashSet;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::catalog::Catalog;
use crate::facet::{Facet, FacetKind};
use crate::metadata::{ColumnMetadata, ForeignKeyReference, IndexMetadata, TableMetadata};
use crate::Result;

/// Turns catalog rows into [`TableMetadata`].
///
/// Every accessor is independently best-effort. A query that fails is logged and reported as
/// [`Facet::Unavailable`]; it never aborts the other facets of the same table.
pub struct Crawler<C> {
    catalog: C,
}

impl<C: Catalog> Crawler<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Connectivity probe. Unlike the accessors, this does return the fault.
    pub async fn check_connection(&self) -> Result<()> {
        self.catalog.ping().await
    }

    /// User tables in the connected schema, excluding the engine's own.
    pub async fn list_tables(&self) -> Facet<Vec<String>> {
        let markers = self.catalog.system_schema_markers();
        let rows = match self.catalog.tables().await {
            Ok(rows) => rows,
            Err(e) => return degraded(FacetKind::Tables, "*", e),
        };
        let tables = rows
            .into_iter()
            .filter(|r| !is_system_schema(r.table_schema.as_deref(), markers))
            .map(|r| r.table_name)
            .collect::<Vec<_>>();
        debug!(count = tables.len(), "Listed tables");
        Facet::Available(tables)
    }

    /// Columns in catalog order, annotated with primary-key, foreign-key and auto-increment status.
    ///
    /// Key annotations come from separate queries, so under concurrent schema changes they may
    /// reflect a slightly different instant than the column list itself.
    pub async fn columns(&self, table: &str) -> Facet<Vec<ColumnMetadata>> {
        let rows = match self.catalog.columns(table).await {
            Ok(rows) => rows,
            Err(e) => return degraded(FacetKind::Columns, table, e),
        };
        let primary_keys = self
            .primary_keys(table)
            .await
            .unwrap_or_default()
            .into_iter()
            .collect::<HashSet<_>>();
        let foreign_keys = self.foreign_key_map(table).await.unwrap_or_default();

        let mut columns = rows
            .into_iter()
            .map(|row| {
                let nullable = row.nullable();
                ColumnMetadata {
                    is_primary_key: primary_keys.contains(&row.column_name),
                    foreign_key: foreign_keys.get(&row.column_name).cloned(),
                    name: row.column_name,
                    data_type: row.type_name,
                    column_size: row.column_size.unwrap_or(0),
                    is_nullable: nullable,
                    column_default: row.column_default,
                    remarks: row.remarks,
                    is_auto_increment: false,
                }
            })
            .collect::<Vec<_>>();

        // Identity status is a second pass over the same column set, matched by name.
        match self.catalog.columns(table).await {
            Ok(rows) => {
                for row in rows {
                    for column in columns.iter_mut().filter(|c| c.name == row.column_name) {
                        column.is_auto_increment = row.auto_increment();
                    }
                }
            }
            Err(e) => {
                error!(table, error = %e, "Failed to resolve auto-increment columns");
            }
        }
        Facet::Available(columns)
    }

    /// Primary-key column names in key order. Empty if the table declares no primary key.
    pub async fn primary_keys(&self, table: &str) -> Facet<Vec<String>> {
        match self.catalog.primary_keys(table).await {
            Ok(mut rows) => {
                rows.sort_by_key(|r| r.key_seq);
                Facet::Available(rows.into_iter().map(|r| r.column_name).collect())
            }
            Err(e) => degraded(FacetKind::PrimaryKeys, table, e),
        }
    }

    /// Distinct names of the foreign-key constraints declared on `table`.
    pub async fn foreign_key_constraints(&self, table: &str) -> Facet<Vec<String>> {
        match self.catalog.imported_keys(table).await {
            Ok(rows) => Facet::Available(rows.into_iter().filter_map(|r| r.fk_name).unique().collect()),
            Err(e) => degraded(FacetKind::ForeignKeys, table, e),
        }
    }

    /// One entry per foreign-key column. Only used to annotate [`Crawler::columns`].
    pub(crate) async fn foreign_key_map(&self, table: &str) -> Facet<IndexMap<String, ForeignKeyReference>> {
        match self.catalog.imported_keys(table).await {
            Ok(rows) => Facet::Available(
                rows.into_iter()
                    .filter_map(|r| {
                        let column = r.fk_column_name?;
                        Some((column, ForeignKeyReference::new(r.pk_table_name, r.pk_column_name)))
                    })
                    .collect(),
            ),
            Err(e) => degraded(FacetKind::ForeignKeys, table, e),
        }
    }

    /// Secondary indexes, one entry per index name, in the order the catalog first reports them.
    pub async fn indexes(&self, table: &str) -> Facet<Vec<IndexMetadata>> {
        let rows = match self.catalog.index_info(table).await {
            Ok(rows) => rows,
            Err(e) => return degraded(FacetKind::Indexes, table, e),
        };
        let primary = self.catalog.primary_index_name();
        let mut grouped: IndexMap<String, IndexMetadata> = IndexMap::new();
        for row in rows {
            let Some(name) = row.index_name else {
                continue;
            };
            if name == primary {
                continue;
            }
            let index = grouped
                .entry(name)
                .or_insert_with_key(|name| IndexMetadata::new(name.clone(), row.non_unique == 0));
            if let Some(column) = row.column_name {
                index.columns.push(column);
            }
        }
        let indexes = grouped
            .into_values()
            .filter(|index| {
                if index.columns.is_empty() {
                    warn!(table, index = %index.name, "Skipping index with no named columns");
                    return false;
                }
                true
            })
            .collect();
        Facet::Available(indexes)
    }

    /// All four facets of one table, each with its own outcome.
    pub async fn crawl_table(&self, table: &str) -> CrawledTable {
        debug!(table, "Crawling");
        CrawledTable {
            table_name: table.to_string(),
            columns: self.columns(table).await,
            primary_keys: self.primary_keys(table).await,
            foreign_keys: self.foreign_key_constraints(table).await,
            indexes: self.indexes(table).await,
        }
    }

    /// Always returns a record for `table`, possibly with empty facets.
    pub async fn table_metadata(&self, table: &str) -> TableMetadata {
        self.crawl_table(table).await.into()
    }

    pub async fn all_tables(&self) -> Vec<TableMetadata> {
        let mut tables = Vec::new();
        for name in self.list_tables().await.unwrap_or_default() {
            tables.push(self.table_metadata(&name).await);
        }
        tables
    }
}

/// The uncollapsed result of crawling one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawledTable {
    pub table_name: String,
    pub columns: Facet<Vec<ColumnMetadata>>,
    pub primary_keys: Facet<Vec<String>>,
    pub foreign_keys: Facet<Vec<String>>,
    pub indexes: Facet<Vec<IndexMetadata>>,
}

impl CrawledTable {
    /// Facets that could not be fetched, with their causes.
    pub fn unavailable(&self) -> Vec<(FacetKind, &str)> {
        [
            (FacetKind::Columns, self.columns.cause()),
            (FacetKind::PrimaryKeys, self.primary_keys.cause()),
            (FacetKind::ForeignKeys, self.foreign_keys.cause()),
            (FacetKind::Indexes, self.indexes.cause()),
        ]
        .into_iter()
        .filter_map(|(kind, cause)| Some((kind, cause?)))
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.unavailable().is_empty()
    }
}

impl From<CrawledTable> for TableMetadata {
    fn from(crawled: CrawledTable) -> Self {
        let columns = crawled.columns.unwrap_or_default();
        let mut primary_keys = crawled.primary_keys.unwrap_or_default();
        // The key query and the column query are separate round trips; keep only keys that
        // name a column we actually have.
        primary_keys.retain(|k| {
            let known = columns.iter().any(|c| &c.name == k);
            if !known {
                debug!(table = %crawled.table_name, key = %k, "Dropping primary key with no matching column");
            }
            known
        });
        TableMetadata {
            table_name: crawled.table_name,
            columns,
            primary_keys,
            foreign_keys: crawled.foreign_keys.unwrap_or_default(),
            indexes: crawled.indexes.unwrap_or_default(),
        }
    }
}

fn degraded<T>(kind: FacetKind, table: &str, e: crate::Error) -> Facet<T> {
    error!(table, facet = %kind, error = %e, "Failed to fetch metadata");
    Facet::unavailable(e)
}

fn is_system_schema(schema: Option<&str>, markers: &[&str]) -> bool {
    let Some(schema) = schema else {
        return false;
    };
    let schema = schema.to_ascii_lowercase();
    markers.iter().any(|m| schema.contains(&m.to_ascii_lowercase()))
}
