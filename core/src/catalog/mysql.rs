use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Connection;
use tracing::debug;

use crate::catalog::{Catalog, ColumnRow, ImportedKeyRow, IndexRow, PrimaryKeyRow, TableRow};
use crate::config::ConnectOptions;
use crate::Result;

const TABLES_QUERY: &str = include_str!("sql/tables.mysql.sql");
const COLUMNS_QUERY: &str = include_str!("sql/columns.mysql.sql");
const PRIMARY_KEYS_QUERY: &str = include_str!("sql/primary_keys.mysql.sql");
const IMPORTED_KEYS_QUERY: &str = include_str!("sql/imported_keys.mysql.sql");
const INDEX_INFO_QUERY: &str = include_str!("sql/index_info.mysql.sql");

/// Reads the information-schema views of the database the pool is connected to.
#[derive(Debug, Clone)]
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connections are opened on first use, so an unreachable server shows up as a failed
    /// facet instead of failing here.
    pub fn connect_lazy(opts: &ConnectOptions) -> Result<Self> {
        let pool = Self::pool_options(opts).connect_lazy(&opts.url)?;
        Ok(Self::new(pool))
    }

    fn pool_options(opts: &ConnectOptions) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(opts.max_connections)
            .acquire_timeout(opts.acquire_timeout)
    }

    async fn fetch<R>(&self, sql: &'static str, table: Option<&str>) -> Result<Vec<R>>
    where
        R: for<'r> sqlx::FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query_as::<_, R>(sql);
        if let Some(table) = table {
            query = query.bind(table.to_string());
        }
        let rows = query.fetch_all(&mut *conn).await?;
        debug!(table = table.unwrap_or("*"), rows = rows.len(), "Catalog query");
        Ok(rows)
    }
}

#[async_trait]
impl Catalog for MySqlCatalog {
    async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    async fn tables(&self) -> Result<Vec<TableRow>> {
        self.fetch(TABLES_QUERY, None).await
    }

    async fn columns(&self, table: &str) -> Result<Vec<ColumnRow>> {
        self.fetch(COLUMNS_QUERY, Some(table)).await
    }

    async fn primary_keys(&self, table: &str) -> Result<Vec<PrimaryKeyRow>> {
        self.fetch(PRIMARY_KEYS_QUERY, Some(table)).await
    }

    async fn imported_keys(&self, table: &str) -> Result<Vec<ImportedKeyRow>> {
        self.fetch(IMPORTED_KEYS_QUERY, Some(table)).await
    }

    async fn index_info(&self, table: &str) -> Result<Vec<IndexRow>> {
        self.fetch(INDEX_INFO_QUERY, Some(table)).await
    }

    fn system_schema_markers(&self) -> &[&str] {
        &["information_schema", "performance_schema"]
    }
}
