use indexmap::IndexMap;
use schemacrawler_codegen::{Field, GeneratedModel, Generator, Relationship};
use schemacrawler_core::{Catalog, Crawler};
use tracing::debug;

/// A crawler paired with a generator: table name in, generated model out.
///
/// Nothing is cached. Every call re-crawls the live catalog.
pub struct SchemaCrawler<C> {
    crawler: Crawler<C>,
    generator: Generator,
}

impl<C: Catalog> SchemaCrawler<C> {
    pub fn new(catalog: C, generator: Generator) -> Self {
        Self {
            crawler: Crawler::new(catalog),
            generator,
        }
    }

    pub fn crawler(&self) -> &Crawler<C> {
        &self.crawler
    }

    pub async fn model(&self, table: &str) -> GeneratedModel {
        let metadata = self.crawler.table_metadata(table).await;
        let model = self.generator.model(&metadata);
        debug!(table, class = %model.class_name, fields = model.fields.len(), "Generated model");
        model
    }

    pub async fn models(&self) -> Vec<GeneratedModel> {
        let tables = self.crawler.all_tables().await;
        self.generator.models(&tables)
    }

    pub async fn code(&self, table: &str) -> String {
        self.model(table).await.code
    }

    /// Class name -> source text, for every table.
    pub async fn all_code(&self) -> IndexMap<String, String> {
        self.models()
            .await
            .into_iter()
            .map(|m| (m.class_name, m.code))
            .collect()
    }

    pub async fn relationships(&self, table: &str) -> Vec<Relationship> {
        self.model(table).await.relationships
    }

    pub async fn fields(&self, table: &str) -> Vec<Field> {
        self.model(table).await.fields
    }
}
