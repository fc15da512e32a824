pub use schemacrawler_codegen::{
    transform_identifier, Cardinality, Field, GeneratedModel, Generator, GeneratorOptions, Relationship, TypeMap,
};
pub use schemacrawler_core::{
    Catalog, ColumnMetadata, CrawledTable, Crawler, Error, Facet, FacetKind, ForeignKeyReference, IndexMetadata,
    MySqlCatalog, Result, TableMetadata,
};
pub use service::SchemaCrawler;

mod service;

pub mod catalog {
    pub use schemacrawler_core::catalog::*;
}

pub mod config {
    pub use schemacrawler_core::config::*;
}

pub mod codegen {
    pub use schemacrawler_codegen::{naming, render, types};
}
