pub use self::catalog::{Catalog, MySqlCatalog};
pub use self::crawler::{CrawledTable, Crawler};
pub use self::error::{Error, Result};
pub use self::facet::{Facet, FacetKind};
pub use self::metadata::*;

mod error;
pub mod catalog;
pub mod config;
pub mod crawler;
pub mod facet;
pub mod metadata;
