pub use generator::{Generator, GeneratorOptions, DEFAULT_PACKAGE};
pub use model::{Cardinality, Field, GeneratedModel, Relationship};
pub use naming::transform_identifier;
pub use types::TypeMap;

mod generator;
mod model;
pub mod naming;
pub mod render;
pub mod types;
