use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub is_nullable: bool,
}

/// Relationship shapes. Only the owning side of a foreign key is ever inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    ManyToOne,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub related_class: String,
    pub related_table: String,
    /// The local foreign-key column.
    pub column: String,
    #[serde(rename = "relationshipType")]
    pub cardinality: Cardinality,
}

/// One synthesized class for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModel {
    pub class_name: String,
    pub table_name: String,
    /// One per column, in column order.
    pub fields: Vec<Field>,
    /// Field name -> type, in field order. Fields sharing a name share one entry, holding the
    /// later field's type, so this can be shorter than `fields`.
    pub field_map: IndexMap<String, String>,
    pub relationships: Vec<Relationship>,
    pub primary_keys: Vec<String>,
    pub code: String,
}
