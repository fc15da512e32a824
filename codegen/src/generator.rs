use std::collections::HashSet;

use schemacrawler_core::{ColumnMetadata, TableMetadata};
use tracing::warn;

use crate::model::{Cardinality, Field, GeneratedModel, Relationship};
use crate::naming::{class_name, field_name};
use crate::render;
use crate::types::TypeMap;

pub const DEFAULT_PACKAGE: &str = "com.example.models";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Package line at the top of every generated class.
    pub package: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

/// Derives model classes from table metadata. Pure: no I/O, and equal inputs give equal models.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    types: TypeMap,
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(types: TypeMap, options: GeneratorOptions) -> Self {
        Self { types, options }
    }

    pub fn target_type(&self, source: &str) -> &str {
        self.types.target_type(source)
    }

    /// One field per column. Columns whose names transform to nothing (`_`) or to the name of an
    /// earlier field (`ORDER_ID` next to `order_id`) still get a field, with a warning.
    pub fn fields(&self, columns: &[ColumnMetadata]) -> Vec<Field> {
        let fields = columns
            .iter()
            .map(|c| Field {
                name: field_name(&c.name),
                ty: self.target_type(&c.data_type).to_string(),
                is_nullable: c.is_nullable,
            })
            .collect::<Vec<_>>();
        let mut seen = HashSet::new();
        for (field, column) in fields.iter().zip(columns) {
            if field.name.is_empty() {
                warn!(column = %column.name, "Column name yields an empty field name");
            } else if !seen.insert(field.name.as_str()) {
                warn!(column = %column.name, field = %field.name, "Field name already used by an earlier column");
            }
        }
        fields
    }

    /// One many-to-one relationship per foreign-key column. Reverse and many-to-many
    /// relationships are not inferred; a junction table just gets two many-to-one entries.
    pub fn relationships(&self, table: &TableMetadata) -> Vec<Relationship> {
        table
            .columns
            .iter()
            .filter_map(|c| {
                let fk = c.foreign_key.as_ref()?;
                Some(Relationship {
                    related_class: class_name(&fk.table),
                    related_table: fk.table.clone(),
                    column: c.name.clone(),
                    cardinality: Cardinality::ManyToOne,
                })
            })
            .collect()
    }

    pub fn model(&self, table: &TableMetadata) -> GeneratedModel {
        let fields = self.fields(&table.columns);
        let mut model = GeneratedModel {
            class_name: class_name(&table.table_name),
            table_name: table.table_name.clone(),
            field_map: fields.iter().map(|f| (f.name.clone(), f.ty.clone())).collect(),
            fields,
            relationships: self.relationships(table),
            primary_keys: table.primary_keys.clone(),
            code: String::new(),
        };
        model.code = render::java_class(&model, &self.options.package);
        model
    }

    pub fn models(&self, tables: &[TableMetadata]) -> Vec<GeneratedModel> {
        tables.iter().map(|t| self.model(t)).collect()
    }
}
