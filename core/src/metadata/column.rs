use serde::{Deserialize, Serialize};

/// The table and column a foreign-key column points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKeyReference {
    pub table: String,
    pub column: String,
}

impl ForeignKeyReference {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// All the metadata we capture about a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    /// Name of the column, cased as the catalog reports it.
    #[serde(alias = "columnName")]
    pub name: String,
    /// Declared type in the catalog's own vocabulary, e.g. `VARCHAR` or `BIGINT`.
    pub data_type: String,
    /// Character count or byte width, depending on `data_type`. Zero when the catalog reports none.
    pub column_size: i64,
    pub is_nullable: bool,
    pub column_default: Option<String>,
    pub remarks: Option<String>,
    pub is_primary_key: bool,
    /// Present iff the column is part of one of the table's foreign keys.
    pub foreign_key: Option<ForeignKeyReference>,
    pub is_auto_increment: bool,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            column_size: 0,
            is_nullable: true,
            column_default: None,
            remarks: None,
            is_primary_key: false,
            foreign_key: None,
            is_auto_increment: false,
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        self.foreign_key.is_some()
    }

    pub fn size(mut self, size: i64) -> Self {
        self.column_size = size;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_nullable = false;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.is_auto_increment = true;
        self
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign_key = Some(ForeignKeyReference::new(table, column));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_key_flag_follows_reference() {
        let c = ColumnMetadata::new("order_id", "BIGINT");
        assert!(!c.is_foreign_key());
        let c = c.references("orders", "id");
        assert!(c.is_foreign_key());
        assert_eq!(c.foreign_key.unwrap().table, "orders");
    }

    #[test]
    fn test_legacy_column_name_alias() {
        let json = r#"{
            "columnName": "qty",
            "dataType": "INT",
            "columnSize": 10,
            "isNullable": false,
            "columnDefault": null,
            "remarks": null,
            "isPrimaryKey": false,
            "foreignKey": null,
            "isAutoIncrement": false
        }"#;
        let c: ColumnMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "qty");
        let out = serde_json::to_value(&c).unwrap();
        assert_eq!(out["name"], "qty");
        assert!(out.get("columnName").is_none());
    }
}
