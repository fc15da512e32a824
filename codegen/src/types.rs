use std::collections::HashMap;

pub const STRING: &str = "String";

/// Catalog type name -> target type name. Lookups are case-insensitive.
///
/// Built once and never mutated afterwards; a [`crate::Generator`] owns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    entries: HashMap<String, String>,
    fallback: String,
}

impl TypeMap {
    /// An empty map resolving everything to `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn with(mut self, source: &str, target: impl Into<String>) -> Self {
        self.entries.insert(normalize(source), target.into());
        self
    }

    /// MySQL types to Java types. Types outside `java.lang` are fully qualified.
    pub fn java() -> Self {
        Self::new(STRING)
            // integers
            .with("BIGINT", "Long")
            .with("INT", "Integer")
            .with("INTEGER", "Integer")
            .with("MEDIUMINT", "Integer")
            .with("SMALLINT", "Short")
            .with("TINYINT", "Byte")
            // floating point
            .with("FLOAT", "Float")
            .with("DOUBLE", "Double")
            .with("REAL", "Double")
            // fixed point
            .with("DECIMAL", "java.math.BigDecimal")
            .with("NUMERIC", "java.math.BigDecimal")
            // text
            .with("CHAR", STRING)
            .with("VARCHAR", STRING)
            .with("TINYTEXT", STRING)
            .with("TEXT", STRING)
            .with("MEDIUMTEXT", STRING)
            .with("LONGTEXT", STRING)
            .with("ENUM", STRING)
            // date and time
            .with("DATE", "java.time.LocalDate")
            .with("DATETIME", "java.time.LocalDateTime")
            .with("TIMESTAMP", "java.time.LocalDateTime")
            .with("TIME", "java.time.LocalTime")
            // boolean
            .with("BOOLEAN", "Boolean")
            .with("BOOL", "Boolean")
            .with("BIT", "Boolean")
            // binary
            .with("BINARY", "byte[]")
            .with("VARBINARY", "byte[]")
            .with("TINYBLOB", "byte[]")
            .with("BLOB", "byte[]")
            .with("MEDIUMBLOB", "byte[]")
            .with("LONGBLOB", "byte[]")
            // structured, carried as text
            .with("JSON", STRING)
    }

    /// Never fails: unknown names resolve to the fallback type.
    pub fn target_type(&self, source: &str) -> &str {
        self.entries
            .get(&normalize(source))
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::java()
    }
}

fn normalize(source: &str) -> String {
    source.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let types = TypeMap::java();
        assert_eq!(types.target_type("varchar"), types.target_type("VARCHAR"));
        assert_eq!(types.target_type("BigInt"), "Long");
        assert_eq!(types.target_type(" int "), "Integer");
    }

    #[test]
    fn test_unknown_types_fall_back_to_string() {
        let types = TypeMap::java();
        assert_eq!(types.target_type("FROBNICATE"), STRING);
        assert_eq!(types.target_type(""), STRING);
    }

    #[test]
    fn test_categories() {
        let types = TypeMap::java();
        assert_eq!(types.target_type("DOUBLE"), "Double");
        assert_eq!(types.target_type("DECIMAL"), "java.math.BigDecimal");
        assert_eq!(types.target_type("DATETIME"), "java.time.LocalDateTime");
        assert_eq!(types.target_type("BOOLEAN"), "Boolean");
        assert_eq!(types.target_type("BLOB"), "byte[]");
        assert_eq!(types.target_type("JSON"), STRING);
    }

    #[test]
    fn test_substitute_map() {
        let types = TypeMap::new("Object").with("int", "int");
        assert_eq!(types.len(), 1);
        assert_eq!(types.target_type("INT"), "int");
        assert_eq!(types.target_type("VARCHAR"), "Object");
        assert_eq!(types.fallback(), "Object");
    }
}
