//! Outcome of a single metadata query.
//!
//! Crawling is best-effort: a facet that cannot be fetched degrades to empty instead of
//! failing the table. `Facet` keeps the difference between "empty" and "could not fetch"
//! around until a caller chooses to collapse it.
use std::fmt;

use serde::Serialize;

use crate::Error;

/// One category of table metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetKind {
    Tables,
    Columns,
    PrimaryKeys,
    ForeignKeys,
    Indexes,
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FacetKind::Tables => "tables",
            FacetKind::Columns => "columns",
            FacetKind::PrimaryKeys => "primary keys",
            FacetKind::ForeignKeys => "foreign keys",
            FacetKind::Indexes => "indexes",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum Facet<T> {
    Available(T),
    Unavailable { cause: String },
}

impl<T> Facet<T> {
    pub fn unavailable(cause: impl fmt::Display) -> Self {
        Facet::Unavailable {
            cause: cause.to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Facet::Available(_))
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            Facet::Available(_) => None,
            Facet::Unavailable { cause } => Some(cause),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Facet::Available(t) => Some(t),
            Facet::Unavailable { .. } => None,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.ok().unwrap_or_default()
    }
}

impl<T> From<Result<T, Error>> for Facet<T> {
    fn from(value: Result<T, Error>) -> Self {
        match value {
            Ok(t) => Facet::Available(t),
            Err(e) => Facet::unavailable(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_unavailable_collapses_to_empty() {
        let facet: Facet<Vec<String>> = Err(Error::CatalogError("connection refused".into())).into();
        assert!(!facet.is_available());
        assert_eq!(facet.cause(), Some("connection refused"));
        assert!(facet.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_available_empty_is_not_unavailable() {
        let facet: Facet<Vec<String>> = Ok(vec![]).into();
        assert_matches!(facet, Facet::Available(ref v) if v.is_empty());
        assert_eq!(facet.cause(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let facet = Facet::Available(vec!["id"]);
        let json = serde_json::to_value(&facet).unwrap();
        assert_eq!(json, serde_json::json!({"status": "available", "data": ["id"]}));
        let facet: Facet<Vec<&str>> = Facet::unavailable("timeout");
        let json = serde_json::to_value(&facet).unwrap();
        assert_eq!(json, serde_json::json!({"status": "unavailable", "data": {"cause": "timeout"}}));
    }
}
