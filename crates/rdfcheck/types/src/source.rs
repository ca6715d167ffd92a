//! Sources: datasets under test and the schemas they reference
//!
//! A [`TestSource`] is the dataset a suite is generated for. It references
//! the [`SchemaSource`]s it declares conformance to, in declaration order.
//! [`SourceRef`] is the borrowed either-kind view used where a collaborator
//! accepts any source (manual-test lookup, monitor notifications).

use crate::SchemaModel;
use serde::{Deserialize, Serialize};

// ── Source Identifier ────────────────────────────────────────────────

/// URI identifying a source (dataset or schema)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceUri(pub String);

impl SourceUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Schema Source ────────────────────────────────────────────────────

/// A schema document a dataset declares conformance to
///
/// The model may be absent (the document could not be retrieved) or empty.
/// Both are degraded states the generation loop skips with a diagnostic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SchemaSource {
    /// URI of the schema document
    uri: SourceUri,
    /// Short prefix identifying the schema; used as the cache file key
    prefix: String,
    /// The loaded data model, if retrieval succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<SchemaModel>,
}

impl SchemaSource {
    /// Create a schema source with a loaded model
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>, model: SchemaModel) -> Self {
        Self {
            uri: SourceUri::new(uri),
            prefix: prefix.into(),
            model: Some(model),
        }
    }

    /// Create a schema source whose model could not be retrieved
    pub fn unresolved(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            uri: SourceUri::new(uri),
            prefix: prefix.into(),
            model: None,
        }
    }

    pub fn uri(&self) -> &SourceUri {
        &self.uri
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The loaded model, if any
    pub fn model(&self) -> Option<&SchemaModel> {
        self.model.as_ref()
    }

    /// True when the model is present and holds at least one statement
    pub fn has_usable_model(&self) -> bool {
        self.model.as_ref().is_some_and(|m| !m.is_empty())
    }
}

// ── Test Source ──────────────────────────────────────────────────────

/// The dataset under test
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestSource {
    /// URI of the dataset
    uri: SourceUri,
    /// Schemas the dataset declares conformance to, in declaration order
    referenced_schemata: Vec<SchemaSource>,
}

impl TestSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: SourceUri::new(uri),
            referenced_schemata: Vec::new(),
        }
    }

    pub fn with_schema(mut self, schema: SchemaSource) -> Self {
        self.referenced_schemata.push(schema);
        self
    }

    pub fn uri(&self) -> &SourceUri {
        &self.uri
    }

    /// The schemas this dataset references, in declaration order
    pub fn references_schemata(&self) -> &[SchemaSource] {
        &self.referenced_schemata
    }
}

// ── Source Reference ─────────────────────────────────────────────────

/// Borrowed view over either kind of source
#[derive(Clone, Copy, Debug)]
pub enum SourceRef<'a> {
    /// The dataset itself
    Dataset(&'a TestSource),
    /// One of the dataset's referenced schemas
    Schema(&'a SchemaSource),
}

impl SourceRef<'_> {
    pub fn uri(&self) -> &SourceUri {
        match self {
            SourceRef::Dataset(d) => d.uri(),
            SourceRef::Schema(s) => s.uri(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Statement;

    #[test]
    fn test_schema_model_usability() {
        let empty = SchemaSource::new("foaf", "http://xmlns.com/foaf/0.1/", SchemaModel::new());
        assert!(empty.model().is_some());
        assert!(!empty.has_usable_model());

        let unresolved = SchemaSource::unresolved("foaf", "http://xmlns.com/foaf/0.1/");
        assert!(unresolved.model().is_none());
        assert!(!unresolved.has_usable_model());

        let mut model = SchemaModel::new();
        model.push(Statement::new(
            "foaf:name",
            "rdf:type",
            "rdf:Property",
        ));
        let loaded = SchemaSource::new("foaf", "http://xmlns.com/foaf/0.1/", model);
        assert!(loaded.has_usable_model());
    }

    #[test]
    fn test_schema_order_preserved() {
        let dataset = TestSource::new("http://example.org/dataset")
            .with_schema(SchemaSource::unresolved("a", "http://example.org/a"))
            .with_schema(SchemaSource::unresolved("b", "http://example.org/b"));

        let prefixes: Vec<&str> = dataset
            .references_schemata()
            .iter()
            .map(|s| s.prefix())
            .collect();
        assert_eq!(prefixes, vec!["a", "b"]);
    }

    #[test]
    fn test_source_ref_uri() {
        let dataset = TestSource::new("http://example.org/dataset");
        assert_eq!(
            SourceRef::Dataset(&dataset).uri().as_str(),
            "http://example.org/dataset"
        );
    }
}
