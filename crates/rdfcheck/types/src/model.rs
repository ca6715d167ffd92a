//! Schema data models: the loaded statement set of a schema document
//!
//! The engine treats a model as opaque apart from emptiness checks; the
//! embedded-test extractor is the only collaborator that reads statements.

use serde::{Deserialize, Serialize};

/// One statement of a schema's data model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Statement {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// The loaded data model of a schema document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    statements: Vec<Statement>,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_accumulates_statements() {
        let model = SchemaModel::new()
            .with_statement(Statement::new("ex:Person", "rdf:type", "owl:Class"))
            .with_statement(Statement::new("ex:name", "rdfs:domain", "ex:Person"));

        assert_eq!(model.len(), 2);
        assert!(!model.is_empty());
        assert_eq!(model.statements()[0].subject, "ex:Person");
    }
}
