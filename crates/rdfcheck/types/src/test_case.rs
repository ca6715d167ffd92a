//! Test cases and suites
//!
//! A [`TestCase`] is produced by a generation strategy and never inspected
//! by the engine. A [`TestSuite`] is the ordered output of one generation
//! run; merge order is preserved and nothing is deduplicated.

use crate::SourceUri;
use serde::{Deserialize, Serialize};

// ── Test Case Identifier ─────────────────────────────────────────────

/// Identifier of a test case, assigned by the generating strategy
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestCaseId(pub String);

impl TestCaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Test Case ────────────────────────────────────────────────────────

/// An opaque, immutable test artifact
///
/// Equality is id-based; what an id means is up to the strategy that
/// produced the case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestCase {
    id: TestCaseId,
    /// The source the case was derived from
    source: SourceUri,
    /// Human-readable description of what the case checks
    description: String,
}

impl TestCase {
    pub fn new(
        id: impl Into<String>,
        source: SourceUri,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TestCaseId::new(id),
            source,
            description: description.into(),
        }
    }

    pub fn id(&self) -> &TestCaseId {
        &self.id
    }

    pub fn source(&self) -> &SourceUri {
        &self.source
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for TestCase {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TestCase {}

// ── Test Suite ───────────────────────────────────────────────────────

/// The ordered collection of test cases built by one generation run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TestSuite {
    test_cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(test_cases: Vec<TestCase>) -> Self {
        Self { test_cases }
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    pub fn into_test_cases(self) -> Vec<TestCase> {
        self.test_cases
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.test_cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: &str) -> TestCase {
        TestCase::new(id, SourceUri::new("http://example.org/s"), "check")
    }

    #[test]
    fn test_suite_preserves_merge_order() {
        let suite = TestSuite::new(vec![case("t2"), case("t1"), case("t2")]);
        let ids: Vec<&str> = suite.into_iter().map(|t| t.id().0.as_str()).collect();
        // duplicates survive: the suite never deduplicates
        assert_eq!(ids, vec!["t2", "t1", "t2"]);
    }

    #[test]
    fn test_case_equality_is_id_based() {
        let a = TestCase::new("t1", SourceUri::new("http://a"), "one");
        let b = TestCase::new("t1", SourceUri::new("http://b"), "two");
        assert_eq!(a, b);
    }
}
