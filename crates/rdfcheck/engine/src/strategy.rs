//! Strategy seams: the pluggable collaborators of the generation engine
//!
//! Each trait covers one way of producing test cases. Implementations are
//! supplied by the caller; the engine decides only when each strategy runs
//! and how outputs are merged.
//!
//! Failure semantics differ by seam and are part of each contract:
//! an `Err` from any of these traits aborts the whole run, with one
//! exception — [`ManualTestLookup`] reports "no manual tests configured"
//! as `Ok(None)`, which is a normal outcome, not a failure.

use rdfcheck_types::{GenerationResult, SchemaModel, SchemaSource, SourceRef, TestCase};
use std::path::Path;

/// An automatic generation strategy: derives test cases from structural
/// analysis of a schema
///
/// Automatic generation is assumed expensive; the engine wraps an ordered
/// collection of these in a cache (see [`crate::CachedAutoGenerator`]).
pub trait TestGenerator: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Derive test cases from the schema
    fn generate(&self, schema: &SchemaSource) -> GenerationResult<Vec<TestCase>>;
}

/// Lookup of manually authored test cases for a source
///
/// `Ok(None)` means no manual tests are configured for the source — an
/// expected outcome the engine logs at low severity and treats as zero
/// tests. `Err` means the lookup itself failed and aborts the run.
pub trait ManualTestLookup: Send + Sync {
    fn manual_tests_for(
        &self,
        test_folder: &Path,
        source: SourceRef<'_>,
    ) -> GenerationResult<Option<Vec<TestCase>>>;
}

/// Translation of a schema's declared shape constraints into test cases
///
/// Pure function of the schema's model; an empty result is normal.
pub trait ShapeTestGenerator: Send + Sync {
    fn generate(&self, schema: &SchemaSource) -> GenerationResult<Vec<TestCase>>;
}

/// Extraction of test-case definitions embedded in a schema's own model
///
/// Operates on raw statements: the schema document itself carries test
/// definitions, as opposed to tests derived from its structure. Pure
/// function; an empty result is normal.
pub trait EmbeddedTestExtractor: Send + Sync {
    fn extract(&self, model: &SchemaModel) -> GenerationResult<Vec<TestCase>>;
}
