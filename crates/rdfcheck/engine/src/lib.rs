//! Test-suite generation engine for rdfcheck
//!
//! The engine builds a test suite for a dataset from the schemas the
//! dataset declares conformance to. It sequences independent generation
//! strategies per schema, merges their outputs in a fixed order, and
//! returns one [`rdfcheck_types::TestSuite`] per run.
//!
//! # Key Principle
//!
//! **The orchestrator sequences and merges, it never derives tests itself.**
//!
//! The concrete derivation algorithms live behind the strategy traits in
//! [`strategy`]; callers plug them in.
//!
//! # Architecture
//!
//! The [`GenerationOrchestrator`] composes specialized components:
//!
//! - [`strategy`] — Trait seams for the pluggable strategies: automatic
//!   generators, manual-test lookup, shape-constraint translation, and
//!   embedded-test extraction
//! - [`CachedAutoGenerator`] — Wraps automatic generation with
//!   read-through/write-back caching keyed by (folder, schema prefix)
//! - [`MonitorSet`] — Identity-deduplicated set of passive progress
//!   observers notified of suite and per-source lifecycle events
//!
//! Cancellation is cooperative: [`GenerationOrchestrator::cancel`] may be
//! called from another thread and takes effect at the next schema-loop
//! boundary. Already-accumulated test cases are kept.
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//! use rdfcheck_engine::{GenerationOrchestrator, GeneratorConfig};
//! use rdfcheck_engine::strategy::{
//!     EmbeddedTestExtractor, ManualTestLookup, ShapeTestGenerator,
//! };
//! use rdfcheck_types::{GenerationResult, SchemaModel, SchemaSource, SourceRef,
//!     Statement, TestCase, TestSource};
//!
//! struct NoManual;
//! impl ManualTestLookup for NoManual {
//!     fn manual_tests_for(
//!         &self,
//!         _test_folder: &Path,
//!         _source: SourceRef<'_>,
//!     ) -> GenerationResult<Option<Vec<TestCase>>> {
//!         Ok(None)
//!     }
//! }
//!
//! struct NoShapes;
//! impl ShapeTestGenerator for NoShapes {
//!     fn generate(&self, _schema: &SchemaSource) -> GenerationResult<Vec<TestCase>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! struct NoEmbedded;
//! impl EmbeddedTestExtractor for NoEmbedded {
//!     fn extract(&self, _model: &SchemaModel) -> GenerationResult<Vec<TestCase>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let orchestrator = GenerationOrchestrator::new(
//!     GeneratorConfig::default(),
//!     Arc::new(NoManual),
//!     Arc::new(NoShapes),
//!     Arc::new(NoEmbedded),
//! ).unwrap();
//!
//! let dataset = TestSource::new("http://example.org/dataset")
//!     .with_schema(SchemaSource::new(
//!         "ex",
//!         "http://example.org/schema",
//!         SchemaModel::new().with_statement(
//!             Statement::new("ex:Thing", "rdf:type", "owl:Class"),
//!         ),
//!     ));
//!
//! let folder = tempfile::tempdir().unwrap();
//! let suite = orchestrator
//!     .generate_test_suite(folder.path(), &dataset, &[])
//!     .unwrap();
//! assert!(suite.is_empty());
//! ```

#![deny(unsafe_code)]

pub mod cache;
pub mod monitor;
pub mod orchestrator;
pub mod strategy;

// Re-export main types
pub use cache::{CacheRead, CachedAutoGenerator, CachedTestFile};
pub use monitor::{GenerationMonitor, MonitorSet};
pub use orchestrator::{GenerationOrchestrator, GeneratorConfig};
