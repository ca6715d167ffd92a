//! Generation orchestrator: the main entry point of the engine
//!
//! The orchestrator walks a dataset's referenced schemas in order and, for
//! each one, runs the enabled strategies in a fixed sequence: automatic
//! (cache-backed), manual, shape-constraint, embedded extraction. Outputs
//! are merged in that order into one suite. After the loop it looks up
//! manual tests once more for the dataset itself.
//!
//! Soft failures (unreadable schema model, absent manual configuration,
//! cache faults) are logged and skipped; a strategy failure aborts the run.
//! Cancellation is cooperative and checked at the schema-loop boundary:
//! already-merged test cases are kept, remaining schemas and the
//! dataset-level manual pass are dropped.

use crate::cache::CachedAutoGenerator;
use crate::monitor::{GenerationMonitor, MonitorSet};
use crate::strategy::{
    EmbeddedTestExtractor, ManualTestLookup, ShapeTestGenerator, TestGenerator,
};
use rdfcheck_types::{
    GenerationError, GenerationKind, GenerationResult, SourceRef, TestCase, TestSource, TestSuite,
};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

// ── Configuration ────────────────────────────────────────────────────

/// Mode flags for a generation orchestrator
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Run the automatic generation strategies per schema
    pub use_auto_tests: bool,
    /// Consult the cache before regenerating automatic tests
    pub load_from_cache: bool,
    /// Look up manually authored tests per schema and for the dataset
    pub use_manual_tests: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            use_auto_tests: true,
            load_from_cache: true,
            use_manual_tests: true,
        }
    }
}

impl GeneratorConfig {
    /// Reject flag combinations under which no generation can happen
    pub fn validate(&self) -> GenerationResult<()> {
        if !self.use_auto_tests && !self.use_manual_tests {
            return Err(GenerationError::InvalidConfig(
                "automatic and manual tests both disabled: nothing to generate".into(),
            ));
        }
        if !self.use_auto_tests && self.load_from_cache {
            return Err(GenerationError::InvalidConfig(
                "cache loading requires automatic tests to be enabled".into(),
            ));
        }
        Ok(())
    }
}

// ── Orchestrator ─────────────────────────────────────────────────────

/// Coordinates one or more test-suite generation runs
///
/// The only mutable state owned by an instance is the monitor set (written
/// through `&mut self`) and the cancellation flag. The flag is
/// instance-lifetime and monotonic: once [`cancel`](Self::cancel) is called
/// there is no reset, and every later run on the same instance stops at its
/// first loop check.
pub struct GenerationOrchestrator {
    config: GeneratorConfig,
    canceled: AtomicBool,
    monitors: MonitorSet,
    auto: CachedAutoGenerator,
    manual: Arc<dyn ManualTestLookup>,
    shape: Arc<dyn ShapeTestGenerator>,
    embedded: Arc<dyn EmbeddedTestExtractor>,
}

impl GenerationOrchestrator {
    /// Create an orchestrator with the given mode flags and collaborators
    ///
    /// Fails with [`GenerationError::InvalidConfig`] before any generation
    /// when the flags are incompatible.
    pub fn new(
        config: GeneratorConfig,
        manual: Arc<dyn ManualTestLookup>,
        shape: Arc<dyn ShapeTestGenerator>,
        embedded: Arc<dyn EmbeddedTestExtractor>,
    ) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            canceled: AtomicBool::new(false),
            monitors: MonitorSet::new(),
            auto: CachedAutoGenerator::new(config.load_from_cache),
            manual,
            shape,
            embedded,
        })
    }

    /// Create an orchestrator with all modes enabled
    pub fn with_defaults(
        manual: Arc<dyn ManualTestLookup>,
        shape: Arc<dyn ShapeTestGenerator>,
        embedded: Arc<dyn EmbeddedTestExtractor>,
    ) -> Self {
        // the default flags always validate
        Self {
            config: GeneratorConfig::default(),
            canceled: AtomicBool::new(false),
            monitors: MonitorSet::new(),
            auto: CachedAutoGenerator::new(true),
            manual,
            shape,
            embedded,
        }
    }

    // ── Monitors ─────────────────────────────────────────────────────

    /// Register a progress monitor; duplicate registration is ignored
    pub fn add_monitor(&mut self, monitor: Arc<dyn GenerationMonitor>) {
        self.monitors.add(monitor);
    }

    /// Unregister a monitor; removing an unregistered one is a no-op
    pub fn remove_monitor(&mut self, monitor: &Arc<dyn GenerationMonitor>) {
        self.monitors.remove(monitor);
    }

    // ── Cancellation ─────────────────────────────────────────────────

    /// Request cooperative cancellation
    ///
    /// Safe to call from another thread while a run is in progress; takes
    /// effect at the next schema-loop boundary. Idempotent, no reset.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }

    // ── Generation ───────────────────────────────────────────────────

    /// Build a test suite for `dataset` from its referenced schemas
    ///
    /// `auto_generators` is the ordered collection of automatic strategies;
    /// it is consulted only when automatic tests are enabled and the cache
    /// has no usable entry for a schema. Returns every merged test case in
    /// merge order; a canceled run returns the partial suite accumulated so
    /// far.
    pub fn generate_test_suite(
        &self,
        test_folder: &Path,
        dataset: &TestSource,
        auto_generators: &[Arc<dyn TestGenerator>],
    ) -> GenerationResult<TestSuite> {
        let schemata = dataset.references_schemata();
        self.monitors.notify_started(dataset.uri(), schemata.len());

        let mut all_tests: Vec<TestCase> = Vec::new();
        for schema in schemata {
            if self.is_canceled() {
                info!(uri = %dataset.uri(), "generation canceled, stopping schema iteration");
                break;
            }

            if !schema.has_usable_model() {
                error!(
                    uri = %schema.uri(),
                    "cannot read source, skipping test generation for it"
                );
                continue;
            }

            if self.config.use_auto_tests {
                all_tests.extend(self.auto.generate(
                    test_folder,
                    schema,
                    auto_generators,
                    &self.monitors,
                )?);
            }

            if self.config.use_manual_tests {
                all_tests.extend(
                    self.manual_tests_for_source(test_folder, SourceRef::Schema(schema))?,
                );
            }

            let shape_tests = self.shape.generate(schema)?;
            if !shape_tests.is_empty() {
                info!(
                    uri = %schema.uri(),
                    count = shape_tests.len(),
                    "shape-constraint tests generated"
                );
                all_tests.extend(shape_tests);
            }

            if let Some(model) = schema.model() {
                all_tests.extend(self.embedded.extract(model)?);
            }
        }

        if !self.is_canceled() && self.config.use_manual_tests {
            all_tests
                .extend(self.manual_tests_for_source(test_folder, SourceRef::Dataset(dataset))?);
        }

        self.monitors.notify_finished();
        Ok(TestSuite::new(all_tests))
    }

    /// Look up manual tests for one source (schema or dataset)
    ///
    /// Absence of manual configuration is a normal outcome and yields zero
    /// tests; any other lookup failure aborts the run.
    fn manual_tests_for_source(
        &self,
        test_folder: &Path,
        source: SourceRef<'_>,
    ) -> GenerationResult<Vec<TestCase>> {
        self.monitors
            .notify_source_started(source.uri(), GenerationKind::Manual);

        let tests = match self.manual.manual_tests_for(test_folder, source)? {
            Some(tests) => {
                info!(uri = %source.uri(), count = tests.len(), "manual tests found");
                tests
            }
            None => {
                debug!(uri = %source.uri(), "no manual tests configured");
                Vec::new()
            }
        };

        self.monitors
            .notify_source_executed(source.uri(), GenerationKind::Manual, tests.len());
        Ok(tests)
    }
}

impl std::fmt::Debug for GenerationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationOrchestrator")
            .field("config", &self.config)
            .field("canceled", &self.is_canceled())
            .field("monitors", &self.monitors)
            .finish()
    }
}
