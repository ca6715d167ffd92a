//! Cache-backed automatic generation
//!
//! Automatic generation runs structural analysis over a whole schema and is
//! assumed expensive, so its output is persisted per (test folder, schema)
//! and reused on later runs. The cache is read-through/write-back: a usable
//! entry short-circuits generation; anything else regenerates and
//! repopulates. Cache invalidation is not handled here — deleting the cache
//! folder forces regeneration.

use crate::monitor::MonitorSet;
use crate::strategy::TestGenerator;
use chrono::{DateTime, Utc};
use rdfcheck_types::{GenerationKind, GenerationResult, SchemaSource, SourceUri, TestCase};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ── Cache Location ───────────────────────────────────────────────────

/// Deterministic cache location for a schema's automatic tests:
/// `<test_folder>/cache/<sanitized prefix>.tests.json`
pub fn cached_tests_path(test_folder: &Path, schema: &SchemaSource) -> PathBuf {
    let safe: String = schema
        .prefix()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    test_folder.join("cache").join(format!("{safe}.tests.json"))
}

// ── Persisted Envelope ───────────────────────────────────────────────

/// The persisted cache artifact for one schema
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CachedTestFile {
    /// URI of the schema the tests were generated from
    pub schema_uri: SourceUri,
    /// When the tests were generated
    pub generated_at: DateTime<Utc>,
    /// The generated test cases, in generation order
    pub tests: Vec<TestCase>,
}

// ── Read Outcome ─────────────────────────────────────────────────────

/// Outcome of a cache read
///
/// Absence and corruption are distinguished so that only genuine I/O or
/// deserialization faults surface as `Corrupt`; both fall back to
/// regeneration.
#[derive(Debug)]
pub enum CacheRead {
    /// A usable entry was found
    Hit(Vec<TestCase>),
    /// No entry exists at the location
    Miss,
    /// An entry exists but could not be used (I/O fault, malformed
    /// payload, or an envelope written for a different schema)
    Corrupt(String),
}

/// Read the cached tests for `schema_uri` from `path`
pub fn read_cached_tests(path: &Path, schema_uri: &SourceUri) -> CacheRead {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CacheRead::Miss,
        Err(e) => return CacheRead::Corrupt(format!("unreadable cache file: {e}")),
    };

    let file: CachedTestFile = match serde_json::from_slice(&bytes) {
        Ok(file) => file,
        Err(e) => return CacheRead::Corrupt(format!("malformed cache file: {e}")),
    };

    if &file.schema_uri != schema_uri {
        return CacheRead::Corrupt(format!(
            "cache entry belongs to {}, expected {}",
            file.schema_uri, schema_uri
        ));
    }

    CacheRead::Hit(file.tests)
}

/// Persist generated tests for `schema` to `path`, creating the cache
/// directory if needed
pub fn write_cached_tests(
    path: &Path,
    schema: &SchemaSource,
    tests: &[TestCase],
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = CachedTestFile {
        schema_uri: schema.uri().clone(),
        generated_at: Utc::now(),
        tests: tests.to_vec(),
    };
    let json = serde_json::to_vec_pretty(&file)?;
    std::fs::write(path, json)
}

// ── Cache-Backed Generator ───────────────────────────────────────────

/// Wraps the supplied automatic-generation strategies with caching
#[derive(Clone, Copy, Debug)]
pub struct CachedAutoGenerator {
    load_from_cache: bool,
}

impl CachedAutoGenerator {
    pub fn new(load_from_cache: bool) -> Self {
        Self { load_from_cache }
    }

    /// Produce the automatic tests for one schema, from cache when possible
    ///
    /// At most one cache read happens per call; on a miss, every supplied
    /// generator runs once and the combined output is persisted. A
    /// persistence failure is logged and swallowed — the generated tests
    /// are returned either way. A generator failure aborts the run.
    pub fn generate(
        &self,
        test_folder: &Path,
        schema: &SchemaSource,
        generators: &[Arc<dyn TestGenerator>],
        monitors: &MonitorSet,
    ) -> GenerationResult<Vec<TestCase>> {
        monitors.notify_source_started(schema.uri(), GenerationKind::Automatic);

        let location = cached_tests_path(test_folder, schema);
        let cached = if self.load_from_cache {
            match read_cached_tests(&location, schema.uri()) {
                CacheRead::Hit(tests) => Some(tests),
                CacheRead::Miss => {
                    debug!(uri = %schema.uri(), "no cached tests");
                    None
                }
                CacheRead::Corrupt(detail) => {
                    warn!(uri = %schema.uri(), detail = %detail, "discarding unusable cache entry");
                    None
                }
            }
        } else {
            None
        };

        let tests = match cached {
            Some(tests) => {
                info!(
                    uri = %schema.uri(),
                    count = tests.len(),
                    "automatic tests loaded from cache"
                );
                tests
            }
            None => {
                let mut tests = Vec::new();
                for generator in generators {
                    let generated = generator.generate(schema)?;
                    debug!(
                        uri = %schema.uri(),
                        generator = generator.name(),
                        count = generated.len(),
                        "automatic generator ran"
                    );
                    tests.extend(generated);
                }
                if let Err(e) = write_cached_tests(&location, schema, &tests) {
                    warn!(
                        uri = %schema.uri(),
                        path = %location.display(),
                        error = %e,
                        "failed to persist generated tests"
                    );
                }
                info!(
                    uri = %schema.uri(),
                    count = tests.len(),
                    "automatic tests generated"
                );
                tests
            }
        };

        monitors.notify_source_executed(schema.uri(), GenerationKind::Automatic, tests.len());
        Ok(tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfcheck_types::{GenerationError, SchemaModel, Statement};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_schema(prefix: &str) -> SchemaSource {
        SchemaSource::new(
            prefix,
            format!("http://example.org/{prefix}"),
            SchemaModel::new().with_statement(Statement::new(
                "ex:Thing",
                "rdf:type",
                "owl:Class",
            )),
        )
    }

    struct CountingGenerator {
        runs: AtomicUsize,
    }

    impl CountingGenerator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                runs: AtomicUsize::new(0),
            })
        }
    }

    impl TestGenerator for CountingGenerator {
        fn name(&self) -> &str {
            "counting"
        }

        fn generate(&self, schema: &SchemaSource) -> GenerationResult<Vec<TestCase>> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            Ok(vec![
                TestCase::new("auto-1", schema.uri().clone(), "first"),
                TestCase::new("auto-2", schema.uri().clone(), "second"),
            ])
        }
    }

    struct FailingGenerator;

    impl TestGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        fn generate(&self, schema: &SchemaSource) -> GenerationResult<Vec<TestCase>> {
            Err(GenerationError::AutoGeneration {
                uri: schema.uri().clone(),
                detail: "analysis blew up".into(),
            })
        }
    }

    #[test]
    fn test_cache_path_is_deterministic_and_sanitized() {
        let folder = Path::new("/tmp/tests");
        let schema = make_schema("foaf");
        assert_eq!(
            cached_tests_path(folder, &schema),
            cached_tests_path(folder, &schema)
        );

        let odd = SchemaSource::unresolved("my/odd prefix", "http://example.org/odd");
        let path = cached_tests_path(folder, &odd);
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("my_odd_prefix.tests.json")
        );
    }

    #[test]
    fn test_miss_generates_writes_then_hits() {
        let folder = tempfile::tempdir().unwrap();
        let schema = make_schema("foaf");
        let generator = CountingGenerator::new();
        let generators: Vec<Arc<dyn TestGenerator>> = vec![generator.clone()];
        let monitors = MonitorSet::new();
        let cached = CachedAutoGenerator::new(true);

        let first = cached
            .generate(folder.path(), &schema, &generators, &monitors)
            .unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(generator.runs.load(Ordering::SeqCst), 1);
        assert!(cached_tests_path(folder.path(), &schema).exists());

        // second run must be a hit: no regeneration, identical content
        let second = cached
            .generate(folder.path(), &schema, &generators, &monitors)
            .unwrap();
        assert_eq!(generator.runs.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_entry_triggers_regeneration() {
        let folder = tempfile::tempdir().unwrap();
        let schema = make_schema("foaf");
        let location = cached_tests_path(folder.path(), &schema);
        std::fs::create_dir_all(location.parent().unwrap()).unwrap();
        std::fs::write(&location, b"not json at all").unwrap();

        let generator = CountingGenerator::new();
        let generators: Vec<Arc<dyn TestGenerator>> = vec![generator.clone()];
        let tests = CachedAutoGenerator::new(true)
            .generate(folder.path(), &schema, &generators, &MonitorSet::new())
            .unwrap();

        assert_eq!(tests.len(), 2);
        assert_eq!(generator.runs.load(Ordering::SeqCst), 1);
        // the corrupt entry was overwritten with a usable one
        assert!(matches!(
            read_cached_tests(&location, schema.uri()),
            CacheRead::Hit(_)
        ));
    }

    #[test]
    fn test_entry_for_other_schema_is_unusable() {
        let folder = tempfile::tempdir().unwrap();
        let schema = make_schema("foaf");
        let location = cached_tests_path(folder.path(), &schema);
        write_cached_tests(&location, &schema, &[]).unwrap();

        let other = SourceUri::new("http://example.org/other");
        assert!(matches!(
            read_cached_tests(&location, &other),
            CacheRead::Corrupt(_)
        ));
    }

    #[test]
    fn test_disabled_cache_skips_read_but_still_writes() {
        let folder = tempfile::tempdir().unwrap();
        let schema = make_schema("foaf");
        let generator = CountingGenerator::new();
        let generators: Vec<Arc<dyn TestGenerator>> = vec![generator.clone()];
        let cached = CachedAutoGenerator::new(false);

        cached
            .generate(folder.path(), &schema, &generators, &MonitorSet::new())
            .unwrap();
        assert!(cached_tests_path(folder.path(), &schema).exists());

        // a warm cache is ignored when loading is disabled
        cached
            .generate(folder.path(), &schema, &generators, &MonitorSet::new())
            .unwrap();
        assert_eq!(generator.runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let folder = tempfile::tempdir().unwrap();
        // occupy the cache directory path with a regular file
        std::fs::write(folder.path().join("cache"), b"in the way").unwrap();

        let schema = make_schema("foaf");
        let generator = CountingGenerator::new();
        let generators: Vec<Arc<dyn TestGenerator>> = vec![generator.clone()];
        let tests = CachedAutoGenerator::new(true)
            .generate(folder.path(), &schema, &generators, &MonitorSet::new())
            .unwrap();

        // persistence failed, but the generated tests still come back
        assert_eq!(tests.len(), 2);
    }

    #[test]
    fn test_generator_failure_propagates() {
        let folder = tempfile::tempdir().unwrap();
        let schema = make_schema("foaf");
        let generators: Vec<Arc<dyn TestGenerator>> = vec![Arc::new(FailingGenerator)];
        let result = CachedAutoGenerator::new(true).generate(
            folder.path(),
            &schema,
            &generators,
            &MonitorSet::new(),
        );
        assert!(matches!(
            result,
            Err(GenerationError::AutoGeneration { .. })
        ));
    }
}
