//! Domain types for rdfcheck test generation
//!
//! A dataset under test (a [`TestSource`]) declares conformance to zero or
//! more schemas ([`SchemaSource`]). Generation strategies derive
//! [`TestCase`]s from those schemas, and one generation run produces an
//! ordered [`TestSuite`].
//!
//! # Key Concepts
//!
//! - **TestSource**: the dataset under test, owning its referenced schemas.
//! - **SchemaSource**: a schema document with a URI, a cache prefix, and an
//!   optionally loaded data model. A missing or empty model is a degraded
//!   state, not an error.
//! - **SchemaModel**: the loaded statement set of a schema. This crate never
//!   parses RDF syntax; the model is handed over already loaded.
//! - **TestCase**: an opaque, immutable artifact produced by a generation
//!   strategy. Identity semantics are strategy-defined.
//! - **TestSuite**: the ordered result of exactly one generation run.
//!   Insertion order reflects schema-iteration order, then strategy order
//!   within a schema. No deduplication.
//!
//! # Design Principles
//!
//! 1. Sources are constructed and owned by whoever resolves datasets; the
//!    generation engine never mutates them.
//! 2. Test cases become owned by the suite on merge and are never inspected
//!    by the engine beyond counting.
//! 3. Diagnostics are logged where they occur; the suite carries no
//!    error or warning list.

#![deny(unsafe_code)]

mod errors;
mod kind;
mod model;
mod source;
mod test_case;

pub use errors::*;
pub use kind::*;
pub use model::*;
pub use source::*;
pub use test_case::*;
