//! Generation kinds reported through the monitor protocol

use serde::{Deserialize, Serialize};

/// How a batch of test cases was produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationKind {
    /// Derived from structural analysis of a schema
    Automatic,
    /// Authored by a human and associated with a source out-of-band
    Manual,
}

impl std::fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationKind::Automatic => write!(f, "automatic"),
            GenerationKind::Manual => write!(f, "manual"),
        }
    }
}
