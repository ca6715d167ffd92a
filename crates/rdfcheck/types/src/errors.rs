//! Error types for test generation

use crate::SourceUri;

/// Errors that abort a generation run
///
/// Soft conditions (unreadable schema model, absent manual-test
/// configuration, failed cache read, failed cache write) are not errors;
/// they are logged where they occur and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Automatic generation failed for {uri}: {detail}")]
    AutoGeneration { uri: SourceUri, detail: String },

    #[error("Shape generation failed for {uri}: {detail}")]
    ShapeGeneration { uri: SourceUri, detail: String },

    #[error("Embedded test extraction failed for {uri}: {detail}")]
    EmbeddedExtraction { uri: SourceUri, detail: String },

    #[error("Manual test lookup failed for {uri}: {detail}")]
    ManualLookup { uri: SourceUri, detail: String },
}

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
