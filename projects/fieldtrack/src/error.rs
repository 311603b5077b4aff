// Error types for unit selection and frame invocation

use thiserror::Error;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// `-t` appeared as the last token, with no unit code following it
    #[error("'-t' flag has no unit code following it")]
    MissingUnitCode,

    /// The command string did not select any execution unit
    #[error("no execution unit selected by command: '{0}'")]
    NoUnitSelected(String),
}
