/// Broad category of a [`PaintError`], for callers that only need to branch
/// on what went wrong rather than where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The instructions themselves were missing or malformed.
    InvalidInput,
    /// The grid could not be built with the requested dimensions.
    Configuration,
}

/// Represents errors that can occur while setting up or running a paint job.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaintError {
    #[error("no instructions provided")]
    NoInstructions,
    #[error("unrecognized direction '{token}' at instruction {index}")]
    UnknownDirection { token: String, index: usize },
    #[error("unrecognized direction '{token}' on line {line}")]
    UnknownInstruction { token: String, line: usize },
    #[error("grid dimensions must be positive, got {rows} rows x {columns} columns")]
    InvalidDimensions { rows: usize, columns: usize },
}

impl PaintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaintError::NoInstructions
            | PaintError::UnknownDirection { .. }
            | PaintError::UnknownInstruction { .. } => ErrorKind::InvalidInput,
            PaintError::InvalidDimensions { .. } => ErrorKind::Configuration,
        }
    }
}
