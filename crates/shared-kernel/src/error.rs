// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Layer variants are transparent so that the message printed by the binary
/// is exactly the layer's own message (`<operand>: <reason>`).
#[derive(Debug, Error)]
pub enum CommLinesError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl CommLinesError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled { .. }))
    }

    /// True when the failure is a closed stdout pipe.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Infrastructure(InfrastructureError::OutputWrite { source })
                if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}

pub type Result<T> = std::result::Result<T, CommLinesError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Raised only when order checking was requested.
    #[error("file {input} is not in sorted order (line {line_number})")]
    UnsortedInput { input: u8, line_number: usize },
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("comparison cancelled {stage}")]
    Cancelled { stage: &'static str },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("{operand}: {source}")]
    SourceOpen {
        operand: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{operand}: read error: {source}")]
    SourceRead {
        operand: String,
        #[source]
        source: std::io::Error,
    },

    #[error("write error: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("{}", invalid_count_message(*found))]
    InvalidArgumentCount { found: usize },

    #[error("invalid value '{value}' for '{flag}': {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

fn invalid_count_message(found: usize) -> String {
    match found {
        0 => "missing operand".to_string(),
        1 => "missing operand after the first file".to_string(),
        n => format!("extra operand: expected 2 files, got {n}"),
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputWrite { source: err }
    }
}

impl From<std::io::Error> for CommLinesError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}
