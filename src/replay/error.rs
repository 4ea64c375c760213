use thiserror::Error;

use crate::mvi::ReduceError;

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error during replay")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: invalid JSON")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: action rejected")]
    Rejected {
        line: usize,
        #[source]
        source: ReduceError,
    },

    #[error("Failed to serialize state")]
    Output(#[source] serde_json::Error),
}

impl ReplayError {
    /// 1-based script line that caused the error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Json { line, .. } | Self::Rejected { line, .. } => Some(*line),
            Self::Io(_) | Self::Output(_) => None,
        }
    }
}
