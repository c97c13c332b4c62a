use std::path::PathBuf;

use thiserror::Error;
use topo_layout::{DragError, ScaleError};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("cannot compute scale: {0}")]
    Scale(#[from] ScaleError),

    #[error("cannot drag: {0}")]
    Drag(#[from] DragError),

    #[error("failed to install log subscriber: {message}")]
    Logging { message: String },
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Process exit status, following the BSD `sysexits` ranges.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 64,
            Self::Json { .. } | Self::Scale(_) | Self::Drag(_) => 65,
            Self::Io { .. } => 74,
            Self::Logging { .. } => 70,
        }
    }
}
