use std::path::PathBuf;

use thiserror::Error;

/// The registry document could not be read or parsed.
///
/// The message always carries the underlying cause.
#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("Failed to read MCP registry {}: {cause}", .path.display())]
    Read {
        path: PathBuf,
        cause: std::io::Error,
    },
    #[error("Failed to parse MCP registry {}: {cause}", .path.display())]
    Parse {
        path: PathBuf,
        cause: serde_json::Error,
    },
    #[error("Invalid MCP registry {}: {reason}", .path.display())]
    Shape { path: PathBuf, reason: String },
}

impl RegistryLoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Shape { path, .. } => path,
        }
    }
}
