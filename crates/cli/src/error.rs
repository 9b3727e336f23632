//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The page fixture could not be read.
    #[error("failed to read page fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The tool call completed with an error outcome.
    #[error("{0}")]
    Tool(#[from] toolkit::ToolError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Registry(#[from] toolkit::RegistryError),

    /// The page fixture is not a valid document.
    #[error(transparent)]
    Page(#[from] page::PageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
