use page::PageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while dispatching a tool call.
///
/// Negative domain outcomes (a failed assertion) are never errors; they are
/// reported as `success: false` in the tool's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ToolError {
    /// The raw arguments do not satisfy the tool's schema or invariants.
    #[error("validation failed: {0}")]
    Validation(String),
    /// No actionable element reference could be built.
    #[error("could not resolve element: {0}")]
    Resolution(String),
    /// The host page failed to perform the action.
    #[error("execution failed: {0}")]
    Execution(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

impl ToolError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Resolution(_) => "resolution",
            Self::Execution(_) => "execution",
            Self::UnknownTool(_) => "unknown_tool",
            Self::PermissionDenied(_) => "permission_denied",
        }
    }
}

impl From<PageError> for ToolError {
    fn from(err: PageError) -> Self {
        Self::Execution(err.to_string())
    }
}

/// Errors raised while assembling a registry at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("tool registered twice: {0}")]
    Duplicate(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;
