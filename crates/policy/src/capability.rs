use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability types a tool can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// Reads page state or compares values.
    PageRead,
    /// Mutates page state.
    PageWrite,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageRead => f.write_str("page_read"),
            Self::PageWrite => f.write_str("page_write"),
        }
    }
}

/// A capability request with optional scope.
#[derive(Debug, Clone)]
pub struct CapabilityRequest {
    pub kind: CapabilityKind,
    pub scope: Option<String>, // tool name
}

impl CapabilityRequest {
    pub fn new(kind: CapabilityKind) -> Self {
        Self { kind, scope: None }
    }

    pub fn with_scope(kind: CapabilityKind, scope: impl Into<String>) -> Self {
        Self {
            kind,
            scope: Some(scope.into()),
        }
    }

    pub fn page_read(tool: impl Into<String>) -> Self {
        Self::with_scope(CapabilityKind::PageRead, tool)
    }

    pub fn page_write(tool: impl Into<String>) -> Self {
        Self::with_scope(CapabilityKind::PageWrite, tool)
    }
}
