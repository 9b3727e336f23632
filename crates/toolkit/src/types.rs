//! Tool-related types.

use crate::ToolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A tool call as received from the caller: a name and an undecoded JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this call (used to correlate results).
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// Raw JSON arguments, validated by the tool.
    pub arguments: String,
}

impl ToolCall {
    /// Create a call with a fresh id.
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Outcome of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome {
    /// Tool executed; `output` carries its result record.
    Success { output: Value },
    /// The call was rejected or the host failed.
    Error { error: ToolError },
}

impl ToolOutcome {
    /// Whether this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Result of a tool execution, paired with call ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// ID of the tool call this result corresponds to.
    pub tool_call_id: String,
    /// Outcome of the execution.
    pub outcome: ToolOutcome,
}

impl ToolResult {
    pub fn new(tool_call_id: impl Into<String>, result: Result<Value, ToolError>) -> Self {
        let outcome = match result {
            Ok(output) => ToolOutcome::Success { output },
            Err(error) => ToolOutcome::Error { error },
        };
        Self {
            tool_call_id: tool_call_id.into(),
            outcome,
        }
    }
}

/// A tool definition exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema for the arguments.
    pub parameters: Value,
}

/// Result of a tool whose only outcome is having acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completed {
    pub success: bool,
}

impl Completed {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result of an assertion, carrying both compared values verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub actual: String,
    pub expected: String,
    pub success: bool,
}

impl Comparison {
    /// Exact string equality: no trimming, coercion or case folding.
    pub fn of(actual: String, expected: String) -> Self {
        let success = actual == expected;
        Self {
            actual,
            expected,
            success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_result_constructors() {
        let success = ToolResult::new("id1", Ok(Value::Bool(true)));
        assert!(!success.outcome.is_error());

        let error = ToolResult::new("id2", Err(ToolError::UnknownTool("x".into())));
        assert!(error.outcome.is_error());
    }

    #[test]
    fn error_outcome_shape() {
        let result = ToolResult::new("c1", Err(ToolError::Validation("bad".into())));
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({
                "toolCallId": "c1",
                "outcome": {
                    "status": "error",
                    "error": {"kind": "validation", "message": "bad"}
                }
            })
        );
    }

    #[test]
    fn calls_get_distinct_ids() {
        let a = ToolCall::new("click", "{}");
        let b = ToolCall::new("click", "{}");
        assert_ne!(a.id, b.id);
        assert_eq!(a.with_id("fixed").id, "fixed");
    }

    #[test]
    fn comparison_is_exact() {
        assert!(Comparison::of("a".into(), "a".into()).success);
        assert!(!Comparison::of("a ".into(), "a".into()).success);
        assert!(!Comparison::of("A".into(), "a".into()).success);
    }
}
