//! Name-based tool dispatch against a page.

use crate::registry::Registry;
use crate::{Result, ToolCall, ToolError, ToolHost, ToolResult, ToolSpec};
use page::Page;
use policy::{CapabilityRequest, Decision, Policy};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Routes calls by tool name to the registry, gated by a capability policy.
///
/// The dispatcher owns the page handle and lends it to each tool for the
/// duration of one call.
pub struct Dispatcher<P> {
    registry: Registry,
    page: P,
    policy: Policy,
    specs: Vec<ToolSpec>,
}

impl<P: Page> Dispatcher<P> {
    /// Dispatcher with a permissive policy.
    pub fn new(registry: Registry, page: P) -> Self {
        Self::with_policy(registry, page, Policy::permissive())
    }

    pub fn with_policy(registry: Registry, page: P, policy: Policy) -> Self {
        let specs = registry.specs();
        Self {
            registry,
            page,
            policy,
            specs,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Invoke tool `name` with the raw argument string.
    #[instrument(skip(self, raw), fields(len = raw.len()))]
    pub async fn call(&self, name: &str, raw: &str) -> Result<Value> {
        let tool = self.registry.lookup(name)?;

        let request = CapabilityRequest::with_scope(tool.capability(), name);
        if let Decision::Deny { reason } = self.policy.check(&request) {
            warn!(%reason, "tool call denied");
            return Err(ToolError::PermissionDenied(reason));
        }

        let output = tool.call(&self.page, raw).await;
        match &output {
            Ok(_) => debug!("tool call succeeded"),
            Err(e) => debug!(kind = e.kind(), error = %e, "tool call failed"),
        }
        output
    }

    /// Invoke `call` and wrap the outcome into a result record.
    pub async fn run(&self, call: &ToolCall) -> ToolResult {
        let result = self.call(&call.name, &call.arguments).await;
        ToolResult::new(call.id.clone(), result)
    }
}

impl<P: Page> ToolHost for Dispatcher<P> {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value> {
        self.call(&call.name, &call.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::Resolver;
    use crate::tools::fixtures::form;
    use crate::types::ToolOutcome;
    use page::{Locator, MemoryPage};
    use serde_json::json;

    fn dispatcher(policy: Policy) -> Dispatcher<MemoryPage> {
        let registry = Registry::builtin(&Resolver::default()).unwrap();
        Dispatcher::with_policy(registry, form(), policy)
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_before_validation() {
        let d = dispatcher(Policy::permissive());
        let err = d.call("select_options", "not json").await.unwrap_err();
        assert_eq!(err, ToolError::UnknownTool("select_options".into()));
    }

    #[tokio::test]
    async fn malformed_payloads_fail_validation_for_every_tool() {
        let d = dispatcher(Policy::permissive());
        for name in d.registry().names() {
            for raw in ["", "{", "[1]", "null", "\"x\"", "{\"elementId\": }"] {
                let err = d.call(name, raw).await.unwrap_err();
                assert!(
                    matches!(&err, ToolError::Validation(msg) if msg.starts_with("malformed payload")),
                    "{name} with {raw:?}: {err:?}"
                );
            }
        }
    }

    #[tokio::test]
    async fn specs_are_sorted_and_complete() {
        let d = dispatcher(Policy::permissive());
        let names: Vec<&str> = d.specs().iter().map(|s| s.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), d.registry().len());
    }

    #[tokio::test]
    async fn denied_write_leaves_page_untouched() {
        let d = dispatcher(Policy::read_only());
        let err = d
            .call("select_option", r#"{"elementId": "country", "value": "fr"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::PermissionDenied(_)));

        let country = d.page().element(&Locator::selector("#country")).await.unwrap();
        assert_eq!(country.selected_values(), vec!["de"]);

        let read = d
            .call("get_value", r#"{"elementId": "country"}"#)
            .await
            .unwrap();
        assert_eq!(read, json!({"success": true, "value": "de"}));
    }

    #[tokio::test]
    async fn identifier_wins_over_selector_end_to_end() {
        let d = dispatcher(Policy::permissive());
        let output = d
            .call(
                "select_option",
                r#"{"elementId": "langs", "cssSelector": "select#country", "label": "Spanish"}"#,
            )
            .await
            .unwrap();
        assert_eq!(output, json!({"success": true}));

        let langs = d.page().element(&Locator::selector("#langs")).await.unwrap();
        let country = d.page().element(&Locator::selector("#country")).await.unwrap();
        assert_eq!(langs.selected_values(), vec!["es"]);
        assert_eq!(country.selected_values(), vec!["de"]);
    }

    #[tokio::test]
    async fn failed_assertion_is_a_successful_call() {
        let d = dispatcher(Policy::permissive());
        let output = d
            .call("assert_equal", r#"{"actual": "a", "expected": "b"}"#)
            .await
            .unwrap();
        assert_eq!(
            output,
            json!({"actual": "a", "expected": "b", "success": false})
        );
    }

    #[tokio::test]
    async fn run_wraps_errors_by_call_id() {
        let d = dispatcher(Policy::permissive());
        let call = ToolCall::new("fill", r##"{"cssSelector": "#email"}"##).with_id("call-1");
        let result = d.run(&call).await;
        assert_eq!(result.tool_call_id, "call-1");
        assert!(result.outcome.is_error());
        match result.outcome {
            ToolOutcome::Error { error } => assert_eq!(error.kind(), "validation"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn tool_host_execute_matches_call() {
        let d = dispatcher(Policy::permissive());
        let call = ToolCall::new("get_text", r#"{"elementId": "greeting"}"#);
        let output = d.execute(&call).await.unwrap();
        assert_eq!(output, json!({"success": true, "text": "Hello, world"}));
    }
}
