//! Tools that mutate form controls: click, fill, set_checked.

use crate::locator::{ElementRef, Resolver, Targeted, locator_required};
use crate::schema::{Arguments, Invariant};
use crate::tool::Tool;
use crate::{Completed, Result};
use page::Page;
use policy::CapabilityKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ClickArgs {
    #[serde(flatten)]
    pub target: ElementRef,
}

impl Targeted for ClickArgs {
    fn target(&self) -> &ElementRef {
        &self.target
    }
}

impl Arguments for ClickArgs {
    const INVARIANTS: &'static [Invariant<Self>] = &[locator_required()];
}

/// Tool for clicking elements on the page.
#[derive(Debug, Clone, Default)]
pub struct ClickTool {
    resolver: Resolver,
}

impl ClickTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for ClickTool {
    type Args = ClickArgs;
    type Output = Completed;

    const NAME: &'static str = "click";
    const DESCRIPTION: &'static str =
        "Click an element identified by elementId or cssSelector.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageWrite;

    async fn execute<P: Page>(&self, page: &P, args: ClickArgs) -> Result<Completed> {
        let locator = self.resolver.resolve(&args.target)?;
        debug!(%locator, "clicking");
        page.click(&locator).await?;
        Ok(Completed::ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct FillArgs {
    #[serde(flatten)]
    pub target: ElementRef,
    /// Text that replaces the current value.
    pub value: String,
}

impl Targeted for FillArgs {
    fn target(&self) -> &ElementRef {
        &self.target
    }
}

impl Arguments for FillArgs {
    const INVARIANTS: &'static [Invariant<Self>] = &[locator_required()];
}

/// Tool for typing into text inputs.
#[derive(Debug, Clone, Default)]
pub struct FillTool {
    resolver: Resolver,
}

impl FillTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for FillTool {
    type Args = FillArgs;
    type Output = Completed;

    const NAME: &'static str = "fill";
    const DESCRIPTION: &'static str = "Replace the value of a text input or textarea identified \
        by elementId or cssSelector.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageWrite;

    async fn execute<P: Page>(&self, page: &P, args: FillArgs) -> Result<Completed> {
        let locator = self.resolver.resolve(&args.target)?;
        debug!(%locator, len = args.value.len(), "filling");
        page.fill(&locator, &args.value).await?;
        Ok(Completed::ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct SetCheckedArgs {
    #[serde(flatten)]
    pub target: ElementRef,
    /// Desired checked state.
    pub checked: bool,
}

impl Targeted for SetCheckedArgs {
    fn target(&self) -> &ElementRef {
        &self.target
    }
}

impl Arguments for SetCheckedArgs {
    const INVARIANTS: &'static [Invariant<Self>] = &[locator_required()];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedState {
    pub success: bool,
    pub checked: bool,
}

/// Tool for checking or unchecking checkboxes and radio buttons.
#[derive(Debug, Clone, Default)]
pub struct SetCheckedTool {
    resolver: Resolver,
}

impl SetCheckedTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for SetCheckedTool {
    type Args = SetCheckedArgs;
    type Output = CheckedState;

    const NAME: &'static str = "set_checked";
    const DESCRIPTION: &'static str = "Check or uncheck a checkbox, or check a radio button, \
        identified by elementId or cssSelector.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageWrite;

    async fn execute<P: Page>(&self, page: &P, args: SetCheckedArgs) -> Result<CheckedState> {
        let locator = self.resolver.resolve(&args.target)?;
        debug!(%locator, checked = args.checked, "setting checked state");
        page.set_checked(&locator, args.checked).await?;
        Ok(CheckedState {
            success: true,
            checked: args.checked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolError;
    use crate::tools::fixtures::form;
    use page::Locator;

    #[tokio::test]
    async fn click_targets_identifier_not_selector() {
        let page = form();
        let tool = ClickTool::default();
        let args = tool
            .validate(r##"{"elementId": "email", "cssSelector": "#phone"}"##)
            .unwrap();
        tool.execute(&page, args).await.unwrap();

        assert_eq!(page.element(&Locator::selector("#email")).await.unwrap().clicks, 1);
        assert_eq!(page.element(&Locator::selector("#phone")).await.unwrap().clicks, 0);
    }

    #[tokio::test]
    async fn fill_replaces_value() {
        let page = form();
        let tool = FillTool::default();
        let args = tool
            .validate(r##"{"cssSelector": "#email", "value": "me@example.com"}"##)
            .unwrap();
        assert_eq!(tool.execute(&page, args).await.unwrap(), Completed::ok());
        let email = page.element(&Locator::selector("#email")).await.unwrap();
        assert_eq!(email.value, "me@example.com");
    }

    #[test]
    fn fill_requires_value_and_locator() {
        let tool = FillTool::default();
        let err = tool.validate(r#"{"elementId": "email"}"#).unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("invalid arguments: missing field `value`".into())
        );
        let err = tool.validate(r#"{"value": "x"}"#).unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("at least one of elementId or cssSelector required".into())
        );
    }

    #[tokio::test]
    async fn set_checked_reports_state() {
        let page = form();
        let tool = SetCheckedTool::default();
        let args = tool
            .validate(r#"{"elementId": "terms", "checked": true}"#)
            .unwrap();
        let result = tool.execute(&page, args).await.unwrap();
        assert_eq!(
            result,
            CheckedState {
                success: true,
                checked: true
            }
        );
        assert!(page.element(&Locator::selector("#terms")).await.unwrap().checked);
    }

    #[tokio::test]
    async fn set_checked_on_text_input_fails_in_host() {
        let page = form();
        let tool = SetCheckedTool::default();
        let args = tool
            .validate(r#"{"elementId": "email", "checked": true}"#)
            .unwrap();
        let err = tool.execute(&page, args).await.unwrap_err();
        assert!(matches!(err, ToolError::Execution(msg) if msg.contains("not a checkbox")));
    }
}
