//! Tools that read element state: get_value, get_text, assert_value.

use crate::locator::{ElementRef, Resolver, Targeted, locator_required};
use crate::schema::{Arguments, Invariant};
use crate::tool::Tool;
use crate::{Comparison, Result};
use page::Page;
use policy::CapabilityKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ReadArgs {
    #[serde(flatten)]
    pub target: ElementRef,
}

impl Targeted for ReadArgs {
    fn target(&self) -> &ElementRef {
        &self.target
    }
}

impl Arguments for ReadArgs {
    const INVARIANTS: &'static [Invariant<Self>] = &[locator_required()];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRead {
    pub success: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRead {
    pub success: bool,
    pub text: String,
}

/// Reads the current value of an input, textarea or select.
#[derive(Debug, Clone, Default)]
pub struct GetValueTool {
    resolver: Resolver,
}

impl GetValueTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for GetValueTool {
    type Args = ReadArgs;
    type Output = ValueRead;

    const NAME: &'static str = "get_value";
    const DESCRIPTION: &'static str = "Read the current value of an input, textarea or select \
        element identified by elementId or cssSelector.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageRead;

    async fn execute<P: Page>(&self, page: &P, args: ReadArgs) -> Result<ValueRead> {
        let locator = self.resolver.resolve(&args.target)?;
        let value = page.input_value(&locator).await?;
        Ok(ValueRead {
            success: true,
            value,
        })
    }
}

/// Reads the rendered text of an element.
#[derive(Debug, Clone, Default)]
pub struct GetTextTool {
    resolver: Resolver,
}

impl GetTextTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for GetTextTool {
    type Args = ReadArgs;
    type Output = TextRead;

    const NAME: &'static str = "get_text";
    const DESCRIPTION: &'static str =
        "Read the visible text of an element identified by elementId or cssSelector.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageRead;

    async fn execute<P: Page>(&self, page: &P, args: ReadArgs) -> Result<TextRead> {
        let locator = self.resolver.resolve(&args.target)?;
        let text = page.inner_text(&locator).await?;
        Ok(TextRead {
            success: true,
            text,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct AssertValueArgs {
    #[serde(flatten)]
    pub target: ElementRef,
    /// Value the element should hold.
    pub expected: String,
}

impl Targeted for AssertValueArgs {
    fn target(&self) -> &ElementRef {
        &self.target
    }
}

impl Arguments for AssertValueArgs {
    const INVARIANTS: &'static [Invariant<Self>] = &[locator_required()];
}

/// Compares an element's current value with an expected string.
#[derive(Debug, Clone, Default)]
pub struct AssertValueTool {
    resolver: Resolver,
}

impl AssertValueTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for AssertValueTool {
    type Args = AssertValueArgs;
    type Output = Comparison;

    const NAME: &'static str = "assert_value";
    const DESCRIPTION: &'static str = "Assert that the value of an input, textarea or select \
        identified by elementId or cssSelector equals `expected` exactly. Returns both values \
        and success=false on mismatch.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageRead;

    async fn execute<P: Page>(&self, page: &P, args: AssertValueArgs) -> Result<Comparison> {
        let locator = self.resolver.resolve(&args.target)?;
        let actual = page.input_value(&locator).await?;
        let comparison = Comparison::of(actual, args.expected);
        if !comparison.success {
            debug!(%locator, actual = %comparison.actual, expected = %comparison.expected, "value mismatch");
        }
        Ok(comparison)
    }
}
