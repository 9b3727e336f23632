//! Pure string equality assertion.

use crate::schema::Arguments;
use crate::tool::Tool;
use crate::{Comparison, Result};
use page::Page;
use policy::CapabilityKind;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct AssertEqualArgs {
    /// Observed value.
    pub actual: String,
    /// Value the caller expects.
    pub expected: String,
}

impl Arguments for AssertEqualArgs {}

/// Compares two strings exactly. A mismatch is a result, not an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssertEqualTool;

impl Tool for AssertEqualTool {
    type Args = AssertEqualArgs;
    type Output = Comparison;

    const NAME: &'static str = "assert_equal";
    const DESCRIPTION: &'static str = "Assert that two strings are exactly equal (no trimming or \
        case folding). Returns both values and success=false on mismatch.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageRead;

    async fn execute<P: Page>(&self, _page: &P, args: AssertEqualArgs) -> Result<Comparison> {
        Ok(Comparison::of(args.actual, args.expected))
    }
}
