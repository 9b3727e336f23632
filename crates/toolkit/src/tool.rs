//! Tool definition contract.

use crate::schema::{self, Arguments};
use crate::{Result, ToolSpec};
use page::Page;
use policy::CapabilityKind;
use serde::Serialize;
use std::future::Future;

/// A named, schema-declared page operation.
///
/// `validate` is the only producer of [`Tool::Args`]; `execute` trusts its
/// input and never re-validates. The page is passed to every call and never
/// stored by the tool.
pub trait Tool: Send + Sync {
    type Args: Arguments;
    type Output: Serialize;

    /// Unique, stable tool name.
    const NAME: &'static str;
    /// Description shown to callers.
    const DESCRIPTION: &'static str;
    const CAPABILITY: CapabilityKind;

    /// Declaration exposed to callers.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            parameters: schema::declare::<Self::Args>(),
        }
    }

    /// Decode and check a raw argument string.
    fn validate(&self, raw: &str) -> Result<Self::Args> {
        schema::validate(raw)
    }

    /// Perform the operation against `page`.
    fn execute<P: Page>(
        &self,
        page: &P,
        args: Self::Args,
    ) -> impl Future<Output = Result<Self::Output>> + Send;
}
