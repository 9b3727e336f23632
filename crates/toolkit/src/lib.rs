//! Browser tool invocation bridge.
//!
//! A caller names a tool and hands over an undecoded JSON argument string.
//! The tool validates the payload against its declared argument type,
//! resolves the element locator and drives a [`page::Page`]. Results are
//! small serde records; assertion mismatches are results, not errors.
//!
//! ```no_run
//! use page::MemoryPage;
//! use toolkit::{Dispatcher, Registry, Resolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::builtin(&Resolver::default())?;
//! let dispatcher = Dispatcher::new(registry, MemoryPage::default());
//! let output = dispatcher
//!     .call("assert_equal", r#"{"actual": "1", "expected": "1"}"#)
//!     .await?;
//! assert_eq!(output["success"], true);
//! # Ok(())
//! # }
//! ```

mod dispatch;
mod error;
mod host;
mod locator;
mod registry;
pub mod schema;
mod selection;
mod tool;
pub mod tools;
mod types;

pub use dispatch::Dispatcher;
pub use error::{RegistryError, Result, ToolError};
pub use host::ToolHost;
pub use locator::{DEFAULT_ID_ATTRIBUTE, ElementRef, Resolver, Targeted, locator_required};
pub use registry::{BuiltinTool, Registry};
pub use selection::OneOrMany;
pub use tool::Tool;
pub use types::{Comparison, Completed, ToolCall, ToolOutcome, ToolResult, ToolSpec};
