//! Host page error types.

use thiserror::Error;

/// Errors reported by a host page while acting on an element.
///
/// This enum is marked `#[non_exhaustive]` so hosts other than
/// [`MemoryPage`](crate::MemoryPage) can grow new failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PageError {
    /// The locator matched no element.
    #[error("no element matches {0}")]
    NotFound(String),

    /// A single-element action matched more than one element.
    #[error("{locator} matched {count} elements")]
    Ambiguous { locator: String, count: usize },

    /// The selector is outside the host's dialect.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The element is not a `<select>`.
    #[error("element {0} is not a <select> element")]
    NotSelectable(String),

    /// A requested option does not exist in the select element.
    #[error("no option matches {0}")]
    OptionNotFound(String),

    /// The element cannot hold or accept a typed value.
    #[error("element {0} is not an editable input")]
    NotEditable(String),

    /// The element is not a checkbox or radio input.
    #[error("element {0} is not a checkbox or radio input")]
    NotCheckable(String),

    /// Radio buttons can only be checked.
    #[error("cannot uncheck radio button {0}")]
    RadioUncheck(String),

    /// The element is disabled.
    #[error("element {0} is disabled")]
    Disabled(String),

    /// The page document could not be loaded.
    #[error("failed to load document: {0}")]
    Document(String),

    /// Any other host failure, message preserved.
    #[error("{0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, PageError>;
