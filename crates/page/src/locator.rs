//! Element addressing types shared between the tool layer and hosts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of the element(s) an action targets.
///
/// A locator is not a live handle: the host matches it against the page each
/// time it is acted upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Locator {
    /// Elements whose `attribute` equals `value` exactly.
    ByAttribute { attribute: String, value: String },
    /// Elements matching a selector in the host's dialect.
    BySelector { selector: String },
}

impl Locator {
    pub fn attribute(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ByAttribute {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        Self::BySelector {
            selector: selector.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByAttribute { attribute, value } => write!(f, "[{attribute}=\"{value}\"]"),
            Self::BySelector { selector } => write!(f, "'{selector}'"),
        }
    }
}

/// Which options of a select element to choose.
///
/// Each variant carries the requested items in order. More than one item asks
/// for a multi-selection; single-select hosts honor only the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "items", rename_all = "snake_case")]
pub enum OptionQuery {
    /// Match by the option's `value` attribute.
    Values(Vec<String>),
    /// Match by the option's visible text.
    Labels(Vec<String>),
    /// Match by zero-based position.
    Indexes(Vec<u32>),
}

impl OptionQuery {
    pub fn len(&self) -> usize {
        match self {
            Self::Values(items) | Self::Labels(items) => items.len(),
            Self::Indexes(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
