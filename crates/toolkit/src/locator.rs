//! Element locator resolution.

use crate::schema::Invariant;
use crate::{Result, ToolError};
use page::Locator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default attribute carrying an element's logical identifier.
pub const DEFAULT_ID_ATTRIBUTE: &str = "data-element-id";

/// How a call refers to its target element.
///
/// A selection policy, not a live handle: it is turned into a [`Locator`] for
/// every call and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementRef {
    /// Logical element identifier. Takes precedence over `cssSelector`.
    #[serde(
        default,
        deserialize_with = "crate::schema::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub element_id: Option<String>,

    /// CSS selector used when no `elementId` is given.
    #[serde(
        default,
        deserialize_with = "crate::schema::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub css_selector: Option<String>,
}

impl ElementRef {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            element_id: Some(id.into()),
            css_selector: None,
        }
    }

    pub fn by_selector(selector: impl Into<String>) -> Self {
        Self {
            element_id: None,
            css_selector: Some(selector.into()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.element_id.is_some() || self.css_selector.is_some()
    }
}

/// Argument shapes that address an element.
pub trait Targeted {
    fn target(&self) -> &ElementRef;
}

/// Invariant requiring `elementId` or `cssSelector`.
pub const fn locator_required<A: Targeted>() -> Invariant<A> {
    Invariant {
        name: "locator_required",
        message: "at least one of elementId or cssSelector required",
        any_of: &["elementId", "cssSelector"],
        holds: has_target::<A>,
    }
}

fn has_target<A: Targeted>(args: &A) -> bool {
    args.target().is_present()
}

/// Turns element references into locators for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    id_attribute: String,
}

impl Resolver {
    pub fn new(id_attribute: impl Into<String>) -> Self {
        Self {
            id_attribute: id_attribute.into(),
        }
    }

    pub fn id_attribute(&self) -> &str {
        &self.id_attribute
    }

    /// Identifier wins over selector; neither is an error.
    ///
    /// Matching is left to the host when the locator is acted upon, so zero
    /// or several matches surface as host errors, not resolution errors.
    pub fn resolve(&self, target: &ElementRef) -> Result<Locator> {
        if let Some(id) = &target.element_id {
            return Ok(Locator::attribute(&self.id_attribute, id));
        }
        if let Some(selector) = &target.css_selector {
            return Ok(Locator::selector(selector));
        }
        Err(ToolError::Resolution("missing locator input".to_string()))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_ID_ATTRIBUTE)
    }
}
