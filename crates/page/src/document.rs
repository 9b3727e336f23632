//! Flat document model backing [`MemoryPage`](crate::MemoryPage).

use crate::{PageError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A page's elements in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PageError::Document(e.to_string()))
    }
}

/// An element and the state the host tracks for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Current value of inputs and textareas.
    #[serde(default)]
    pub value: String,

    /// Rendered text.
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub checked: bool,

    /// Whether a select element accepts more than one option.
    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionElement>,

    /// Number of clicks received.
    #[serde(default)]
    pub clicks: u32,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            value: String::new(),
            text: String::new(),
            checked: false,
            multiple: false,
            disabled: false,
            options: Vec::new(),
            clicks: 0,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn option(mut self, option: OptionElement) -> Self {
        self.options.push(option);
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// The `type` attribute of an input, lowercased, defaulting to `text`.
    pub fn input_type(&self) -> Option<String> {
        if !self.is_tag("input") {
            return None;
        }
        Some(
            self.get_attribute("type")
                .unwrap_or("text")
                .to_ascii_lowercase(),
        )
    }

    pub fn is_checkable(&self) -> bool {
        matches!(self.input_type().as_deref(), Some("checkbox" | "radio"))
    }

    pub fn is_text_input(&self) -> bool {
        if self.is_tag("textarea") {
            return true;
        }
        match self.input_type().as_deref() {
            Some(kind) => !matches!(
                kind,
                "checkbox" | "radio" | "button" | "submit" | "reset" | "image" | "file" | "hidden"
            ),
            None => false,
        }
    }

    pub fn is_readonly(&self) -> bool {
        self.attributes.contains_key("readonly")
    }

    /// Values of the currently selected options.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.clone())
            .collect()
    }
}

/// An `<option>` inside a select element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionElement {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

impl OptionElement {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}
