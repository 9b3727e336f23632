//! In-memory host page.

use crate::{Document, Element, Locator, OptionQuery, Page, PageError, Result, Selector};
use tokio::sync::RwLock;
use tracing::trace;

/// A [`Page`] over an in-memory [`Document`].
///
/// Single-element actions use strict matching: a locator must match exactly
/// one element. The document lock is taken per operation and never held
/// between calls.
#[derive(Debug, Default)]
pub struct MemoryPage {
    document: RwLock<Document>,
}

impl MemoryPage {
    pub fn new(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    /// Load a page from a JSON document fixture.
    pub fn from_json(json: &str) -> Result<Self> {
        Document::from_json(json).map(Self::new)
    }

    /// Copy of the current document state.
    pub async fn snapshot(&self) -> Document {
        self.document.read().await.clone()
    }

    /// Copy of the single element `locator` matches.
    pub async fn element(&self, locator: &Locator) -> Result<Element> {
        let document = self.document.read().await;
        let index = locate_one(&document, locator)?;
        Ok(document.elements[index].clone())
    }

    /// Number of elements `locator` matches.
    pub async fn count(&self, locator: &Locator) -> Result<usize> {
        let document = self.document.read().await;
        Ok(locate_all(&document, locator)?.len())
    }
}

impl Page for MemoryPage {
    async fn select_options(&self, locator: &Locator, query: &OptionQuery) -> Result<Vec<String>> {
        let mut document = self.document.write().await;
        let index = locate_one(&document, locator)?;
        let element = &mut document.elements[index];

        if !element.is_tag("select") {
            return Err(PageError::NotSelectable(locator.to_string()));
        }
        if element.disabled {
            return Err(PageError::Disabled(locator.to_string()));
        }

        let chosen = match_options(element, query)?;

        for (position, option) in element.options.iter_mut().enumerate() {
            option.selected = chosen.contains(&position);
        }
        let selected = element.selected_values();
        element.value = selected.first().cloned().unwrap_or_default();

        trace!(%locator, ?selected, "options selected");
        Ok(selected)
    }

    async fn input_value(&self, locator: &Locator) -> Result<String> {
        let document = self.document.read().await;
        let element = &document.elements[locate_one(&document, locator)?];

        if element.is_tag("select") {
            return Ok(element.selected_values().into_iter().next().unwrap_or_default());
        }
        if element.is_tag("input") || element.is_tag("textarea") {
            return Ok(element.value.clone());
        }
        Err(PageError::NotEditable(locator.to_string()))
    }

    async fn inner_text(&self, locator: &Locator) -> Result<String> {
        let document = self.document.read().await;
        let element = &document.elements[locate_one(&document, locator)?];
        Ok(element.text.clone())
    }

    async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        let mut document = self.document.write().await;
        let index = locate_one(&document, locator)?;
        let element = &mut document.elements[index];

        if !element.is_text_input() || element.is_readonly() {
            return Err(PageError::NotEditable(locator.to_string()));
        }
        if element.disabled {
            return Err(PageError::Disabled(locator.to_string()));
        }
        element.value = text.to_string();
        Ok(())
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let mut document = self.document.write().await;
        let index = locate_one(&document, locator)?;
        if document.elements[index].disabled {
            return Err(PageError::Disabled(locator.to_string()));
        }

        document.elements[index].clicks += 1;
        match document.elements[index].input_type().as_deref() {
            Some("checkbox") => {
                let element = &mut document.elements[index];
                element.checked = !element.checked;
            }
            Some("radio") => check_radio(&mut document, index),
            _ => {}
        }
        Ok(())
    }

    async fn set_checked(&self, locator: &Locator, checked: bool) -> Result<()> {
        let mut document = self.document.write().await;
        let index = locate_one(&document, locator)?;
        let element = &document.elements[index];

        if !element.is_checkable() {
            return Err(PageError::NotCheckable(locator.to_string()));
        }
        if element.disabled {
            return Err(PageError::Disabled(locator.to_string()));
        }

        if element.input_type().as_deref() == Some("radio") {
            if !checked {
                return Err(PageError::RadioUncheck(locator.to_string()));
            }
            check_radio(&mut document, index);
        } else {
            document.elements[index].checked = checked;
        }
        Ok(())
    }
}

fn locate_all(document: &Document, locator: &Locator) -> Result<Vec<usize>> {
    let matches: Vec<usize> = match locator {
        Locator::ByAttribute { attribute, value } => document
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.get_attribute(attribute) == Some(value.as_str()))
            .map(|(i, _)| i)
            .collect(),
        Locator::BySelector { selector } => {
            let selector = Selector::parse(selector)?;
            document
                .elements
                .iter()
                .enumerate()
                .filter(|(_, el)| selector.matches(el))
                .map(|(i, _)| i)
                .collect()
        }
    };
    Ok(matches)
}

fn locate_one(document: &Document, locator: &Locator) -> Result<usize> {
    let matches = locate_all(document, locator)?;
    match matches.as_slice() {
        [] => Err(PageError::NotFound(locator.to_string())),
        [index] => Ok(*index),
        _ => Err(PageError::Ambiguous {
            locator: locator.to_string(),
            count: matches.len(),
        }),
    }
}

/// Positions of the options `query` picks, in request order.
///
/// A multi-select needs every requested item to match. A single-select takes
/// the first item that matches and fails only when none does.
fn match_options(element: &Element, query: &OptionQuery) -> Result<Vec<usize>> {
    let options = &element.options;
    let lookups: Vec<(String, Option<usize>)> = match query {
        OptionQuery::Values(values) => values
            .iter()
            .map(|v| (format!("value \"{v}\""), options.iter().position(|o| &o.value == v)))
            .collect(),
        OptionQuery::Labels(labels) => labels
            .iter()
            .map(|l| (format!("label \"{l}\""), options.iter().position(|o| &o.label == l)))
            .collect(),
        OptionQuery::Indexes(indexes) => indexes
            .iter()
            .map(|&i| {
                let position = i as usize;
                (format!("index {i}"), (position < options.len()).then_some(position))
            })
            .collect(),
    };

    if element.multiple {
        return lookups
            .into_iter()
            .map(|(description, position)| position.ok_or(PageError::OptionNotFound(description)))
            .collect();
    }

    if let Some(position) = lookups.iter().find_map(|(_, position)| *position) {
        return Ok(vec![position]);
    }
    match lookups.into_iter().next() {
        Some((description, _)) => Err(PageError::OptionNotFound(description)),
        None => Ok(Vec::new()),
    }
}

/// Check the radio at `index` and clear the others in its group.
fn check_radio(document: &mut Document, index: usize) {
    let group = document.elements[index]
        .get_attribute("name")
        .map(str::to_string);

    for (position, element) in document.elements.iter_mut().enumerate() {
        if position == index {
            element.checked = true;
        } else if group.is_some()
            && element.input_type().as_deref() == Some("radio")
            && element.get_attribute("name") == group.as_deref()
        {
            element.checked = false;
        }
    }
}
