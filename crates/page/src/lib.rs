//! Host page capability.
//!
//! This crate defines the narrow surface the tool layer depends on: a
//! [`Page`] that can act on elements addressed by a [`Locator`]. Browser
//! drivers implement [`Page`]; [`MemoryPage`] is an in-process host backed by a
//! serde-loadable [`Document`], used by tests and the command line driver.
//!
//! # Example
//!
//! ```no_run
//! use page::{Document, Element, Locator, MemoryPage, OptionElement, OptionQuery, Page};
//!
//! # async fn example() -> page::Result<()> {
//! let document = Document::new(vec![
//!     Element::new("select")
//!         .attr("id", "country")
//!         .option(OptionElement::new("fr", "France"))
//!         .option(OptionElement::new("de", "Germany")),
//! ]);
//! let page = MemoryPage::new(document);
//!
//! let locator = Locator::selector("select#country");
//! let selected = page
//!     .select_options(&locator, &OptionQuery::Labels(vec!["Germany".into()]))
//!     .await?;
//! assert_eq!(selected, vec!["de"]);
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod locator;
mod memory;
mod selector;

use std::future::Future;

pub use document::{Document, Element, OptionElement};
pub use error::{PageError, Result};
pub use locator::{Locator, OptionQuery};
pub use memory::MemoryPage;
pub use selector::Selector;

/// Browser page capability consumed by tools.
///
/// Every method resolves `locator` against the live page at call time.
/// Implementations own matching, waiting and mutual exclusion; callers never
/// hold element handles across calls.
pub trait Page: Send + Sync {
    /// Select options in a `<select>` element, returning the values selected afterwards.
    fn select_options(
        &self,
        locator: &Locator,
        query: &OptionQuery,
    ) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Read the current value of an input, textarea or select element.
    fn input_value(&self, locator: &Locator) -> impl Future<Output = Result<String>> + Send;

    /// Read the rendered text of an element.
    fn inner_text(&self, locator: &Locator) -> impl Future<Output = Result<String>> + Send;

    /// Replace the value of a text input or textarea.
    fn fill(&self, locator: &Locator, text: &str) -> impl Future<Output = Result<()>> + Send;

    /// Click an element.
    fn click(&self, locator: &Locator) -> impl Future<Output = Result<()>> + Send;

    /// Set the checked state of a checkbox or radio input.
    fn set_checked(
        &self,
        locator: &Locator,
        checked: bool,
    ) -> impl Future<Output = Result<()>> + Send;
}
