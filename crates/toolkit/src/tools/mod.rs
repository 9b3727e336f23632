//! Built-in page tools.

mod assert_equal;
mod inspection;
mod interaction;
mod select_option;

pub use assert_equal::{AssertEqualArgs, AssertEqualTool};
pub use inspection::{
    AssertValueArgs, AssertValueTool, GetTextTool, GetValueTool, ReadArgs, TextRead, ValueRead,
};
pub use interaction::{
    CheckedState, ClickArgs, ClickTool, FillArgs, FillTool, SetCheckedArgs, SetCheckedTool,
};
pub use select_option::{SelectOptionArgs, SelectOptionTool, criterion};

#[cfg(test)]
pub(crate) mod fixtures {
    use page::{Document, Element, MemoryPage, OptionElement};

    /// A small form with stable identifiers.
    pub fn form() -> MemoryPage {
        MemoryPage::new(Document::new(vec![
            Element::new("select")
                .attr("id", "country")
                .attr("data-element-id", "country")
                .option(OptionElement::new("fr", "France"))
                .option(OptionElement::new("de", "Germany").selected())
                .option(OptionElement::new("it", "Italy")),
            Element::new("select")
                .attr("id", "langs")
                .attr("data-element-id", "langs")
                .multiple(true)
                .option(OptionElement::new("en", "English"))
                .option(OptionElement::new("es", "Spanish"))
                .option(OptionElement::new("pt", "Portuguese")),
            Element::new("input")
                .attr("id", "email")
                .attr("type", "email")
                .attr("data-element-id", "email"),
            Element::new("input")
                .attr("id", "phone")
                .attr("data-element-id", "phone")
                .value("555-0100"),
            Element::new("input")
                .attr("id", "terms")
                .attr("type", "checkbox")
                .attr("data-element-id", "terms"),
            Element::new("span")
                .attr("id", "greeting")
                .attr("data-element-id", "greeting")
                .text("Hello, world"),
        ]))
    }
}
