//! Compound CSS selector subset understood by [`MemoryPage`](crate::MemoryPage).
//!
//! Supported: an optional tag name (or `*`) followed by any number of `#id`,
//! `.class`, `[attr]` and `[attr=value]` parts, with the value optionally
//! quoted. Combinators, pseudo-classes and selector lists are rejected.

use crate::{Element, PageError, Result};
use std::iter::Peekable;
use std::str::Chars;

/// A parsed compound selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeMatch>,
}

/// `[name]` or `[name=value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatch {
    pub name: String,
    pub value: Option<String>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(invalid(source, "empty selector"));
        }

        let mut selector = Selector::default();
        let mut chars = trimmed.chars().peekable();

        if chars.peek() == Some(&'*') {
            chars.next();
        } else if chars.peek().copied().is_some_and(is_ident_char) {
            selector.tag = Some(read_ident(&mut chars).to_ascii_lowercase());
        }

        while let Some(c) = chars.next() {
            match c {
                '#' => {
                    let id = read_ident(&mut chars);
                    if id.is_empty() {
                        return Err(invalid(source, "expected an id after '#'"));
                    }
                    if selector.id.replace(id).is_some() {
                        return Err(invalid(source, "more than one id"));
                    }
                }
                '.' => {
                    let class = read_ident(&mut chars);
                    if class.is_empty() {
                        return Err(invalid(source, "expected a class name after '.'"));
                    }
                    selector.classes.push(class);
                }
                '[' => selector.attributes.push(read_attribute(source, &mut chars)?),
                c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                    return Err(invalid(source, "combinators are not supported"));
                }
                ',' => return Err(invalid(source, "selector lists are not supported")),
                ':' => return Err(invalid(source, "pseudo-classes are not supported")),
                other => return Err(invalid(source, &format!("unexpected character '{other}'"))),
            }
        }

        Ok(selector)
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.is_tag(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attributes.iter().all(|attr| {
            match (element.get_attribute(&attr.name), &attr.value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            }
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn read_attribute(source: &str, chars: &mut Peekable<Chars<'_>>) -> Result<AttributeMatch> {
    skip_whitespace(chars);
    let name = read_ident(chars);
    if name.is_empty() {
        return Err(invalid(source, "expected an attribute name after '['"));
    }
    skip_whitespace(chars);

    match chars.next() {
        Some(']') => Ok(AttributeMatch { name, value: None }),
        Some('=') => {
            skip_whitespace(chars);
            let value = match chars.peek().copied() {
                Some(quote @ ('"' | '\'')) => {
                    chars.next();
                    let mut value = String::new();
                    loop {
                        match chars.next() {
                            Some(c) if c == quote => break,
                            Some(c) => value.push(c),
                            None => return Err(invalid(source, "unterminated string")),
                        }
                    }
                    value
                }
                _ => read_ident(chars),
            };
            skip_whitespace(chars);
            match chars.next() {
                Some(']') => Ok(AttributeMatch {
                    name,
                    value: Some(value),
                }),
                _ => Err(invalid(source, "expected ']'")),
            }
        }
        _ => Err(invalid(source, "unsupported attribute operator")),
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn invalid(selector: &str, reason: &str) -> PageError {
    PageError::InvalidSelector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_selector() {
        let sel = Selector::parse("select#country.wide[name='c c'][required]").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("select"));
        assert_eq!(sel.id.as_deref(), Some("country"));
        assert_eq!(sel.classes, vec!["wide"]);
        assert_eq!(
            sel.attributes,
            vec![
                AttributeMatch {
                    name: "name".into(),
                    value: Some("c c".into())
                },
                AttributeMatch {
                    name: "required".into(),
                    value: None
                },
            ]
        );
    }

    #[test]
    fn matches_on_every_part() {
        let el = Element::new("INPUT")
            .attr("id", "email")
            .attr("class", "field wide")
            .attr("name", "email");

        assert!(Selector::parse("input").unwrap().matches(&el));
        assert!(Selector::parse("#email").unwrap().matches(&el));
        assert!(Selector::parse("*.field.wide").unwrap().matches(&el));
        assert!(Selector::parse("[name=email]").unwrap().matches(&el));
        assert!(!Selector::parse("[name=phone]").unwrap().matches(&el));
        assert!(!Selector::parse("textarea#email").unwrap().matches(&el));
    }

    #[test]
    fn rejects_unsupported_syntax() {
        for source in ["", "form input", "a > b", "a, b", "input:checked", "[x~=y]", "#", "[a=\"b]"] {
            let err = Selector::parse(source).unwrap_err();
            assert!(
                matches!(err, PageError::InvalidSelector { .. }),
                "{source:?} should be rejected"
            );
        }
    }
}
