//! Scalar-or-sequence arguments and first-match priority tables.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single item or an ordered sequence of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// One row of a priority table: a label and an extractor.
pub type Rule<A, T> = (&'static str, fn(&A) -> Option<T>);

/// Evaluate `rules` in order, returning the first extractor that yields a value.
pub fn first_match<A, T>(args: &A, rules: &[Rule<A, T>]) -> Option<(&'static str, T)> {
    rules
        .iter()
        .find_map(|(label, extract)| extract(args).map(|value| (*label, value)))
}
