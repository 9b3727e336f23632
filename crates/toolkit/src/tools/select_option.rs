//! Option selection in `<select>` elements.

use crate::locator::{ElementRef, Resolver, Targeted, locator_required};
use crate::schema::{Arguments, Invariant};
use crate::selection::{OneOrMany, Rule, first_match};
use crate::tool::Tool;
use crate::{Completed, Result, ToolError};
use page::{OptionQuery, Page};
use policy::CapabilityKind;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

const CRITERION_REQUIRED: &str = "at least one selection criterion required";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionArgs {
    #[serde(flatten)]
    pub target: ElementRef,

    /// Option value attribute(s) to select. Takes precedence over `label` and `index`.
    #[serde(
        default,
        deserialize_with = "crate::schema::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<OneOrMany<String>>,

    /// Visible option text(s) to select. Takes precedence over `index`.
    #[serde(
        default,
        deserialize_with = "crate::schema::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<OneOrMany<String>>,

    /// Zero-based option position(s) to select.
    #[serde(
        default,
        deserialize_with = "crate::schema::non_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub index: Option<OneOrMany<u32>>,
}

impl Targeted for SelectOptionArgs {
    fn target(&self) -> &ElementRef {
        &self.target
    }
}

impl Arguments for SelectOptionArgs {
    const INVARIANTS: &'static [Invariant<Self>] = &[
        locator_required(),
        Invariant {
            name: "criterion_required",
            message: CRITERION_REQUIRED,
            any_of: &["value", "label", "index"],
            holds: has_criterion,
        },
    ];
}

fn has_criterion(args: &SelectOptionArgs) -> bool {
    criterion(args).is_some()
}

/// Criterion priority: value, then label, then index.
const CRITERIA: &[Rule<SelectOptionArgs, OptionQuery>] = &[
    ("value", by_value),
    ("label", by_label),
    ("index", by_index),
];

fn by_value(args: &SelectOptionArgs) -> Option<OptionQuery> {
    args.value
        .clone()
        .map(|v| OptionQuery::Values(v.into_vec()))
}

fn by_label(args: &SelectOptionArgs) -> Option<OptionQuery> {
    args.label
        .clone()
        .map(|l| OptionQuery::Labels(l.into_vec()))
}

fn by_index(args: &SelectOptionArgs) -> Option<OptionQuery> {
    args.index
        .clone()
        .map(|i| OptionQuery::Indexes(i.into_vec()))
}

/// The single criterion honored for `args`, with its kind.
pub fn criterion(args: &SelectOptionArgs) -> Option<(&'static str, OptionQuery)> {
    first_match(args, CRITERIA)
}

/// Selects options of a select element by value, label or index.
#[derive(Debug, Clone, Default)]
pub struct SelectOptionTool {
    resolver: Resolver,
}

impl SelectOptionTool {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl Tool for SelectOptionTool {
    type Args = SelectOptionArgs;
    type Output = Completed;

    const NAME: &'static str = "select_option";
    const DESCRIPTION: &'static str = "Select option(s) in a <select> element. Identify the element \
        by elementId or cssSelector, and the options by value, label or zero-based index \
        (a single item or a list for multi-select). If several criteria are given, value wins \
        over label and label over index.";
    const CAPABILITY: CapabilityKind = CapabilityKind::PageWrite;

    async fn execute<P: Page>(&self, page: &P, args: SelectOptionArgs) -> Result<Completed> {
        let locator = self.resolver.resolve(&args.target)?;
        let (kind, query) =
            criterion(&args).ok_or_else(|| ToolError::Validation(CRITERION_REQUIRED.to_string()))?;

        debug!(%locator, criterion = kind, items = query.len(), "selecting options");
        let selected = page.select_options(&locator, &query).await?;
        debug!(%locator, ?selected, "selection applied");

        Ok(Completed::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fixtures::form;
    use page::Locator;
    use serde_json::json;

    async fn run(raw: serde_json::Value) -> Result<Completed> {
        let page = form();
        let tool = SelectOptionTool::default();
        let args = tool.validate(&raw.to_string())?;
        tool.execute(&page, args).await
    }

    async fn selection_after(raw: serde_json::Value) -> Vec<String> {
        let page = form();
        let tool = SelectOptionTool::default();
        let args = tool.validate(&raw.to_string()).unwrap();
        tool.execute(&page, args).await.unwrap();
        let locator = Locator::selector("#langs");
        page.element(&locator).await.unwrap().selected_values()
    }

    #[test]
    fn missing_locator_is_rejected_by_validation() {
        let err = SelectOptionTool::default()
            .validate(r#"{"value": "fr"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("at least one of elementId or cssSelector required".into())
        );
    }

    #[test]
    fn missing_criterion_is_rejected_by_validation() {
        let err = SelectOptionTool::default()
            .validate(r#"{"elementId": "country"}"#)
            .unwrap_err();
        assert_eq!(err, ToolError::Validation(CRITERION_REQUIRED.into()));
    }

    #[test]
    fn wrong_criterion_type_is_rejected() {
        let err = SelectOptionTool::default()
            .validate(r#"{"elementId": "country", "index": "first"}"#)
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));

        let err = SelectOptionTool::default()
            .validate(r#"{"elementId": "country", "index": -1}"#)
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[test]
    fn invariants_are_checked_locator_first() {
        let names: Vec<&str> = SelectOptionArgs::INVARIANTS.iter().map(|inv| inv.name).collect();
        assert_eq!(names, ["locator_required", "criterion_required"]);

        let err = SelectOptionTool::default().validate("{}").unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("at least one of elementId or cssSelector required".into())
        );
    }

    #[test]
    fn explicit_null_is_rejected() {
        let tool = SelectOptionTool::default();
        for raw in [
            r#"{"elementId": "country", "value": null, "label": "France"}"#,
            r#"{"elementId": null, "cssSelector": "select", "index": 0}"#,
            r#"{"elementId": "country", "index": null}"#,
        ] {
            let err = tool.validate(raw).unwrap_err();
            assert!(
                matches!(&err, ToolError::Validation(msg) if msg.contains("null is not allowed")),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn omitted_criteria_fall_through() {
        let args = SelectOptionTool::default()
            .validate(r#"{"elementId": "country", "label": "France", "index": 1}"#)
            .unwrap();
        assert_eq!(
            criterion(&args),
            Some(("label", OptionQuery::Labels(vec!["France".into()])))
        );
    }

    #[test]
    fn value_outranks_label_and_index() {
        let args = SelectOptionArgs {
            value: Some(OneOrMany::One("de".into())),
            label: Some(OneOrMany::One("France".into())),
            index: Some(OneOrMany::One(2)),
            ..Default::default()
        };
        assert_eq!(
            criterion(&args),
            Some(("value", OptionQuery::Values(vec!["de".into()])))
        );

        let args = SelectOptionArgs {
            label: Some(OneOrMany::Many(vec!["France".into()])),
            index: Some(OneOrMany::One(2)),
            ..Default::default()
        };
        assert_eq!(
            criterion(&args),
            Some(("label", OptionQuery::Labels(vec!["France".into()])))
        );
    }

    #[tokio::test]
    async fn selects_by_identifier() {
        let page = form();
        let tool = SelectOptionTool::default();
        let args = tool
            .validate(r#"{"elementId": "country", "label": "Italy"}"#)
            .unwrap();
        let result = tool.execute(&page, args).await.unwrap();
        assert_eq!(result, Completed::ok());

        let country = page.element(&Locator::selector("#country")).await.unwrap();
        assert_eq!(country.selected_values(), vec!["it"]);
    }

    #[tokio::test]
    async fn priority_law_holds_against_the_page() {
        let with_label = selection_after(json!({
            "cssSelector": "#langs", "value": ["es"], "label": ["English", "Portuguese"]
        }))
        .await;
        let value_only = selection_after(json!({"cssSelector": "#langs", "value": ["es"]})).await;
        assert_eq!(with_label, value_only);
        assert_eq!(value_only, vec!["es"]);
    }

    #[tokio::test]
    async fn scalar_equals_single_item_sequence() {
        let scalar = selection_after(json!({"cssSelector": "#langs", "label": "Spanish"})).await;
        let sequence =
            selection_after(json!({"cssSelector": "#langs", "label": ["Spanish"]})).await;
        assert_eq!(scalar, sequence);
    }

    #[tokio::test]
    async fn sequence_selects_many_on_multi_select() {
        let selected =
            selection_after(json!({"cssSelector": "#langs", "index": [0, 2]})).await;
        assert_eq!(selected, vec!["en", "pt"]);
    }

    #[tokio::test]
    async fn host_failures_become_execution_errors() {
        let err = run(json!({"elementId": "country", "value": "xx"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ToolError::Execution("no option matches value \"xx\"".into())
        );

        let err = run(json!({"elementId": "email", "index": 0})).await.unwrap_err();
        assert!(matches!(err, ToolError::Execution(msg) if msg.contains("not a <select>")));
    }

    #[tokio::test]
    async fn executor_guards_missing_locator() {
        let args = SelectOptionArgs {
            index: Some(OneOrMany::One(0)),
            ..Default::default()
        };
        let err = SelectOptionTool::default()
            .execute(&form(), args)
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::Resolution("missing locator input".into()));
    }
}
