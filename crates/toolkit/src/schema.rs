//! Argument validation and parameter declaration.
//!
//! Validation runs in three stages, each usable on its own:
//!
//! 1. [`decode`]: the raw string must be a JSON object.
//! 2. [`structural`]: the object must deserialize into the tool's argument
//!    type. Extra fields are ignored, missing required fields are fatal.
//! 3. [`refine`]: the argument type's [`Invariant`]s are checked in order and
//!    the first violation is reported with its own message.
//!
//! [`declare`] derives the externally declared parameter schema from the same
//! argument type, adding one `anyOf` clause per invariant, so the declaration
//! tracks what [`validate`] enforces.

use crate::{Result, ToolError};
use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use tracing::debug;

/// A typed tool argument shape.
pub trait Arguments: DeserializeOwned + JsonSchema + Send + 'static {
    /// Cross-field checks, evaluated in order after structural decoding.
    const INVARIANTS: &'static [Invariant<Self>] = &[];
}

/// A named cross-field constraint: at least one of `any_of` must be present.
pub struct Invariant<A> {
    /// Stable identifier of the constraint.
    pub name: &'static str,
    /// Human-readable failure message.
    pub message: &'static str,
    /// Declared field names, one of which must be supplied.
    pub any_of: &'static [&'static str],
    pub holds: fn(&A) -> bool,
}

/// Validate a raw argument string into `A`.
pub fn validate<A: Arguments>(raw: &str) -> Result<A> {
    let value = decode(raw)?;
    let args = structural(value)?;
    refine(&args)?;
    Ok(args)
}

/// Parse the raw payload, requiring a JSON object.
pub fn decode(raw: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ToolError::Validation(format!("malformed payload: {e}")))?;

    if !value.is_object() {
        return Err(ToolError::Validation(format!(
            "malformed payload: expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    Ok(value)
}

/// Deserialize a decoded payload into the typed argument shape.
pub fn structural<A: Arguments>(value: Value) -> Result<A> {
    serde_json::from_value(value)
        .map_err(|e| ToolError::Validation(format!("invalid arguments: {e}")))
}

/// Check every invariant of `A`, failing on the first violation.
pub fn refine<A: Arguments>(args: &A) -> Result<()> {
    match A::INVARIANTS.iter().find(|inv| !(inv.holds)(args)) {
        Some(violated) => {
            debug!(invariant = violated.name, "argument invariant violated");
            Err(ToolError::Validation(violated.message.to_string()))
        }
        None => Ok(()),
    }
}

/// Deserializer for optional fields that may be omitted but never `null`.
///
/// Optional properties are declared without a null type. Pair with
/// `#[serde(default)]`.
pub fn non_null<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom("null is not allowed, omit the field instead")),
    }
}

/// JSON-Schema-like parameter declaration for `A`.
pub fn declare<A: Arguments>() -> Value {
    let root = SchemaSettings::draft07()
        .with(|s| {
            s.inline_subschemas = true;
            s.option_add_null_type = false;
            s.meta_schema = None;
        })
        .into_generator()
        .into_root_schema_for::<A>();
    let mut schema =
        serde_json::to_value(&root).expect("generated schema should serialize to JSON");

    if let Some(object) = schema.as_object_mut() {
        // Rust type names and docs are not part of the tool contract.
        object.remove("title");
        object.remove("description");

        let mut clauses: Vec<Value> = A::INVARIANTS
            .iter()
            .map(|inv| {
                let alternatives: Vec<Value> = inv
                    .any_of
                    .iter()
                    .map(|field| json!({ "required": [field] }))
                    .collect();
                json!({ "anyOf": alternatives })
            })
            .collect();

        match clauses.len() {
            0 => {}
            1 => {
                if let Some(Value::Object(clause)) = clauses.pop() {
                    object.extend(clause);
                }
            }
            _ => {
                object.insert("allOf".to_string(), Value::Array(clauses));
            }
        }
    }
    schema
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Probe {
        name: String,
        first_alias: Option<String>,
        second_alias: Option<String>,
        size: Option<u32>,
    }

    fn has_alias(p: &Probe) -> bool {
        p.first_alias.is_some() || p.second_alias.is_some()
    }

    fn has_size(p: &Probe) -> bool {
        p.size.is_some()
    }

    impl Arguments for Probe {
        const INVARIANTS: &'static [Invariant<Self>] = &[
            Invariant {
                name: "alias_required",
                message: "at least one alias required",
                any_of: &["firstAlias", "secondAlias"],
                holds: has_alias,
            },
            Invariant {
                name: "size_required",
                message: "size required",
                any_of: &["size"],
                holds: has_size,
            },
        ];
    }

    #[test]
    fn accepts_valid_payload_with_extra_fields() {
        let probe: Probe =
            validate(r#"{"name": "x", "secondAlias": "y", "size": 3, "future": true}"#).unwrap();
        assert_eq!(probe.name, "x");
        assert_eq!(probe.second_alias.as_deref(), Some("y"));
    }

    #[test]
    fn malformed_payloads_are_validation_errors() {
        for raw in ["", "{", "not json", "{\"name\": }"] {
            let err = validate::<Probe>(raw).unwrap_err();
            match err {
                ToolError::Validation(msg) => assert!(msg.starts_with("malformed payload"), "{msg}"),
                other => panic!("unexpected error for {raw:?}: {other}"),
            }
        }
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let err = decode("[\"x\"]").unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("malformed payload: expected a JSON object, found an array".into())
        );
        assert!(decode("null").is_err());
    }

    #[test]
    fn structural_errors_name_the_field() {
        let err = validate::<Probe>(r#"{"firstAlias": "y"}"#).unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation("invalid arguments: missing field `name`".into())
        );

        let err = validate::<Probe>(r#"{"name": 4}"#).unwrap_err();
        assert!(matches!(err, ToolError::Validation(msg) if msg.contains("expected a string")));
    }

    #[test]
    fn invariants_run_in_order_after_structure() {
        let err = validate::<Probe>(r#"{"name": "x"}"#).unwrap_err();
        assert_eq!(err, ToolError::Validation("at least one alias required".into()));

        let err = validate::<Probe>(r#"{"name": "x", "firstAlias": "a"}"#).unwrap_err();
        assert_eq!(err, ToolError::Validation("size required".into()));
    }

    #[test]
    fn declaration_mirrors_the_type_and_invariants() {
        let schema = declare::<Probe>();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("title").is_none());
        assert_eq!(schema["required"], json!(["name"]));

        let properties = schema["properties"].as_object().unwrap();
        let mut names: Vec<&str> = properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, ["firstAlias", "name", "secondAlias", "size"]);

        assert_eq!(
            schema["allOf"],
            json!([
                {"anyOf": [{"required": ["firstAlias"]}, {"required": ["secondAlias"]}]},
                {"anyOf": [{"required": ["size"]}]}
            ])
        );
    }
}
