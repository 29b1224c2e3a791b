//! Input-schema parsing and type coercion
//!
//! Tools declare their parameters as a JSON schema. This module flattens the
//! schema's `properties` into `ParamSpec`s and coerces raw user text into
//! typed JSON values. The type space is a closed variant set; unknown type
//! tags degrade to `String` instead of failing.

use serde_json::{Number, Value};

/// Declared parameter type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
}

/// Raw-text values accepted as boolean true/false (case-insensitive)
const TRUE_WORDS: [&str; 3] = ["true", "1", "yes"];
const FALSE_WORDS: [&str; 3] = ["false", "0", "no"];

impl ParamType {
    /// Map a schema type tag to a variant. Unknown or missing tags are
    /// treated as `String`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("number") => Self::Number,
            Some("integer") => Self::Integer,
            Some("boolean") => Self::Boolean,
            _ => Self::String,
        }
    }

    /// Label used in prompts and validation messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Coerce non-empty raw text into a typed value.
    ///
    /// Numeric parse failures are `Invalid` (the collector re-prompts);
    /// unrecognized boolean text is recorded as null and accepted. The
    /// asymmetry is inherited behavior and covered by tests.
    pub fn coerce(&self, raw: &str) -> Coercion {
        match self {
            Self::Number => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Coercion::Value(Value::Number(n)),
                None => Coercion::Invalid,
            },
            Self::Integer => match raw.parse::<i64>() {
                Ok(n) => Coercion::Value(Value::Number(n.into())),
                Err(_) => Coercion::Invalid,
            },
            Self::Boolean => {
                let lower = raw.to_lowercase();
                if TRUE_WORDS.contains(&lower.as_str()) {
                    Coercion::Value(Value::Bool(true))
                } else if FALSE_WORDS.contains(&lower.as_str()) {
                    Coercion::Value(Value::Bool(false))
                } else {
                    Coercion::Null
                }
            }
            Self::String => Coercion::Value(Value::String(raw.to_string())),
        }
    }
}

/// Outcome of coercing one raw input
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// Typed value to record
    Value(Value),
    /// Record null and advance (unrecognized boolean text)
    Null,
    /// Unparsable numeric text; the same parameter is prompted again
    Invalid,
}

/// One declared parameter, flattened from the input schema
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub ty: ParamType,
    pub description: Option<String>,
    pub required: bool,
}

/// Flatten a tool's input schema into parameter specs, in declaration order.
///
/// A missing schema, or one without `properties`, yields no parameters.
pub fn parse_input_schema(schema: Option<&Value>) -> Vec<ParamSpec> {
    let Some(properties) = schema.and_then(|s| s.get("properties")).and_then(Value::as_object)
    else {
        return Vec::new();
    };

    let required: Vec<&str> = schema
        .and_then(|s| s.get("required"))
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    properties
        .iter()
        .map(|(name, info)| ParamSpec {
            name: name.clone(),
            ty: ParamType::from_tag(info.get("type").and_then(Value::as_str)),
            description: info
                .get("description")
                .and_then(Value::as_str)
                .map(|d| d.to_string()),
            required: required.contains(&name.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_tag_known_types() {
        assert_eq!(ParamType::from_tag(Some("string")), ParamType::String);
        assert_eq!(ParamType::from_tag(Some("number")), ParamType::Number);
        assert_eq!(ParamType::from_tag(Some("integer")), ParamType::Integer);
        assert_eq!(ParamType::from_tag(Some("boolean")), ParamType::Boolean);
    }

    #[test]
    fn test_from_tag_unknown_defaults_to_string() {
        assert_eq!(ParamType::from_tag(Some("array")), ParamType::String);
        assert_eq!(ParamType::from_tag(Some("object")), ParamType::String);
        assert_eq!(ParamType::from_tag(None), ParamType::String);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(
            ParamType::Number.coerce("3.5"),
            Coercion::Value(json!(3.5))
        );
        assert_eq!(ParamType::Number.coerce("abc"), Coercion::Invalid);
    }

    #[test]
    fn test_coerce_integer() {
        assert_eq!(ParamType::Integer.coerce("42"), Coercion::Value(json!(42)));
        assert_eq!(ParamType::Integer.coerce("3.5"), Coercion::Invalid);
        assert_eq!(ParamType::Integer.coerce("abc"), Coercion::Invalid);
    }

    #[test]
    fn test_coerce_boolean_accepted_words() {
        for raw in ["true", "1", "YES"] {
            assert_eq!(
                ParamType::Boolean.coerce(raw),
                Coercion::Value(json!(true)),
                "expected {raw:?} to be true"
            );
        }
        for raw in ["false", "0", "No"] {
            assert_eq!(
                ParamType::Boolean.coerce(raw),
                Coercion::Value(json!(false)),
                "expected {raw:?} to be false"
            );
        }
    }

    #[test]
    fn test_coerce_boolean_unrecognized_is_null() {
        assert_eq!(ParamType::Boolean.coerce("maybe"), Coercion::Null);
    }

    #[test]
    fn test_coerce_string_passes_through() {
        assert_eq!(
            ParamType::String.coerce("hello world"),
            Coercion::Value(json!("hello world"))
        );
    }

    #[test]
    fn test_parse_schema_declaration_order() {
        let schema = json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "integer", "description": "first operand"},
            },
            "required": ["zeta"]
        });

        let params = parse_input_schema(Some(&schema));
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "zeta");
        assert!(params[0].required);
        assert_eq!(params[1].name, "alpha");
        assert_eq!(params[1].ty, ParamType::Integer);
        assert_eq!(params[1].description.as_deref(), Some("first operand"));
        assert!(!params[1].required);
    }

    #[test]
    fn test_parse_schema_missing_or_empty() {
        assert!(parse_input_schema(None).is_empty());
        assert!(parse_input_schema(Some(&json!({"type": "object"}))).is_empty());
        assert!(parse_input_schema(Some(&json!({"properties": {}}))).is_empty());
    }
}
