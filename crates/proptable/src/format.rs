//! Formatting collaborators for property types and default values.
//!
//! The table builder does not decide how a type descriptor or a default value
//! looks; it delegates to a [`TypeFormatter`] and a [`ValueFormatter`]. Both
//! traits are implemented for plain closures, and [`PrettyType`] /
//! [`PrettyValue`] provide compact single-line renderings suitable for a
//! terminal or a panel cell.

use serde_json::Value;

use crate::model::{PropType, RenderLimits};

/// Marker appended when a value is cut short.
pub const ELLIPSIS: &str = "…";

/// Renders a property's declared type.
pub trait TypeFormatter {
    fn format_type(&self, prop_type: &PropType) -> String;
}

/// Renders a property's default value within the given limits.
pub trait ValueFormatter {
    fn format_value(&self, value: &Value, limits: &RenderLimits) -> String;
}

impl<F> TypeFormatter for F
where
    F: Fn(&PropType) -> String,
{
    fn format_type(&self, prop_type: &PropType) -> String {
        self(prop_type)
    }
}

impl<F> ValueFormatter for F
where
    F: Fn(&Value, &RenderLimits) -> String,
{
    fn format_value(&self, value: &Value, limits: &RenderLimits) -> String {
        self(value, limits)
    }
}

// ============================================================================
// PrettyType
// ============================================================================

/// Single-line rendering of prop-type descriptors.
///
/// Bare names are shown as-is. Structured descriptors are read by their
/// `name` field:
///
/// | Descriptor | Output |
/// |------------|--------|
/// | `{"name": "enum", "value": [{"value": "'a'"}, {"value": "'b'"}]}` | `'a' \| 'b'` |
/// | `{"name": "union", "value": [{"name": "string"}, {"name": "number"}]}` | `string \| number` |
/// | `{"name": "arrayOf", "value": {"name": "string"}}` | `arrayOf(string)` |
/// | `{"name": "objectOf", "value": {"name": "number"}}` | `objectOf(number)` |
/// | `{"name": "instanceOf", "value": "Date"}` | `instanceOf(Date)` |
/// | `{"name": "shape", "value": {"a": {"name": "number"}}}` | `{a: number}` |
/// | `{"name": "custom", "raw": "myValidator"}` | `myValidator` |
///
/// Anything else falls back to its `name`, or to compact JSON when there is
/// no name at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyType;

impl TypeFormatter for PrettyType {
    fn format_type(&self, prop_type: &PropType) -> String {
        match prop_type {
            PropType::Name(name) => name.clone(),
            PropType::Shape(value) => describe_type(value),
        }
    }
}

fn describe_type(value: &Value) -> String {
    let object = match value {
        Value::String(name) => return name.clone(),
        Value::Object(object) => object,
        other => return other.to_string(),
    };
    let Some(name) = object.get("name").and_then(Value::as_str) else {
        return value.to_string();
    };
    let inner = object.get("value");

    match (name, inner) {
        ("enum", Some(Value::Array(options))) => options
            .iter()
            .map(|option| match option.get("value") {
                Some(Value::String(literal)) => literal.clone(),
                Some(other) => other.to_string(),
                None => describe_type(option),
            })
            .collect::<Vec<_>>()
            .join(" | "),
        ("union", Some(Value::Array(types))) => types
            .iter()
            .map(describe_type)
            .collect::<Vec<_>>()
            .join(" | "),
        ("arrayOf" | "objectOf", Some(inner)) => format!("{}({})", name, describe_type(inner)),
        ("instanceOf", Some(Value::String(class))) => format!("instanceOf({})", class),
        ("shape" | "exact", Some(Value::Object(fields))) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(key, ty)| format!("{}: {}", key, describe_type(ty)))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
        ("custom", _) => object
            .get("raw")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string(),
        _ => name.to_string(),
    }
}

// ============================================================================
// PrettyValue
// ============================================================================

/// Single-line rendering of JSON default values, bounded by [`RenderLimits`].
///
/// ```rust
/// use proptable::{PrettyValue, RenderLimits, ValueFormatter};
/// use serde_json::json;
///
/// let limits = RenderLimits::new(2, 2, 5);
/// let pretty = PrettyValue;
///
/// assert_eq!(pretty.format_value(&json!([1, 2, 3]), &limits), "[1, 2, …]");
/// assert_eq!(pretty.format_value(&json!("abcdefgh"), &limits), "\"abcde…\"");
/// assert_eq!(pretty.format_value(&json!({"a": 1}), &limits), "{a: 1}");
/// assert_eq!(pretty.format_value(&json!(null), &limits), "null");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyValue;

impl ValueFormatter for PrettyValue {
    fn format_value(&self, value: &Value, limits: &RenderLimits) -> String {
        let mut out = String::new();
        write_value(&mut out, value, limits);
        out
    }
}

fn write_value(out: &mut String, value: &Value, limits: &RenderLimits) {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => out.push_str(&value.to_string()),
        Value::String(s) => {
            out.push('"');
            out.push_str(&truncate_chars(s, limits.max_prop_string_length));
            out.push('"');
        }
        Value::Array(items) => {
            out.push('[');
            write_items(out, items.iter(), items.len(), limits.max_prop_array_length, |out, item| {
                write_value(out, item, limits)
            });
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            write_items(out, map.iter(), map.len(), limits.max_prop_object_keys, |out, (k, v)| {
                out.push_str(k);
                out.push_str(": ");
                write_value(out, v, limits);
            });
            out.push('}');
        }
    }
}

fn write_items<I, T>(
    out: &mut String,
    items: I,
    len: usize,
    max: usize,
    mut write: impl FnMut(&mut String, T),
) where
    I: Iterator<Item = T>,
{
    for (i, item) in items.take(max).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write(out, item);
    }
    if len > max {
        if max > 0 {
            out.push_str(", ");
        }
        out.push_str(ELLIPSIS);
    }
}

/// Keeps at most `max` characters, appending [`ELLIPSIS`] when cut.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte, _)) => format!("{}{}", &s[..byte], ELLIPSIS),
        None => s.to_string(),
    }
}
