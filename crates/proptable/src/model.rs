//! Data model for declared component properties.
//!
//! These types mirror the payload a host panel receives for an inspected
//! target: a [`TypeDescriptor`] naming the component, the list of
//! [`PropertyDefinition`] records it declares, and the [`RenderLimits`] that
//! bound how much of each default value gets rendered.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifies the inspected component type.
///
/// Only the naming fields are carried; everything else about the type is
/// opaque to the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    /// Explicit display name, preferred when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Intrinsic type name, used when no display name is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TypeDescriptor {
    /// Creates a descriptor with only an intrinsic name.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor {
            display_name: None,
            name: Some(name.into()),
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Returns the name used to qualify property exclusions.
    ///
    /// Falls back from the display name to the intrinsic name and finally to
    /// the empty string. Empty names fall through like missing ones.
    ///
    /// ```rust
    /// use proptable::TypeDescriptor;
    ///
    /// let ty = TypeDescriptor::named("Button");
    /// assert_eq!(ty.display_name(), "Button");
    ///
    /// let ty = ty.with_display_name("PrimaryButton");
    /// assert_eq!(ty.display_name(), "PrimaryButton");
    ///
    /// assert_eq!(TypeDescriptor::default().display_name(), "");
    /// ```
    pub fn display_name(&self) -> &str {
        [&self.display_name, &self.name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or("")
    }
}

/// Type descriptor of a single property.
///
/// Either a bare type name (`"string"`) or a structured descriptor such as
/// `{"name": "enum", "value": [...]}`. The table never interprets it; it is
/// handed to a [`TypeFormatter`](crate::TypeFormatter).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropType {
    /// A bare type name.
    Name(String),
    /// A structured descriptor, kept as raw JSON.
    Shape(Value),
}

impl Default for PropType {
    fn default() -> Self {
        PropType::Name(String::new())
    }
}

impl From<&str> for PropType {
    fn from(name: &str) -> Self {
        PropType::Name(name.to_string())
    }
}

impl From<String> for PropType {
    fn from(name: String) -> Self {
        PropType::Name(name)
    }
}

impl From<Value> for PropType {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => PropType::Name(name),
            other => PropType::Shape(other),
        }
    }
}

/// One declared property of the inspected type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Property identifier, unique within one definition set.
    pub property: String,
    /// Declared type, opaque to the table.
    #[serde(default)]
    pub prop_type: PropType,
    /// Whether the property must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Free-form description, possibly spanning several lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value. `None` means no default was supplied; a JSON `null`
    /// is a present value and stays `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`.
///
/// Plain `Option<Value>` would collapse `null` into `None`, conflating a
/// null default with a missing one. Only an absent key yields `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PropertyDefinition {
    /// Creates a definition with the given name and type.
    pub fn new(property: impl Into<String>, prop_type: impl Into<PropType>) -> Self {
        PropertyDefinition {
            property: property.into(),
            prop_type: prop_type.into(),
            ..Default::default()
        }
    }

    /// Marks the property as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Bounds applied when formatting a default value.
///
/// Passed through untouched to the [`ValueFormatter`](crate::ValueFormatter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderLimits {
    /// Maximum number of object keys shown.
    pub max_prop_object_keys: usize,
    /// Maximum number of array items shown.
    pub max_prop_array_length: usize,
    /// Maximum number of characters shown for a string.
    pub max_prop_string_length: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        RenderLimits {
            max_prop_object_keys: 3,
            max_prop_array_length: 3,
            max_prop_string_length: 50,
        }
    }
}

impl RenderLimits {
    /// Creates limits from explicit bounds.
    pub fn new(object_keys: usize, array_length: usize, string_length: usize) -> Self {
        RenderLimits {
            max_prop_object_keys: object_keys,
            max_prop_array_length: array_length,
            max_prop_string_length: string_length,
        }
    }
}
