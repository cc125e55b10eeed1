//! The props payload delivered by the inspected target.
//!
//! A host panel receives one [`PropsPayload`] per inspected target, usually as
//! camelCase JSON:
//!
//! ```json
//! {
//!   "type": { "displayName": "Button" },
//!   "propDefinitions": [
//!     { "property": "label", "propType": "string", "required": true }
//!   ],
//!   "excludedPropTypes": ["Button.onClick"],
//!   "maxPropObjectKeys": 3,
//!   "maxPropArrayLength": 3,
//!   "maxPropStringLength": 50
//! }
//! ```
//!
//! Missing fields take their defaults: no type, no definitions and no
//! exclusions. A missing `maxProp*` key falls back to the limits the host
//! passes to [`PropsPayload::limits_or`], or to [`RenderLimits::default`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{TypeFormatter, ValueFormatter};
use crate::model::{PropertyDefinition, RenderLimits, TypeDescriptor};
use crate::table::{build, TableResult};

/// Everything needed to build one props table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropsPayload {
    /// The inspected type, if any.
    #[serde(rename = "type")]
    pub ty: Option<TypeDescriptor>,
    pub prop_definitions: Vec<PropertyDefinition>,
    pub excluded_prop_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prop_object_keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prop_array_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prop_string_length: Option<usize>,
}

impl PropsPayload {
    /// Creates a payload for the given type with default limits.
    pub fn new(ty: TypeDescriptor, prop_definitions: Vec<PropertyDefinition>) -> Self {
        PropsPayload {
            ty: Some(ty),
            prop_definitions,
            ..Default::default()
        }
    }

    /// Decodes a payload from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a payload from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Replaces the exclusion list.
    pub fn exclude<S: Into<String>, I: IntoIterator<Item = S>>(mut self, exclusions: I) -> Self {
        self.excluded_prop_types = exclusions.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the render limits.
    pub fn with_limits(mut self, limits: RenderLimits) -> Self {
        self.max_prop_object_keys = Some(limits.max_prop_object_keys);
        self.max_prop_array_length = Some(limits.max_prop_array_length);
        self.max_prop_string_length = Some(limits.max_prop_string_length);
        self
    }

    /// The limits applied to default values, with missing keys taken from
    /// [`RenderLimits::default`].
    pub fn limits(&self) -> RenderLimits {
        self.limits_or(&RenderLimits::default())
    }

    /// The limits applied to default values, with missing keys taken from
    /// `fallback`.
    pub fn limits_or(&self, fallback: &RenderLimits) -> RenderLimits {
        RenderLimits::new(
            self.max_prop_object_keys.unwrap_or(fallback.max_prop_object_keys),
            self.max_prop_array_length.unwrap_or(fallback.max_prop_array_length),
            self.max_prop_string_length.unwrap_or(fallback.max_prop_string_length),
        )
    }

    /// Builds the props table described by this payload.
    pub fn build_table<T, V>(&self, types: &T, values: &V) -> TableResult
    where
        T: TypeFormatter + ?Sized,
        V: ValueFormatter + ?Sized,
    {
        self.build_table_or(&RenderLimits::default(), types, values)
    }

    /// Builds the props table, filling missing limits from `fallback`.
    pub fn build_table_or<T, V>(
        &self,
        fallback: &RenderLimits,
        types: &T,
        values: &V,
    ) -> TableResult
    where
        T: TypeFormatter + ?Sized,
        V: ValueFormatter + ?Sized,
    {
        build(
            self.ty.as_ref(),
            &self.prop_definitions,
            self.excluded_prop_types.as_slice(),
            &self.limits_or(fallback),
            types,
            values,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropTableError;
    use crate::format::{PrettyType, PrettyValue};
    use serde_json::json;

    #[test]
    fn decodes_full_payload() {
        let payload = PropsPayload::from_value(json!({
            "type": {"displayName": "Button", "name": "ButtonImpl"},
            "propDefinitions": [
                {"property": "label", "propType": "string", "required": true},
                {"property": "size", "propType": {"name": "enum"}, "defaultValue": "small"}
            ],
            "excludedPropTypes": ["Button.size"],
            "maxPropObjectKeys": 1,
            "maxPropArrayLength": 2,
            "maxPropStringLength": 3
        }))
        .unwrap();

        assert_eq!(payload.ty.as_ref().unwrap().display_name(), "Button");
        assert_eq!(payload.prop_definitions.len(), 2);
        assert_eq!(payload.excluded_prop_types, vec!["Button.size"]);
        assert_eq!(payload.limits(), RenderLimits::new(1, 2, 3));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let payload = PropsPayload::from_json("{}").unwrap();
        assert_eq!(payload, PropsPayload::default());
        assert_eq!(payload.limits(), RenderLimits::default());
    }

    #[test]
    fn null_type_is_absent() {
        let payload = PropsPayload::from_json(r#"{"type": null}"#).unwrap();
        assert!(payload.ty.is_none());
        assert_eq!(
            payload.build_table(&PrettyType, &PrettyValue),
            TableResult::Empty
        );
    }

    #[test]
    fn malformed_json_is_a_payload_error() {
        let err = PropsPayload::from_json("{not json").unwrap_err();
        assert!(matches!(err, PropTableError::Payload(_)));
        assert!(err.to_string().contains("invalid props payload"));
    }

    #[test]
    fn definition_without_property_is_rejected() {
        let err = PropsPayload::from_value(json!({"propDefinitions": [{"required": true}]}));
        assert!(err.is_err());
    }

    #[test]
    fn with_limits_overrides_defaults() {
        let payload = PropsPayload::default().with_limits(RenderLimits::new(0, 1, 2));
        assert_eq!(payload.limits(), RenderLimits::new(0, 1, 2));
        assert_eq!(payload.max_prop_array_length, Some(1));
    }

    #[test]
    fn missing_limit_keys_take_the_fallback() {
        let payload = PropsPayload::from_json(r#"{"maxPropArrayLength": 7}"#).unwrap();
        let fallback = RenderLimits::new(1, 1, 1);
        assert_eq!(payload.limits_or(&fallback), RenderLimits::new(1, 7, 1));
        assert_eq!(payload.limits(), RenderLimits::new(3, 7, 50));
    }

    #[test]
    fn build_table_or_formats_with_fallback_limits() {
        let payload = PropsPayload::from_value(json!({
            "type": {"name": "T"},
            "propDefinitions": [{"property": "a", "defaultValue": [1, 2, 3]}]
        }))
        .unwrap();

        let fallback = RenderLimits::new(1, 1, 1);
        let narrow = payload.build_table_or(&fallback, &PrettyType, &PrettyValue);
        assert_eq!(narrow.rows()[0].formatted_default, "[1, …]");

        let wide = payload.build_table(&PrettyType, &PrettyValue);
        assert_eq!(wide.rows()[0].formatted_default, "[1, 2, 3]");
    }

    #[test]
    fn build_table_applies_exclusions() {
        let payload = PropsPayload::new(
            TypeDescriptor::named("Button"),
            vec![
                PropertyDefinition::new("label", "string"),
                PropertyDefinition::new("onClick", "func"),
            ],
        )
        .exclude(["Button.onClick"]);

        let result = payload.build_table(&PrettyType, &PrettyValue);
        assert_eq!(result.rows().len(), 1);
        assert_eq!(result.rows()[0].property, "label");
    }
}
