//! Props table derivation.
//!
//! [`build`] turns an inspected type and its property definitions into a
//! [`TableResult`]: nothing at all when there is no type, a "no properties"
//! notice when filtering leaves no rows, or the ordered display rows.
//!
//! # Example
//!
//! ```rust
//! use proptable::{build, PrettyType, PrettyValue, PropertyDefinition, RenderLimits,
//!     Segments, TableResult, TypeDescriptor};
//!
//! let ty = TypeDescriptor::named("Button");
//! let rows = vec![
//!     PropertyDefinition::new("label", "string")
//!         .required(true)
//!         .description("line1\nline2"),
//!     PropertyDefinition::new("onClick", "func"),
//! ];
//!
//! let result = build(
//!     Some(&ty),
//!     &rows,
//!     &["Button.onClick"],
//!     &RenderLimits::default(),
//!     &PrettyType,
//!     &PrettyValue,
//! );
//!
//! let TableResult::Rows(rows) = result else { panic!() };
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].property, "label");
//! assert_eq!(rows[0].required_label, "yes");
//! assert_eq!(rows[0].formatted_default, "-");
//! assert!(matches!(rows[0].formatted_description, Segments::Lines(_)));
//! ```

use serde::Serialize;

use crate::filter::filter_rows;
use crate::format::{TypeFormatter, ValueFormatter};
use crate::model::{PropertyDefinition, RenderLimits, TypeDescriptor};
use crate::segment::{segment, Segments};

/// Placeholder for a missing default or a non-required flag.
pub const PLACEHOLDER: &str = "-";

/// Label for required properties.
pub const REQUIRED_LABEL: &str = "yes";

/// Notice shown when a type has no visible properties.
pub const NO_PROPERTIES_NOTICE: &str = "No propTypes defined!";

/// Column headers, in display order.
pub const COLUMN_HEADERS: [&str; 5] = ["property", "propType", "required", "default", "description"];

/// Outcome of building a props table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum TableResult {
    /// No type is being inspected; render nothing.
    Empty,
    /// A type is inspected but none of its properties are visible.
    NoProperties,
    /// Visible properties, in declaration order.
    Rows(Vec<RenderRow>),
}

impl TableResult {
    /// Returns the rows, if any.
    pub fn rows(&self) -> &[RenderRow] {
        match self {
            TableResult::Rows(rows) => rows,
            TableResult::Empty | TableResult::NoProperties => &[],
        }
    }

    /// True only for [`TableResult::Empty`], where nothing is rendered.
    ///
    /// `NoProperties` is not empty in this sense: it has no rows but still
    /// renders the notice.
    pub fn is_empty(&self) -> bool {
        matches!(self, TableResult::Empty)
    }
}

/// One display row of the props table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    pub property: String,
    pub formatted_type: String,
    /// `"yes"` or `"-"`.
    pub required_label: String,
    /// Formatted default value, or `"-"` when none was supplied.
    pub formatted_default: String,
    pub formatted_description: Segments,
}

impl RenderRow {
    /// Builds a display row from one definition.
    pub fn from_definition<T, V>(
        definition: &PropertyDefinition,
        limits: &RenderLimits,
        types: &T,
        values: &V,
    ) -> Self
    where
        T: TypeFormatter + ?Sized,
        V: ValueFormatter + ?Sized,
    {
        RenderRow {
            property: definition.property.clone(),
            formatted_type: types.format_type(&definition.prop_type),
            required_label: if definition.required {
                REQUIRED_LABEL
            } else {
                PLACEHOLDER
            }
            .to_string(),
            formatted_default: match &definition.default_value {
                Some(value) => values.format_value(value, limits),
                None => PLACEHOLDER.to_string(),
            },
            formatted_description: segment(definition.description.as_deref()),
        }
    }
}

/// Builds the props table for an inspected type.
///
/// Rows keep their declaration order; `exclusions` hides rows by bare or
/// `Type.property` name (see [`filter_rows`]).
pub fn build<S, T, V>(
    ty: Option<&TypeDescriptor>,
    definitions: &[PropertyDefinition],
    exclusions: &[S],
    limits: &RenderLimits,
    types: &T,
    values: &V,
) -> TableResult
where
    S: AsRef<str>,
    T: TypeFormatter + ?Sized,
    V: ValueFormatter + ?Sized,
{
    let Some(ty) = ty else {
        tracing::debug!("no inspected type, props table is empty");
        return TableResult::Empty;
    };

    let included = filter_rows(definitions, exclusions, ty);
    tracing::debug!(
        type_name = ty.display_name(),
        declared = definitions.len(),
        visible = included.len(),
        "building props table"
    );

    if included.is_empty() {
        return TableResult::NoProperties;
    }

    TableResult::Rows(
        included
            .into_iter()
            .map(|definition| RenderRow::from_definition(definition, limits, types, values))
            .collect(),
    )
}
