//! # Proptable - Props tables for component inspectors
//!
//! `proptable` derives the props table an inspection panel shows for a
//! component: one row per declared property with its type, whether it is
//! required, its default value and its description.
//!
//! ## Core Concepts
//!
//! - [`PropertyDefinition`]: one declared property
//! - [`TypeDescriptor`]: the inspected type, named for qualified exclusions
//! - [`RenderLimits`]: bounds on how much of a default value is rendered
//! - [`filter_rows`]: hides properties by bare or `Type.property` name
//! - [`segment`]: splits multi-line descriptions into display lines
//! - [`build`]: produces a [`TableResult`] from all of the above
//! - [`PropsPanel`]: observer state a host drives on target changes
//!
//! ## Quick Start
//!
//! ```rust
//! use proptable::{PrettyType, PrettyValue, PropsPayload, TableResult};
//!
//! let payload = PropsPayload::from_json(r#"{
//!     "type": {"displayName": "Button"},
//!     "propDefinitions": [
//!         {"property": "label", "propType": "string", "required": true},
//!         {"property": "size", "propType": "string", "defaultValue": "small"},
//!         {"property": "onClick", "propType": "func"}
//!     ],
//!     "excludedPropTypes": ["Button.onClick"]
//! }"#).unwrap();
//!
//! let table = payload.build_table(&PrettyType, &PrettyValue);
//! let rows = table.rows();
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].required_label, "yes");
//! assert_eq!(rows[1].formatted_default, "\"small\"");
//! ```
//!
//! ## Table Outcomes
//!
//! | Situation | Result |
//! |-----------|--------|
//! | No inspected type | [`TableResult::Empty`] |
//! | Type with no visible properties | [`TableResult::NoProperties`] |
//! | Otherwise | [`TableResult::Rows`], in declaration order |

mod error;
mod filter;
mod format;
mod model;
mod panel;
mod payload;
mod segment;
mod table;

pub use error::{PropTableError, Result};
pub use filter::{filter_rows, is_excluded};
pub use format::{PrettyType, PrettyValue, TypeFormatter, ValueFormatter, ELLIPSIS};
pub use model::{PropType, PropertyDefinition, RenderLimits, TypeDescriptor};
pub use panel::{PanelView, PropsPanel};
pub use payload::PropsPayload;
pub use segment::{segment, LineSegment, Segments};
pub use table::{
    build, RenderRow, TableResult, COLUMN_HEADERS, NO_PROPERTIES_NOTICE, PLACEHOLDER,
    REQUIRED_LABEL,
};
