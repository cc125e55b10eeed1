//! # Proptable Render - Text output for props tables
//!
//! `proptable-render` paints the [`proptable::TableResult`] of an inspected
//! component as terminal text: a bordered five-column table, the empty-state
//! notice, or nothing.
//!
//! ## Core Concepts
//!
//! - [`PanelConfig`]: limits, border, width and notice, loadable from YAML
//! - [`render_table`]: text for a [`proptable::TableResult`]
//! - [`render_view`]: text for whatever a [`proptable::PropsPanel`] shows
//! - [`Table`] / [`BorderStyle`]: the bordered, multi-line cell layout
//! - [`render_with_template`]: custom layouts through MiniJinja
//!
//! ## Quick Start
//!
//! ```rust
//! use proptable::{PropertyDefinition, TypeDescriptor};
//! use proptable_render::{render_props, BorderStyle, PanelConfig};
//!
//! let config = PanelConfig::default().border(BorderStyle::None);
//! let defs = vec![PropertyDefinition::new("label", "string").required(true)];
//! let none: [&str; 0] = [];
//!
//! let out = render_props(Some(&TypeDescriptor::named("Button")), &defs, &none, &config);
//! assert!(out.starts_with("property"));
//! assert!(out.lines().nth(1).unwrap().starts_with("label"));
//! ```

mod config;
mod decorator;
mod error;
pub mod filters;
mod render;
mod resolve;
mod util;

pub use config::{PanelConfig, DEFAULT_WIDTH};
pub use decorator::{BorderStyle, Table, CELL_ELLIPSIS};
pub use error::{RenderError, Result};
pub use filters::{register_prop_filters, render_with_template};
pub use render::{description_lines, render_panel, render_props, render_table, render_view};
pub use resolve::{natural_widths, resolve_widths, ResolvedWidths, MIN_COLUMN_WIDTH};
pub use util::{display_width, pad_right, truncate_end, wrap};
