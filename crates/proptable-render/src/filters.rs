//! MiniJinja support for custom props table layouts.
//!
//! ## Filters
//!
//! - `multiline` - splits text on line breaks and rejoins the display lines
//!   with `\n`, each later line keeping its leading space
//!
//! ## Rendering With a Template
//!
//! [`render_with_template`] exposes a [`TableResult`] to a template as:
//!
//! | Variable | Content |
//! |----------|---------|
//! | `kind` | `"empty"`, `"no_properties"` or `"rows"` |
//! | `notice` | The configured empty-state notice |
//! | `headers` | The five column headers |
//! | `rows` | List of `{property, type, required, default, description}`, where `description` is a list of lines |
//!
//! ```rust
//! use proptable::{build, PrettyType, PrettyValue, PropertyDefinition, RenderLimits, TypeDescriptor};
//! use proptable_render::{render_with_template, PanelConfig};
//!
//! let ty = TypeDescriptor::named("Button");
//! let defs = vec![PropertyDefinition::new("label", "string").required(true)];
//! let none: [&str; 0] = [];
//! let result = build(Some(&ty), &defs, &none, &RenderLimits::default(), &PrettyType, &PrettyValue);
//!
//! let out = render_with_template(
//!     "{% for row in rows %}{{ row.property }}: {{ row.type }} ({{ row.required }}){% endfor %}",
//!     &result,
//!     &PanelConfig::default(),
//! ).unwrap();
//! assert_eq!(out, "label: string (yes)");
//! ```

use minijinja::{context, Environment, Value};
use proptable::{segment, TableResult, COLUMN_HEADERS};
use serde::Serialize;

use crate::config::PanelConfig;
use crate::error::Result;
use crate::render::description_lines;

/// Registers the props filters on a MiniJinja environment.
pub fn register_prop_filters(env: &mut Environment<'_>) {
    env.add_filter("multiline", multiline);
}

fn multiline(value: Value) -> Value {
    if value.is_undefined() || value.is_none() {
        return value;
    }
    let text = match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    };
    Value::from(description_lines(&segment(Some(text.as_str()))).join("\n"))
}

#[derive(Serialize)]
struct TemplateRow<'a> {
    property: &'a str,
    #[serde(rename = "type")]
    ty: &'a str,
    required: &'a str,
    default: &'a str,
    description: Vec<String>,
}

/// Renders a table result through a user-supplied MiniJinja template.
pub fn render_with_template(
    template: &str,
    result: &TableResult,
    config: &PanelConfig,
) -> Result<String> {
    let mut env = Environment::new();
    register_prop_filters(&mut env);

    let kind = match result {
        TableResult::Empty => "empty",
        TableResult::NoProperties => "no_properties",
        TableResult::Rows(_) => "rows",
    };
    let rows: Vec<TemplateRow<'_>> = result
        .rows()
        .iter()
        .map(|row| TemplateRow {
            property: &row.property,
            ty: &row.formatted_type,
            required: &row.required_label,
            default: &row.formatted_default,
            description: description_lines(&row.formatted_description),
        })
        .collect();

    let rendered = env.render_str(
        template,
        context! {
            kind => kind,
            notice => &config.notice,
            headers => COLUMN_HEADERS,
            rows => Value::from_serialize(&rows),
        },
    )?;
    Ok(rendered)
}
