//! Text rendering of props tables.
//!
//! [`render_table`] paints a [`TableResult`]: nothing for `Empty`, the
//! configured notice for `NoProperties`, and a five-column table otherwise.
//! Multi-line descriptions stack one segment per physical line inside their
//! cell, and descriptions wider than their column are word-wrapped, keeping
//! each segment's leading space and its inner spacing. Other overlong cells
//! are truncated with `…`.

use proptable::{
    build, PanelView, PrettyType, PrettyValue, PropertyDefinition, PropsPanel, RenderRow,
    Segments, TableResult, TypeDescriptor, COLUMN_HEADERS,
};

use crate::config::PanelConfig;
use crate::decorator::Table;
use crate::resolve::{natural_widths, resolve_widths};
use crate::util::wrap;

const DESCRIPTION_COLUMN: usize = 4;

/// Columns in the order they give up width: description, default, type,
/// property, required.
const SHRINK_ORDER: [usize; 5] = [DESCRIPTION_COLUMN, 3, 1, 0, 2];

/// Renders a table result as text.
///
/// ```rust
/// use proptable::TableResult;
/// use proptable_render::{render_table, PanelConfig};
///
/// let config = PanelConfig::default();
/// assert_eq!(render_table(&TableResult::Empty, &config), "");
/// assert_eq!(render_table(&TableResult::NoProperties, &config), "No propTypes defined!");
/// ```
pub fn render_table(result: &TableResult, config: &PanelConfig) -> String {
    match result {
        TableResult::Empty => String::new(),
        TableResult::NoProperties => config.notice.clone(),
        TableResult::Rows(rows) => render_rows(rows, config),
    }
}

/// Renders whatever a props panel currently shows.
pub fn render_view(view: &PanelView, config: &PanelConfig) -> String {
    match view {
        PanelView::Hidden => String::new(),
        PanelView::Legacy(text) => text.clone(),
        PanelView::Table(result) => render_table(result, config),
    }
}

/// Renders a panel's current view with the default formatters.
///
/// Limits missing from the panel's payload come from `config.limits`.
pub fn render_panel(panel: &PropsPanel, config: &PanelConfig) -> String {
    render_view(
        &panel.view_or(&config.limits, &PrettyType, &PrettyValue),
        config,
    )
}

/// Builds and renders a props table with the default formatters and the
/// configured limits.
pub fn render_props<S: AsRef<str>>(
    ty: Option<&TypeDescriptor>,
    definitions: &[PropertyDefinition],
    exclusions: &[S],
    config: &PanelConfig,
) -> String {
    let result = build(
        ty,
        definitions,
        exclusions,
        &config.limits,
        &PrettyType,
        &PrettyValue,
    );
    render_table(&result, config)
}

fn render_rows(rows: &[RenderRow], config: &PanelConfig) -> String {
    let cells: Vec<Vec<Vec<String>>> = rows.iter().map(row_cells).collect();

    let natural = natural_widths(&COLUMN_HEADERS, cells.as_slice());
    let resolved = resolve_widths(&natural, config.width, config.border, &SHRINK_ORDER);
    tracing::trace!(widths = ?resolved.widths, "resolved props table widths");

    let description_width = resolved.get(DESCRIPTION_COLUMN).unwrap_or(0);
    let cells: Vec<Vec<Vec<String>>> = cells
        .into_iter()
        .map(|mut row| {
            if let Some(description) = row.get_mut(DESCRIPTION_COLUMN) {
                *description = description
                    .iter()
                    .flat_map(|line| wrap(line, description_width))
                    .collect();
            }
            row
        })
        .collect();

    Table::new(resolved.widths)
        .border(config.border)
        .header(COLUMN_HEADERS)
        .render(cells.as_slice())
}

fn row_cells(row: &RenderRow) -> Vec<Vec<String>> {
    vec![
        vec![row.property.clone()],
        vec![row.formatted_type.clone()],
        vec![row.required_label.clone()],
        vec![row.formatted_default.clone()],
        description_lines(&row.formatted_description),
    ]
}

/// Display lines of a description cell.
pub fn description_lines(segments: &Segments) -> Vec<String> {
    match segments {
        Segments::Absent => Vec::new(),
        Segments::Text(text) => vec![text.clone()],
        Segments::Lines(lines) => lines.iter().map(|l| l.display_text()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::BorderStyle;
    use crate::util::display_width;
    use proptable::segment;

    fn rows() -> Vec<PropertyDefinition> {
        vec![
            PropertyDefinition::new("label", "string")
                .required(true)
                .description("line1\nline2"),
            PropertyDefinition::new("size", "string").default_value("md"),
        ]
    }

    #[test]
    fn description_lines_keep_leading_space() {
        assert!(description_lines(&segment(None)).is_empty());
        assert_eq!(description_lines(&segment(Some("one"))), vec!["one"]);
        assert_eq!(
            description_lines(&segment(Some("a\nb"))),
            vec![" a", " b"]
        );
    }

    #[test]
    fn renders_ascii_table() {
        let config = PanelConfig::default().border(BorderStyle::Ascii);
        let out = render_props(Some(&TypeDescriptor::named("Button")), &rows(), &[] as &[&str], &config);
        let expected = "\
+----------+----------+----------+---------+-------------+
| property | propType | required | default | description |
+----------+----------+----------+---------+-------------+
| label    | string   | yes      | -       |  line1      |
|          |          |          |         |  line2      |
| size     | string   | -        | \"md\"    |             |
+----------+----------+----------+---------+-------------+";
        assert_eq!(out, expected);
    }

    #[test]
    fn wrapped_segments_keep_leading_space() {
        let config = PanelConfig::default().border(BorderStyle::Ascii).width(60);
        let defs = vec![PropertyDefinition::new("label", "string")
            .description("short\nthis second line is definitely long enough to wrap around")];
        let out = render_props(Some(&TypeDescriptor::named("Button")), &defs, &[] as &[&str], &config);

        assert!(out.contains("|  short"), "{}", out);
        assert!(out.contains("|  this second"), "{}", out);
        assert!(out.lines().all(|l| display_width(l) <= 60));
    }

    #[test]
    fn renders_plain_table() {
        let config = PanelConfig::default().border(BorderStyle::None);
        let out = render_props(Some(&TypeDescriptor::named("Button")), &rows(), &["label"], &config);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("property  propType  required  default"));
        assert!(lines[1].starts_with("size      string    -         \"md\""));
    }

    #[test]
    fn notice_and_empty() {
        let config = PanelConfig::default().notice("nothing here");
        let ty = TypeDescriptor::named("Button");
        assert_eq!(render_props(Some(&ty), &rows(), &["label", "size"], &config), "nothing here");
        assert_eq!(render_props(None, &rows(), &[] as &[&str], &config), "");
    }

    #[test]
    fn views_render() {
        let config = PanelConfig::default();
        assert_eq!(render_view(&PanelView::Hidden, &config), "");
        assert_eq!(render_view(&PanelView::Legacy("docs".into()), &config), "docs");
        assert_eq!(
            render_view(&PanelView::Table(TableResult::NoProperties), &config),
            "No propTypes defined!"
        );
    }
}
