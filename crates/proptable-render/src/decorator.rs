//! Bordered tables with multi-line cells.
//!
//! A [`Table`] owns resolved column widths plus decoration settings and turns
//! rows of cells into text. Each cell is a list of lines; a row is as tall as
//! its tallest cell.
//!
//! # Example
//!
//! ```rust
//! use proptable_render::{BorderStyle, Table};
//!
//! let table = Table::new(vec![5, 3])
//!     .border(BorderStyle::Ascii)
//!     .header(["name", "req"]);
//!
//! let rows = vec![vec![vec!["label"], vec!["yes"]]];
//! assert_eq!(
//!     table.render(&rows),
//!     "+-------+-----+\n\
//!      | name  | req |\n\
//!      +-------+-----+\n\
//!      | label | yes |\n\
//!      +-------+-----+"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::util::{pad_right, truncate_end};

/// Marker used when a cell line is cut to fit its column.
pub const CELL_ELLIPSIS: &str = "…";

/// Gap between columns when no border is drawn.
const PLAIN_SEPARATOR: &str = "  ";

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders; columns separated by two spaces.
    #[default]
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    fn chars(&self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        };
        Some(chars)
    }

    /// Columns consumed by decoration for a table of `columns` columns.
    ///
    /// Bordered tables pad each cell with one space per side and draw a
    /// vertical before, between and after cells.
    pub fn overhead(&self, columns: usize) -> usize {
        if columns == 0 {
            return 0;
        }
        match self {
            BorderStyle::None => PLAIN_SEPARATOR.len() * (columns - 1),
            _ => 3 * columns + 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// A decorated table with fixed column widths.
#[derive(Clone, Debug)]
pub struct Table {
    widths: Vec<usize>,
    headers: Option<Vec<String>>,
    border: BorderStyle,
    row_separator: bool,
}

impl Table {
    /// Creates a borderless table with the given column widths.
    pub fn new(widths: Vec<usize>) -> Self {
        Table {
            widths,
            headers: None,
            border: BorderStyle::None,
            row_separator: false,
        }
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn header<S: Into<String>, I: IntoIterator<Item = S>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Enables separator lines between data rows.
    pub fn row_separator(mut self, enable: bool) -> Self {
        self.row_separator = enable;
        self
    }

    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Formats one logical row into its physical lines.
    ///
    /// Missing cells and short cells are padded with blank lines.
    pub fn row<S: AsRef<str>>(&self, cells: &[Vec<S>]) -> Vec<String> {
        let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        (0..height)
            .map(|line| {
                let parts: Vec<String> = self
                    .widths
                    .iter()
                    .enumerate()
                    .map(|(col, &width)| {
                        let text = cells
                            .get(col)
                            .and_then(|cell| cell.get(line))
                            .map(AsRef::as_ref)
                            .unwrap_or("");
                        pad_right(&truncate_end(text, width, CELL_ELLIPSIS), width)
                    })
                    .collect();
                self.join_cells(&parts)
            })
            .collect()
    }

    /// Formats the header row, or nothing when no headers are set.
    pub fn header_row(&self) -> Vec<String> {
        match &self.headers {
            Some(headers) => {
                let cells: Vec<Vec<&str>> = headers.iter().map(|h| vec![h.as_str()]).collect();
                self.row(cells.as_slice())
            }
            None => Vec::new(),
        }
    }

    pub fn top_border(&self) -> String {
        self.horizontal_line(LineType::Top)
    }

    pub fn separator_row(&self) -> String {
        self.horizontal_line(LineType::Middle)
    }

    pub fn bottom_border(&self) -> String {
        self.horizontal_line(LineType::Bottom)
    }

    /// Renders the complete table: borders, header and data rows.
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<Vec<S>>]) -> String {
        let mut output = Vec::new();
        let push_line = |output: &mut Vec<String>, line: String| {
            if !line.is_empty() {
                output.push(line);
            }
        };

        push_line(&mut output, self.top_border());

        let header = self.header_row();
        if !header.is_empty() {
            output.extend(header);
            push_line(&mut output, self.separator_row());
        }

        for (i, row) in rows.iter().enumerate() {
            if i > 0 && self.row_separator {
                push_line(&mut output, self.separator_row());
            }
            output.extend(self.row(row));
        }

        push_line(&mut output, self.bottom_border());
        output.join("\n")
    }

    fn join_cells(&self, parts: &[String]) -> String {
        match self.border.chars() {
            None => parts.join(PLAIN_SEPARATOR).trim_end().to_string(),
            Some(chars) => {
                let inner = format!(" {} ", chars.vertical);
                format!(
                    "{} {} {}",
                    chars.vertical,
                    parts.join(&inner),
                    chars.vertical
                )
            }
        }
    }

    fn horizontal_line(&self, line_type: LineType) -> String {
        let Some(chars) = self.border.chars() else {
            return String::new();
        };

        let (left, joint, right) = match line_type {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(chars.horizontal, width + 2));
        }
        line.push(right);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;

    #[test]
    fn overhead_matches_rendered_width() {
        for border in [BorderStyle::None, BorderStyle::Ascii, BorderStyle::Double] {
            let table = Table::new(vec![4, 6, 2]).border(border);
            let line = &table.row(&[vec!["abcd"], vec!["abcdef"], vec!["ab"]])[0];
            assert_eq!(display_width(line), 12 + border.overhead(3), "{:?}", border);
        }
    }

    #[test]
    fn plain_rows_trim_trailing_space() {
        let table = Table::new(vec![3, 5]);
        assert_eq!(table.row(&[vec!["a"], vec!["b"]]), vec!["a    b"]);
    }

    #[test]
    fn multi_line_cells_grow_the_row() {
        let table = Table::new(vec![3, 3]).border(BorderStyle::Ascii);
        let lines = table.row(&[vec!["a"], vec!["x", "y"]]);
        assert_eq!(lines, vec!["| a   | x   |", "|     | y   |"]);
    }

    #[test]
    fn long_cells_are_truncated() {
        let table = Table::new(vec![4]).border(BorderStyle::Ascii);
        assert_eq!(table.row(&[vec!["abcdefgh"]]), vec!["| abc… |"]);
    }

    #[test]
    fn light_borders_place_joints() {
        let table = Table::new(vec![1, 2]).border(BorderStyle::Light);
        assert_eq!(table.top_border(), "┌───┬────┐");
        assert_eq!(table.separator_row(), "├───┼────┤");
        assert_eq!(table.bottom_border(), "└───┴────┘");
    }

    #[test]
    fn borderless_table_has_no_rules() {
        let table = Table::new(vec![3]).header(["h"]);
        assert_eq!(table.top_border(), "");
        assert_eq!(table.render(&[vec![vec!["a"]]]), "h\na");
    }

    #[test]
    fn row_separators_between_rows_only() {
        let table = Table::new(vec![1])
            .border(BorderStyle::Ascii)
            .row_separator(true);
        let out = table.render(&[vec![vec!["a"]], vec![vec!["b"]]]);
        assert_eq!(out, "+---+\n| a |\n+---+\n| b |\n+---+");
    }

    #[test]
    fn border_style_parses_lowercase() {
        let style: BorderStyle = serde_json::from_str("\"heavy\"").unwrap();
        assert_eq!(style, BorderStyle::Heavy);
    }
}
