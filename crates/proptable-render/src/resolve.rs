//! Column width resolution for the props table.
//!
//! Columns start at their natural width (widest header or cell line). When
//! the total exceeds the available space, columns give up width in a fixed
//! priority order, description first, never dropping below a minimum.

use crate::decorator::BorderStyle;
use crate::util::display_width;

/// Narrowest a column is shrunk to, unless its content is already narrower.
pub const MIN_COLUMN_WIDTH: usize = 8;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width of all columns, without decorations.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Natural width of each column: the widest line among header and cells.
pub fn natural_widths<H, S>(headers: &[H], rows: &[Vec<Vec<S>>]) -> Vec<usize>
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h.as_ref())).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            for line in cell {
                widths[i] = widths[i].max(display_width(line.as_ref()));
            }
        }
    }
    widths
}

/// Fits natural widths into `total_width`.
///
/// `shrink_order` lists column indices in the order they give up space.
/// Columns missing from it keep their natural width. If the table still does
/// not fit after every listed column reached its minimum, it overflows.
pub fn resolve_widths(
    natural: &[usize],
    total_width: usize,
    border: BorderStyle,
    shrink_order: &[usize],
) -> ResolvedWidths {
    let mut widths = natural.to_vec();
    let available = total_width.saturating_sub(border.overhead(widths.len()));
    let mut excess = widths.iter().sum::<usize>().saturating_sub(available);

    for &index in shrink_order {
        if excess == 0 {
            break;
        }
        let Some(width) = widths.get_mut(index) else {
            continue;
        };
        let floor = (*width).min(MIN_COLUMN_WIDTH);
        let take = (*width - floor).min(excess);
        *width -= take;
        excess -= take;
    }

    ResolvedWidths { widths }
}
