//! Multi-line description segmentation.
//!
//! Descriptions arrive as free text. Single-line text is displayed as-is;
//! text containing line breaks (`\r\n`, `\n` or `\r`) is split into
//! [`LineSegment`]s so the rendering layer can emit one visual line each.

use serde::Serialize;

/// Result of segmenting a description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Segments {
    /// No description was supplied.
    Absent,
    /// Text that needs no line handling. Holds the empty string when the
    /// description was empty.
    Text(String),
    /// Two or more lines, in order.
    Lines(Vec<LineSegment>),
}

impl Segments {
    /// Returns true when there is nothing to display.
    pub fn is_blank(&self) -> bool {
        match self {
            Segments::Absent => true,
            Segments::Text(text) => text.is_empty(),
            Segments::Lines(_) => false,
        }
    }

    /// Returns the raw lines, without display spacing.
    ///
    /// `Absent` yields no lines and `Text` yields exactly one.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Segments::Absent => Vec::new(),
            Segments::Text(text) => vec![text.as_str()],
            Segments::Lines(lines) => lines.iter().map(|l| l.text.as_str()).collect(),
        }
    }
}

/// One line of a multi-line description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    /// Zero-based position of the line.
    pub index: usize,
    /// Line content, without separators.
    pub text: String,
}

impl LineSegment {
    /// Whether a line break precedes this segment. True for all but the first.
    pub fn breaks_before(&self) -> bool {
        self.index > 0
    }

    /// Text as displayed: a single leading space, then the content.
    pub fn display_text(&self) -> String {
        format!(" {}", self.text)
    }
}

/// Splits a description into display lines.
///
/// ```rust
/// use proptable::{segment, Segments};
///
/// assert_eq!(segment(None), Segments::Absent);
/// assert_eq!(segment(Some("one line")), Segments::Text("one line".into()));
///
/// let Segments::Lines(lines) = segment(Some("a\r\nb")) else { panic!() };
/// assert_eq!(lines.len(), 2);
/// assert!(!lines[0].breaks_before());
/// assert!(lines[1].breaks_before());
/// assert_eq!(lines[1].display_text(), " b");
/// ```
pub fn segment(input: Option<&str>) -> Segments {
    let Some(text) = input else {
        return Segments::Absent;
    };
    if text.is_empty() {
        return Segments::Text(String::new());
    }

    let parts = split_lines(text);
    if parts.len() < 2 {
        return Segments::Text(text.to_string());
    }

    Segments::Lines(
        parts
            .into_iter()
            .enumerate()
            .map(|(index, text)| LineSegment {
                index,
                text: text.to_string(),
            })
            .collect(),
    )
}

/// Splits on `\r\n`, `\n` and `\r`, keeping empty lines between separators.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                parts.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                parts.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    parts.push(&text[start..]);
    parts
}
