//! ANSI-aware text measurement, truncation, padding and wrapping for cells.
//!
//! Escape codes are preserved in output but never count toward width.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use proptable_render::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit `max_width`, appending `ellipsis`.
///
/// ```rust
/// use proptable_render::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_display_width(ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Pads a string on the right to reach `width`. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Word-wraps plain text to lines of at most `width` columns.
///
/// Leading indentation stays on the first line and spacing between words on
/// the same line is kept as written. Spaces at a break are dropped. Words
/// longer than the width are hard-split. An empty input yields a single
/// empty line.
///
/// ```rust
/// use proptable_render::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("abcdef", 4), vec!["abcd", "ef"]);
/// assert_eq!(wrap(" indented text here", 10), vec![" indented", "text here"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || measure_text_width(text) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut has_word = false;
    let mut gap = 0;

    for piece in text.split(' ') {
        if piece.is_empty() {
            gap += 1;
            continue;
        }
        let mut word = piece.to_string();
        let mut word_width = measure_text_width(&word);

        let spaces = if has_word {
            gap + 1
        } else {
            // indentation that would fill the whole line is dropped
            if gap < width {
                current = " ".repeat(gap);
                current_width = gap;
            }
            0
        };
        gap = 0;

        if current_width + spaces + word_width <= width {
            current.push_str(&" ".repeat(spaces));
            current.push_str(&word);
            current_width += spaces + word_width;
            has_word = true;
            continue;
        }
        if has_word {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        while current_width + word_width > width {
            let mut head = truncate_to_display_width(&word, width - current_width);
            if head.is_empty() {
                // a single char wider than the column still has to go somewhere
                head = word.chars().take(1).collect();
            }
            word = word[head.len()..].to_string();
            word_width = measure_text_width(&word);
            current.push_str(&head);
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push_str(&word);
        current_width += word_width;
        has_word = true;
    }

    if has_word || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Keeps characters from the start while they fit `max_width`.
fn truncate_to_display_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }
        if in_escape {
            result.push(c);
            // CSI sequences end with a letter or '~'
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_columns() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("café"), 4);
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
    }

    #[test]
    fn truncate_end_tiny_width() {
        assert_eq!(truncate_end("hello", 1, "…"), "…");
        assert_eq!(truncate_end("hello", 0, "…"), "");
    }

    #[test]
    fn truncate_end_cjk() {
        assert_eq!(truncate_end("日本語テスト", 7, "…"), "日本語…");
    }

    #[test]
    fn truncate_end_keeps_ansi() {
        let styled = "\x1b[31mhello world\x1b[0m";
        let result = truncate_end(styled, 8, "…");
        assert_eq!(display_width(&result), 8);
        assert!(result.starts_with("\x1b[31m"));
    }

    #[test]
    fn pad_right_fills_to_width() {
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_right("hello", 3), "hello");
        assert_eq!(display_width(&pad_right("日本", 6)), 6);
    }

    #[test]
    fn wrap_fits_unchanged() {
        assert_eq!(wrap("short", 10), vec!["short"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wrap_breaks_on_spaces() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("a verylongword b", 5), vec!["a", "veryl", "ongwo", "rd b"]);
    }

    #[test]
    fn wrap_keeps_leading_indent() {
        assert_eq!(
            wrap(" this second line is long", 12),
            vec![" this second", "line is long"]
        );
    }

    #[test]
    fn wrap_keeps_spacing_within_a_line() {
        assert_eq!(wrap("a  b   c dddddd", 6), vec!["a  b", "c", "dddddd"]);
    }

    #[test]
    fn wrap_splits_long_word_after_indent() {
        assert_eq!(wrap("  abcdefgh", 5), vec!["  abc", "defgh"]);
    }

    #[test]
    fn wrap_lines_never_exceed_width() {
        for line in wrap("callback fired when the button is clicked by the user", 12) {
            assert!(display_width(&line) <= 12, "{:?} too wide", line);
        }
    }
}
