//! Shared text utilities
//!
//! Display-width aware padding for terminal output and string escaping for
//! DOT identifiers.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` with spaces on the right up to `width` display columns.
///
/// Text already at or beyond `width` is returned unchanged.
///
/// # Example
/// ```
/// use phalanx_diagrams::core::pad_right;
///
/// assert_eq!(pad_right("Vault", 8), "Vault   ");
/// ```
pub fn pad_right(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(text.len() + width - current);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width - current));
    padded
}

/// Quote a string as a DOT double-quoted identifier.
///
/// # Example
/// ```
/// use phalanx_diagrams::core::quote_dot;
///
/// assert_eq!(quote_dot("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn quote_dot(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
