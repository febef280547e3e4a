// inlistrs/src/line.rs

//! Single line parsing.

use crate::value::InlistValue;

/// Comment marker of the inlist format.
pub const COMMENT_MARKER: char = '!';

/// Marker closing a namelist section.
pub const SECTION_TERMINATOR: char = '/';

/// Parse one `name = value ! comment` line.
///
/// The name is trimmed and lowercased, the value has its inline comment
/// removed and is normalized. Lines without `=` give `None`.
///
/// # Examples
///
/// ```
/// use inlistrs::{parse_line, InlistValue};
///
/// let (name, value) = parse_line("  Initial_Mass = 1.5d3 ! in Msun").unwrap();
/// assert_eq!(name, "initial_mass");
/// assert_eq!(value, InlistValue::Real(1500.0));
/// ```
pub fn parse_line(line: &str) -> Option<(String, InlistValue)> {
    let (name, value) = line.split_once('=')?;
    let name = name.trim().to_lowercase();
    let value = strip_inline_comment(value).trim();
    Some((name, InlistValue::normalize(value)))
}

/// Whether a line carries nothing but whitespace or a comment.
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Whether a line closes the current section.
pub fn is_terminator(line: &str) -> bool {
    line.trim_start().starts_with(SECTION_TERMINATOR)
}

/// Cut a line at the first comment marker that is not inside quotes.
pub fn strip_inline_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;

    for (idx, c) in line.char_indices() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, COMMENT_MARKER) => return &line[..idx],
            _ => {}
        }
    }

    line
}
