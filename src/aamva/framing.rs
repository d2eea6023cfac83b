//! AAMVA PDF417 framing bytes.
//!
//! A DL/ID payload starts with the compliance indicator `@` followed by the
//! data element separator, the record separator and the segment terminator.
//! Text-oriented barcode readers hand these over verbatim, mixed with the
//! data elements.
use std::borrow::Cow;

pub const COMPLIANCE_INDICATOR: char = '@';

pub const DATA_ELEMENT_SEPARATOR: char = '\n';

pub const RECORD_SEPARATOR: char = '\x1e';

pub const SEGMENT_TERMINATOR: char = '\r';

fn is_framing(c: char) -> bool {
    matches!(
        c,
        COMPLIANCE_INDICATOR | RECORD_SEPARATOR | SEGMENT_TERMINATOR
    )
}

/// Whitespace stripped around the payload and around each value. This is
/// Unicode white space plus the byte order mark, without NEL (U+0085).
fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Line and paragraph separators end a value on its line.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}')
}

/// Removes the compliance indicator, record separators and segment
/// terminators wherever they occur, then trims the result.
///
/// Data element separators are kept: they delimit the subfile lines.
pub fn clean(raw: &str) -> Cow<'_, str> {
    if raw.contains(is_framing) {
        let stripped: String = raw.chars().filter(|c| !is_framing(*c)).collect();
        Cow::Owned(trim(&stripped).to_owned())
    } else {
        Cow::Borrowed(trim(raw))
    }
}

/// Splits cleaned text into its non-empty lines, in subfile order.
pub fn lines(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned
        .split(DATA_ELEMENT_SEPARATOR)
        .filter(|line| !line.is_empty())
}
