use log::{debug, trace};

use super::{
    field::Field,
    framing::{clean, is_line_terminator, lines, trim},
    ParsedFields,
};

/// Tag of the customer ID number nested in the subfile designator line.
const EMBEDDED_CODE_TAG: &str = "DAQ";

/// Number of characters captured after [`EMBEDDED_CODE_TAG`].
const EMBEDDED_CODE_LEN: usize = 13;

/// One line of cleaned subfile text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// Line starting with an element code.
    Coded { code: [u8; 3], value: &'a str },

    /// Line without a leading code, continuing the previous element.
    Continuation(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        match line.as_bytes() {
            [a, b, c, ..] if [a, b, c].into_iter().all(u8::is_ascii_uppercase) => Self::Coded {
                code: [*a, *b, *c],
                value: until_line_terminator(&line[3..]),
            },
            _ => Self::Continuation(line),
        }
    }
}

fn until_line_terminator(s: &str) -> &str {
    s.find(is_line_terminator).map_or(s, |end| &s[..end])
}

/// Element the continuation lines are currently attributed to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    #[default]
    Unset,
    Known(Field),
    /// Last code seen is not in the table. Its continuations are dropped.
    Unknown([u8; 3]),
}

#[derive(Debug, Default)]
struct State {
    cursor: Cursor,
    fields: ParsedFields,
}

impl State {
    fn step(mut self, line: Line) -> Self {
        match line {
            Line::Coded { code, value } => match Field::from_code(&code) {
                Some(field) => {
                    let value = match field {
                        Field::LicenseCode => extract_embedded_code(value).unwrap_or_default(),
                        _ => trim(value),
                    };
                    self.fields.set(field, value.to_owned());
                    self.cursor = Cursor::Known(field);
                }
                None => {
                    trace!("ignoring unmapped element `{}`", String::from_utf8_lossy(&code));
                    self.cursor = Cursor::Unknown(code);
                }
            },
            Line::Continuation(text) => match self.cursor {
                Cursor::Known(field) => self.fields.append(field, trim(text)),
                Cursor::Unknown(code) => trace!(
                    "dropping continuation of unmapped element `{}`",
                    String::from_utf8_lossy(&code)
                ),
                Cursor::Unset => trace!("dropping continuation line before any element"),
            },
        }

        self
    }
}

/// Finds the first `DAQ` tag in `value` followed by 13 characters on the
/// same line and returns those characters. `None` if there is no such tag.
pub fn extract_embedded_code(value: &str) -> Option<&str> {
    value
        .match_indices(EMBEDDED_CODE_TAG)
        .find_map(|(i, tag)| embedded_code_at(&value[i + tag.len()..]))
}

fn embedded_code_at(rest: &str) -> Option<&str> {
    let rest = until_line_terminator(rest);
    let end = rest
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .nth(EMBEDDED_CODE_LEN - 1)?;
    Some(&rest[..end])
}

/// Decodes the text payload of an AAMVA PDF417 barcode into named fields.
///
/// This never fails: input without any recognized element code yields an
/// empty result.
pub fn parse(raw: &str) -> ParsedFields {
    let cleaned = clean(raw);

    let mut line_count = 0usize;
    let state = lines(&cleaned)
        .inspect(|_| line_count += 1)
        .map(Line::classify)
        .fold(State::default(), State::step);

    debug!(
        "parsed {} field(s) from {} line(s)",
        state.fields.len(),
        line_count
    );

    state.fields
}

/// Same as [`parse`], for payloads handed over as bytes. Invalid UTF-8 is
/// replaced with U+FFFD.
pub fn parse_bytes(raw: &[u8]) -> ParsedFields {
    parse(&String::from_utf8_lossy(raw))
}
