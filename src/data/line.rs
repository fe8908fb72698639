//! Line classification shared by the question and answer file parsers.
//!
//! A line is "numbered" when it starts with one or more ASCII digits, followed
//! by a period and at least one whitespace character. Everything else is
//! treated as free text.

/// Classification of a single line from a question or answer file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `<digits>.<whitespace><text>`. `text` is the trimmed remainder after the period.
    /// `number` is `None` when the digits do not fit in a `u32`.
    QuestionHeader { number: Option<u32>, text: &'a str },
    /// Any other line.
    Other,
}

/// Classify a line without allocating.
///
/// The shape alone decides the kind; an oversized number is still a header.
pub fn classify(line: &str) -> LineKind<'_> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return LineKind::Other;
    }

    let Some(rest) = line[digits..].strip_prefix('.') else {
        return LineKind::Other;
    };

    if !rest.starts_with(is_separator) {
        return LineKind::Other;
    }

    LineKind::QuestionHeader {
        number: line[..digits].parse().ok(),
        text: rest.trim(),
    }
}

/// Returns true if the line opens a numbered entry.
pub fn is_header(line: &str) -> bool {
    matches!(classify(line), LineKind::QuestionHeader { .. })
}

// Space, tab, newline, vertical tab, form feed, carriage return.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}
