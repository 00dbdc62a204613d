//! Marker search primitives.
//!
//! Every lookup returns an `Option` or a sub-slice of its input; nothing here
//! indexes into a string, so no input can cause an out-of-range panic.

/// Returns the text following the first occurrence of `marker`.
#[must_use]
pub(crate) fn after_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.split_once(marker).map(|(_, rest)| rest)
}

/// Returns the text following the first `marker` that starts a line, i.e.
/// sits at the start of `text` or right after a line feed.
#[must_use]
pub(crate) fn after_line_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let mut line_start = Some(text);
    while let Some(line) = line_start {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest);
        }
        line_start = line.split_once('\n').map(|(_, next)| next);
    }
    None
}

/// Returns the value at the start of `rest`: everything up to the next line
/// feed, or to the end of the text when there is none, trimmed.
#[must_use]
pub(crate) fn line_value(rest: &str) -> &str {
    rest.split_once('\n').map_or(rest, |(line, _)| line).trim()
}
