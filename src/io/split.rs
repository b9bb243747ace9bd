//! Field splitting for delimited input lines.

/// Split `line` at every character contained in `delimiters`.
///
/// Empty fragments are dropped, so consecutive delimiters, a leading delimiter
/// or a trailing delimiter never produce an empty field. An empty or
/// delimiter-only line yields no fields.
pub fn split_fields<'a>(line: &'a str, delimiters: &str) -> Vec<&'a str> {
    line.split(|c: char| delimiters.contains(c))
        .filter(|field| !field.is_empty())
        .collect()
}
