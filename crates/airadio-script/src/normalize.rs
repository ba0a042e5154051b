/// Collapse raw completion output into speakable single-line text
///
/// Replaces embedded line breaks with spaces, strips leading and trailing
/// whitespace, and collapses internal whitespace runs to single spaces.
/// Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
