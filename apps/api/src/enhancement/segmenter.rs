/// Sentence terminators. Runs of them (`"?!"`, `"..."`) act as one boundary.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Splits raw text into trimmed, non-empty sentences in their original order.
pub fn segment(text: &str) -> Vec<&str> {
    text.split(TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
