// Output formatting: terminal display of insight reports.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Comment text is full of emoji and accented letters, so this counts
/// characters rather than slicing bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Collapse newlines and runs of whitespace so a comment prints on one line.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
