//! Blank-line cleanup for rewritten project manifests

/// Collapse every run of three or more newlines into exactly two, leaving at
/// most one blank line between blocks.
pub fn cleanup(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        cleaned.push(ch);
    }
    cleaned
}
