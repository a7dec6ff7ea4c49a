//! String utilities for the domain layer.

/// Single-line preview of `s` for log output (UTF-8 safe)
///
/// Newlines are folded into spaces. Uses byte length for `max_len` and
/// appends `...` when the text was cut.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.len() <= max_len {
        return flat;
    }

    let mut end = max_len.saturating_sub(3).min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}
