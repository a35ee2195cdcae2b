//! Filename sanitization for saved archives.

const NAME_MAX: usize = 255;

/// Makes a suggested filename safe to create in a single directory.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Trims leading/trailing spaces and dots
/// - Limits length to 255 bytes (Linux NAME_MAX)
///
/// Inner spaces are kept. Returns `None` if nothing usable remains.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(|c| c == ' ' || c == '.');
    if trimmed.is_empty() {
        return None;
    }

    let mut take = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    Some(trimmed[..take].to_string())
}
