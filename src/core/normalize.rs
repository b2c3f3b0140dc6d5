/// Lowercase `s` and keep only ASCII letters and digits.
///
/// Used for fuzzy skill comparison: "Node.js" and "nodejs" both become "nodejs".
#[inline]
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Clean text decoded from an uploaded file.
///
/// Anything outside printable ASCII, newline, carriage return and tab becomes
/// a space, whitespace runs collapse to one space, and the ends are trimmed.
pub fn sanitize_text(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| match c {
            '\x20'..='\x7e' | '\n' | '\r' | '\t' => c,
            _ => ' ',
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
