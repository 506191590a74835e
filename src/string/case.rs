/// Returns a copy of `s` with ASCII uppercase letters converted to lowercase.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Returns a copy of `s` with ASCII lowercase letters converted to uppercase.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}
