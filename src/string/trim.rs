use super::WHITESPACE;

/// Removes every occurrence of every char in `chars` from `s`, not just those at either end.
pub fn trimmed(s: &str, chars: &str) -> String {
    s.chars().filter(|ch| !chars.contains(*ch)).collect()
}

pub fn ltrim_ws(s: &str) -> &str {
    ltrim_with(s, WHITESPACE)
}

pub fn rtrim_ws(s: &str) -> &str {
    rtrim_with(s, WHITESPACE)
}

/// Trims [`WHITESPACE`] from both ends of `s`.
pub fn trim_ws(s: &str) -> &str {
    trim_with(s, WHITESPACE)
}

pub fn ltrim_with<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_start_matches(|ch: char| set.contains(ch))
}

pub fn rtrim_with<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_end_matches(|ch: char| set.contains(ch))
}

/// Trims any chars in `set` from both ends of `s`.
pub fn trim_with<'a>(s: &'a str, set: &str) -> &'a str {
    s.trim_matches(|ch: char| set.contains(ch))
}

/// Returns `s` without its first `count` chars. Counts past the end give an empty string.
pub fn trim_leading(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Removes the first `count` chars of `s` and returns them.
pub fn erase_prefix(s: &mut String, count: usize) -> String {
    let end = s.char_indices().nth(count).map_or(s.len(), |(i, _)| i);
    s.drain(..end).collect()
}

/// Removes and returns the first char of `s`, if there is one.
pub fn erase_front(s: &mut String) -> Option<char> {
    let first = s.chars().next()?;
    s.drain(..first.len_utf8());
    Some(first)
}
