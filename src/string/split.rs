use super::trimmed;

/// Returns the text before the first `delim`, or all of `s` if it doesn't contain one.
pub fn str_first(s: &str, delim: char) -> &str {
    s.split_once(delim).map_or(s, |(first, _)| first)
}

/// The newline delimiter that [`lines`] is most often called with.
pub const NEWLINE: &str = "\n";

/// Something that [`lines`] and [`split`] can split on: a single char or a whole string.
///
/// An empty string never matches, so splitting on it yields `s` as one item.
pub trait Delimiter {
    /// Splits `s` at every occurrence of the delimiter.
    fn split_all<'a>(&self, s: &'a str) -> Vec<&'a str>;

    /// Removes a single trailing delimiter from `s`, if it ends with one.
    fn strip_trailing<'a>(&self, s: &'a str) -> &'a str;
}

impl Delimiter for char {
    fn split_all<'a>(&self, s: &'a str) -> Vec<&'a str> {
        s.split(*self).collect()
    }

    fn strip_trailing<'a>(&self, s: &'a str) -> &'a str {
        s.strip_suffix(*self).unwrap_or(s)
    }
}

impl Delimiter for &str {
    fn split_all<'a>(&self, s: &'a str) -> Vec<&'a str> {
        if self.is_empty() {
            return vec![s];
        }
        s.split(*self).collect()
    }

    fn strip_trailing<'a>(&self, s: &'a str) -> &'a str {
        if self.is_empty() {
            return s;
        }
        s.strip_suffix(*self).unwrap_or(s)
    }
}

impl Delimiter for String {
    fn split_all<'a>(&self, s: &'a str) -> Vec<&'a str> {
        self.as_str().split_all(s)
    }

    fn strip_trailing<'a>(&self, s: &'a str) -> &'a str {
        self.as_str().strip_trailing(s)
    }
}

/// Splits `s` on `delim` and removes every char in `trim_chars` from each item.
///
/// Empty items between delimiters are kept, but a trailing delimiter doesn't produce a final empty
/// item and an empty `s` produces no items at all.
pub fn lines<D: Delimiter>(s: &str, delim: D, trim_chars: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    delim
        .split_all(delim.strip_trailing(s))
        .into_iter()
        .map(|item| trimmed(item, trim_chars))
        .collect()
}

/// The same as [`lines`], except that empty items (including those emptied by `trim_chars`) are
/// dropped.
pub fn split<D: Delimiter>(s: &str, delim: D, trim_chars: &str) -> Vec<String> {
    delim
        .split_all(s)
        .into_iter()
        .map(|item| trimmed(item, trim_chars))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Concatenates `items`, placing `delim` between each.
pub fn join<S: AsRef<str>>(items: &[S], delim: &str) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push_str(delim);
        }
        joined.push_str(item.as_ref());
    }
    joined
}
