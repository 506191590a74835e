/// Returns true if `s` begins with `prefix`. An empty prefix matches everything.
pub fn has_prefix(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Returns true if `s` ends with `suffix`. An empty suffix matches everything.
pub fn has_suffix(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Returns true if `s` is non-empty and consists only of ASCII digits. Signs and decimal points
/// are not accepted.
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is a `0x`-prefixed hex literal with at least one digit, in either case.
pub fn is_hex(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Space, tab, line feed, carriage return, form feed or vertical tab.
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

/// Space or tab only.
pub const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

pub const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// ASCII letters and underscores, matching what is allowed to start an identifier.
pub const fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub const fn is_alnum(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

fn first_is(s: &str, class: fn(char) -> bool) -> bool {
    s.chars().next().is_some_and(class)
}

pub fn starts_with_whitespace(s: &str) -> bool {
    first_is(s, is_whitespace)
}

pub fn starts_with_space(s: &str) -> bool {
    first_is(s, is_space)
}

pub fn starts_with_digit(s: &str) -> bool {
    first_is(s, is_digit)
}

pub fn starts_with_alpha(s: &str) -> bool {
    first_is(s, is_alpha)
}

pub fn starts_with_alnum(s: &str) -> bool {
    first_is(s, is_alnum)
}

/// Returns true if `value` equals any of `values`.
pub fn is_any_of<T: PartialEq>(value: &T, values: &[T]) -> bool {
    values.contains(value)
}
