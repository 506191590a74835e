use super::{is_whitespace, trim_ws, to_lower};

const fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Removes one pair of quotes from `s`.
///
/// When `trimmed` is set, surrounding whitespace is trimmed first and the quotes are only removed
/// if they are the outermost characters and match each other. Otherwise, the first quote character
/// and the last later occurrence of that same character are removed, leaving any text outside of
/// them untouched.
///
/// ```
/// # use common_lib::string::unquoted;
/// assert_eq!(unquoted("  'value'  ", true), "value");
/// assert_eq!(unquoted("key = \"value\";", false), "key = value;");
/// ```
pub fn unquoted(s: &str, trimmed: bool) -> String {
    if trimmed {
        let r = trim_ws(s);
        for quote in ['\'', '"'] {
            if r.len() >= 2
                && let Some(inner) = r.strip_prefix(quote).and_then(|r| r.strip_suffix(quote))
            {
                return inner.to_owned();
            }
        }
        return r.to_owned();
    }

    let Some((open, quote)) = s.char_indices().find(|&(_, ch)| !is_whitespace(ch) && is_quote(ch))
    else {
        return s.to_owned();
    };

    match s.rfind(quote) {
        Some(close) if close > open => {
            let mut r = String::with_capacity(s.len() - 2);
            r.push_str(&s[..open]);
            r.push_str(&s[open + 1..close]);
            r.push_str(&s[close + 1..]);
            r
        },
        _ => s.to_owned(),
    }
}

/// Trims `s`, removes a pair of outer quotes, then trims whatever was inside them. The result is
/// lowercased if `lowercased` is set.
pub fn unquoted_and_trimmed(s: &str, lowercased: bool) -> String {
    let r = trim_ws(&unquoted(s, true)).to_owned();
    if lowercased { to_lower(&r) } else { r }
}
