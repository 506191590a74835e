use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::{OpenError, ParseFileError, ReadError};
use crate::collections::LowercaseMap;
use crate::string::{to_lower, trim_ws};

/// The delimiter separating keys from values when none is specified.
pub const DEFAULT_DELIMITER: char = ':';

/// Parses the file at `path` into a map of lowercase keys to values.
///
/// Each line is split at the first `delim`. Both halves are trimmed of whitespace and the key is
/// lowercased. Lines without a delimiter, or with an empty key or value, are skipped. When a key
/// appears more than once the last value wins, but the key keeps the position of its first
/// occurrence.
///
/// # Errors
/// Returns [`ParseFileError::Open`] if the file can't be opened and [`ParseFileError::Read`] if
/// reading it fails part way through. No partial map is returned in either case.
pub fn parse_file<P: AsRef<Path>>(
    path: P,
    delim: char,
) -> Result<LowercaseMap<String>, ParseFileError> {
    let path = path.as_ref();
    debug!(path = %path.display(), %delim, "parsing delimited file");

    let file = File::open(path).map_err(|source| OpenError {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse_reader(BufReader::new(file), delim).map_err(|source| ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), entries = map.len(), "parsed delimited file");
    Ok(map)
}

/// Parses lines from `reader` with the same rules as [`parse_file`].
pub fn parse_reader<R: BufRead>(reader: R, delim: char) -> io::Result<LowercaseMap<String>> {
    let mut map = LowercaseMap::new();
    for line in reader.lines() {
        if let Some((key, value)) = parse_line(&line?, delim) {
            map.insert(&key, value.to_owned());
        }
    }
    Ok(map)
}

/// Splits one line into a lowercase key and its value, if it holds a non-empty pair.
pub fn parse_line(line: &str, delim: char) -> Option<(String, &str)> {
    let (key, value) = line.split_once(delim)?;
    let (key, value) = (trim_ws(key), trim_ws(value));
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((to_lower(key), value))
}
