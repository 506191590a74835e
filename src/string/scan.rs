use std::str::FromStr;

/// A value that [`scan`] can assign a token to.
pub trait ScanTarget {
    /// Parses `token` into this target, returning false (and leaving the target unchanged) if it
    /// can't be parsed.
    fn assign(&mut self, token: &str) -> bool;
}

macro_rules! impl_scan_target {
    ($($t:ty),* $(,)?) => {
        $(
            impl ScanTarget for $t {
                fn assign(&mut self, token: &str) -> bool {
                    match <$t as FromStr>::from_str(token) {
                        Ok(value) => {
                            *self = value;
                            true
                        },
                        Err(_) => false,
                    }
                }
            }
        )*
    };
}

impl_scan_target!(
    String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Splits `s` on whitespace and assigns token `i` to every target registered for index `i`.
///
/// Targets whose index is past the last token, or whose token fails to parse, are left untouched.
/// Returns the number of targets that were assigned.
///
/// ```
/// # use common_lib::string::scan;
/// let (mut name, mut count) = (String::new(), 0u32);
/// let captured = scan("item 42 extra", &mut [(0, &mut name), (1, &mut count), (7, &mut 0u8)]);
/// assert_eq!((captured, name.as_str(), count), (2, "item", 42));
/// ```
pub fn scan(s: &str, targets: &mut [(usize, &mut dyn ScanTarget)]) -> usize {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    let mut captured = 0;
    for (index, target) in targets.iter_mut() {
        if let Some(token) = tokens.get(*index)
            && target.assign(token)
        {
            captured += 1;
        }
    }
    captured
}
