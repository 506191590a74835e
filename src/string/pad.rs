use std::fmt::{self, Display, Formatter};

/// A fixed-width column: text shorter than `width` is right-aligned with `fill`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub width: usize,
    pub fill: char,
}

impl Padding {
    /// Creates a Padding of `width` that fills with spaces.
    pub const fn new(width: usize) -> Padding {
        Padding { width, fill: ' ' }
    }

    pub const fn with_fill(width: usize, fill: char) -> Padding {
        Padding { width, fill }
    }

    /// Right-aligns `s` to the width of this Padding. Text that is already wide enough is returned
    /// unchanged, never truncated.
    pub fn pad(&self, s: &str) -> String {
        let len = s.chars().count();
        let mut padded = String::with_capacity(s.len() + self.width.saturating_sub(len));
        padded.extend(std::iter::repeat_n(self.fill, self.width.saturating_sub(len)));
        padded.push_str(s);
        padded
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::new(0)
    }
}

/// Writes `width` fill characters, which makes a Padding usable directly as an indent.
impl Display for Padding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for _ in 0..self.width {
            write!(f, "{}", self.fill)?;
        }
        Ok(())
    }
}

/// Formats `value` in fixed-point notation with `precision` decimal places.
pub fn to_fixed<T: Display>(value: T, precision: usize) -> String {
    format!("{value:.precision$}")
}
