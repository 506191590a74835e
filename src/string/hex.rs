/// Formats `number` as lowercase hex, left-padded with zeroes to at least `min_len` digits.
pub fn to_hex(number: u8, min_len: usize) -> String {
    format!("{number:0min_len$x}")
}

/// Formats `number` as lowercase hex with a `0x` prefix.
pub fn int_to_hex(number: u32) -> String {
    format!("{number:#x}")
}
