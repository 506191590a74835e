/// Mixes one byte into a running hash.
pub const fn mix(byte: u8, seed: u64) -> u64 {
    (seed << 7).wrapping_add(!(seed >> 3)).wrapping_add(!(byte as u64))
}

/// Hashes a string at compile time or runtime. Being `const`, the result can be used in `match`
/// arms to dispatch on string values:
/// ```
/// # use common_lib::string::hash;
/// const START: u64 = hash("start");
/// match hash("start") {
///     START => {},
///     _ => unreachable!(),
/// }
/// ```
/// This is not a cryptographic or collision-resistant hash.
pub const fn hash(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut state = 0;
    let mut i = bytes.len();
    // Mix from the back, so the first byte is applied last.
    while i > 0 {
        i -= 1;
        state = mix(bytes[i], state);
    }
    state
}
