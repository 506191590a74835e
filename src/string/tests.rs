#![cfg(test)]

use super::*;

#[test]
fn test_prefix_suffix_and_first() {
    assert!(has_prefix("eth0: 123", "eth"));
    assert!(has_prefix("anything", ""), "An empty prefix should always match.");
    assert!(!has_prefix("et", "eth"));
    assert!(has_suffix("config.toml", ".toml"));

    assert_eq!(str_first("key:value:more", ':'), "key");
    assert_eq!(str_first("no delimiter", ':'), "no delimiter");
    assert_eq!(str_first("", ':'), "");
}

#[test]
fn test_trimmed_removes_everywhere() {
    assert_eq!(trimmed(" a b\tc ", " \t"), "abc");
    assert_eq!(trimmed("\"quoted\"", "\""), "quoted");
    assert_eq!(trimmed("unchanged", ""), "unchanged");
}

#[test]
fn test_lines() {
    assert_eq!(lines("a\nb\n\nc", '\n', ""), ["a", "b", "", "c"]);
    assert_eq!(
        lines("a\nb\n", '\n', ""),
        ["a", "b"],
        "A trailing delimiter shouldn't produce an empty item."
    );
    assert_eq!(lines(" x , y ", ',', " "), ["x", "y"]);
    assert!(lines("", '\n', "").is_empty());
    assert_eq!(lines("single", '\n', "e"), ["singl"]);
}

#[test]
fn test_string_delimiters() {
    assert_eq!(lines("a\r\nb\r\n", "\r\n", ""), ["a", "b"]);
    assert_eq!(lines("x\ny", NEWLINE, ""), ["x", "y"]);
    assert_eq!(lines("a::b", String::from("::"), ""), ["a", "b"]);
    assert_eq!(split("one, , two, ", ", ", ""), ["one", "two"]);
    assert_eq!(
        split("a,b", "", ""),
        ["a,b"],
        "An empty delimiter should leave the input whole."
    );
}

#[test]
fn test_split_drops_empty_items() {
    assert_eq!(split("a,,b, ,c,", ',', " "), ["a", "b", "c"]);
    assert!(split(",,,", ',', "").is_empty());
    assert!(split("", ',', "").is_empty());
}

#[test]
fn test_case_and_join() {
    assert_eq!(to_lower("MiXeD-Ünï"), "mixed-Ünï", "Only ASCII should be converted.");
    assert_eq!(to_upper("abc1"), "ABC1");
    assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
    assert_eq!(join::<&str>(&[], ", "), "");
}

#[test]
fn test_number_predicates() {
    assert!(is_number("0123"));
    assert!(!is_number(""));
    assert!(!is_number("-1"));
    assert!(!is_number("1.5"));

    assert!(is_hex("0x1F"));
    assert!(is_hex("0xabc"));
    assert!(!is_hex("0x"), "A prefix without digits isn't a number.");
    assert!(!is_hex("1F"));
    assert!(!is_hex("0xg"));
}

#[test]
fn test_char_classes() {
    assert!(is_whitespace('\x0B') && is_whitespace('\n'));
    assert!(is_space('\t') && !is_space('\n'));
    assert!(is_alpha('_') && is_alpha('Z') && !is_alpha('1'));
    assert!(is_alnum('7') && !is_alnum('-'));

    assert!(starts_with_whitespace(" x"));
    assert!(starts_with_space("\tx"));
    assert!(starts_with_digit("9lives"));
    assert!(starts_with_alpha("_private"));
    assert!(starts_with_alnum("a1"));
    assert!(!starts_with_alpha(""), "Empty strings have no first character to classify.");
}

#[test]
fn test_trim_family() {
    assert_eq!(ltrim_ws(" \t value \n"), "value \n");
    assert_eq!(rtrim_ws(" \t value \n"), " \t value");
    assert_eq!(trim_ws(" \t value \n"), "value");
    assert_eq!(trim_with("--value--", "-"), "value");
    assert_eq!(ltrim_with("xxvalue", "x"), "value");
    assert_eq!(rtrim_with("value..", "."), "value");

    assert_eq!(trim_leading("abcdef", 2), "cdef");
    assert_eq!(trim_leading("abc", 10), "");
    assert_eq!(trim_leading("abc", 0), "abc");
}

#[test]
fn test_erase_prefix_and_front() {
    let mut s = String::from("prefix:rest");
    assert_eq!(erase_prefix(&mut s, 7), "prefix:");
    assert_eq!(s, "rest");
    assert_eq!(erase_prefix(&mut s, 10), "rest");
    assert!(s.is_empty());

    let mut s = String::from("ab");
    assert_eq!(erase_front(&mut s), Some('a'));
    assert_eq!(erase_front(&mut s), Some('b'));
    assert_eq!(erase_front(&mut s), None);
}

#[test]
fn test_unquoted() {
    assert_eq!(unquoted("  \"value\" ", true), "value");
    assert_eq!(unquoted("'value'", true), "value");
    assert_eq!(unquoted("'mismatched\"", true), "'mismatched\"");
    assert_eq!(unquoted("'", true), "'");

    assert_eq!(unquoted(" a 'b' c ", false), " a b c ", "Outside text should be kept as is.");
    assert_eq!(unquoted("it's", false), "it's", "A lone quote should be left alone.");
    assert_eq!(unquoted("'a' and 'b'", false), "a' and 'b");
    assert_eq!(unquoted("plain", false), "plain");
}

#[test]
fn test_unquoted_and_trimmed() {
    assert_eq!(unquoted_and_trimmed(" ' Value ' ", false), "Value");
    assert_eq!(unquoted_and_trimmed(" \" Value \" ", true), "value");
}

#[test]
fn test_hex() {
    assert_eq!(to_hex(0x0f, 2), "0f");
    assert_eq!(to_hex(0xab, 1), "ab");
    assert_eq!(to_hex(7, 4), "0007");
    assert_eq!(int_to_hex(255), "0xff");
    assert_eq!(int_to_hex(0), "0x0");
}

#[test]
fn test_hash_in_match() {
    const START: u64 = hash("start");
    const STOP: u64 = hash("stop");

    let command = |name: &str| match hash(name) {
        START => 1,
        STOP => 2,
        _ => 0,
    };

    assert_eq!(command("start"), 1);
    assert_eq!(command("stop"), 2);
    assert_eq!(command("restart"), 0);
    assert_eq!(hash(""), 0);
    assert_eq!(hash("a"), mix(b'a', 0));
    assert_eq!(hash("ab"), mix(b'a', mix(b'b', 0)), "Bytes should be mixed from the back.");
}

#[test]
fn test_padding() {
    let column = Padding::new(5);
    assert_eq!(column.pad("ab"), "   ab");
    assert_eq!(column.pad("toolong"), "toolong", "Padding should never truncate.");
    assert_eq!(Padding::with_fill(4, '0').pad("7"), "0007");
    assert_eq!(format!("{}|", Padding::new(2)), "  |");
}

#[test]
fn test_to_fixed_and_any_of() {
    assert_eq!(to_fixed(1.23456, 2), "1.23");
    assert_eq!(to_fixed(2.0, 0), "2");
    assert_eq!(to_fixed(1.5f32, 3), "1.500");

    assert!(is_any_of(&'b', &['a', 'b']));
    assert!(!is_any_of(&3, &[1, 2]));
}

#[test]
fn test_scan() {
    let mut s0 = String::new();
    let mut s3 = String::new();
    let mut s4 = String::new();
    let (mut i1, mut i2, mut i5) = (0i32, 0u64, 0usize);
    let mut missing = false;

    let captured = scan(
        "test 1 2 hello world 7 ",
        &mut [
            (0, &mut s0),
            (3, &mut s3),
            (1, &mut i1),
            (2, &mut i2),
            (4, &mut s4),
            (5, &mut i5),
            (6, &mut missing),
        ],
    );

    assert_eq!(captured, 6, "Only indices with a token should be captured.");
    assert_eq!((s0.as_str(), i1, i2), ("test", 1, 2));
    assert_eq!((s3.as_str(), s4.as_str(), i5), ("hello", "world", 7));
    assert!(!missing);
}

#[test]
fn test_scan_skips_unparsable_tokens() {
    let (mut first, mut second) = (5u8, 6u8);
    let mut word = String::new();

    let captured = scan("abc 300", &mut [(0, &mut first), (0, &mut word), (1, &mut second)]);

    assert_eq!(captured, 1);
    assert_eq!((first, second), (5, 6), "Failed parses should leave the target unchanged.");
    assert_eq!(word, "abc");
}
