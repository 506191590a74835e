//! Conversions between byte counts and the binary (1024-based) units used by `/proc` and friends.


const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;

#[must_use]
pub fn to_kib(bytes: f64) -> f64 {
    bytes / KIB
}

#[must_use]
pub fn to_mib(bytes: f64) -> f64 {
    bytes / MIB
}

#[must_use]
pub fn to_gib(bytes: f64) -> f64 {
    bytes / GIB
}

/// Formats `bytes` in the largest unit that keeps the value at least 1, with two decimal places.
/// Values under 1 KiB are printed as plain bytes.
///
/// ```
/// # use common_lib::units::human_readable;
/// assert_eq!(human_readable(512.0), "512 B");
/// assert_eq!(human_readable(2048.0), "2.00 KiB");
/// assert_eq!(human_readable(5_242_880.0), "5.00 MiB");
/// ```
#[must_use]
pub fn human_readable(bytes: f64) -> String {
    match bytes {
        b if b >= TIB => format!("{:.2} TiB", b / TIB),
        b if b >= GIB => format!("{:.2} GiB", b / GIB),
        b if b >= MIB => format!("{:.2} MiB", b / MIB),
        b if b >= KIB => format!("{:.2} KiB", b / KIB),
        b => format!("{b} B"),
    }
}

/// Formats an amount of memory in short form, as `b`, `kb` or `mb` rounded to whole numbers.
///
/// Each step up rounds before the next comparison, so 1023.6 kb is treated as 1024 kb and becomes
/// 1 mb. When `gigabytes` is set, values of at least 1024 mb are shown as `gb` with two decimal
/// places instead.
///
/// | Input            | `gigabytes` | Output    |
/// | ---------------- | ----------- | --------- |
/// | `512.0`          | either      | `512b`    |
/// | `1536.0`         | either      | `2kb`     |
/// | `1_610_612_736.0`| `false`     | `1536mb`  |
/// | `1_610_612_736.0`| `true`      | `1.50gb`  |
#[must_use]
pub fn mem_to_str(amount: f64, gigabytes: bool) -> String {
    let mut value = amount;
    let mut suffix = "b";

    if value >= KIB {
        value = (value / KIB).round();
        suffix = "kb";
        if value >= KIB {
            value = (value / KIB).round();
            suffix = "mb";
            if gigabytes && value >= KIB {
                value = ((value / KIB) * 100.0).round() / 100.0;
                return format!("{value:.2}gb");
            }
        }
    }

    format!("{value:.0}{suffix}")
}
