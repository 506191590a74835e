use std::fs;
use std::path::Path;

use tracing::debug;

use super::NetDevError;

const NET_DEV: &str = "/proc/net/dev";

/// The number of header lines at the top of `/proc/net/dev`.
const HEADER_LINES: usize = 2;

/// Returns the names of all network interfaces listed in `/proc/net/dev`, in the kernel's order.
///
/// # Errors
/// Returns a [`NetDevError`] if the file can't be read.
pub fn get_netdevs() -> Result<Vec<String>, NetDevError> {
    let contents = fs::read_to_string(NET_DEV).map_err(|source| NetDevError {
        path: Path::new(NET_DEV).to_path_buf(),
        source,
    })?;

    let devices = parse_netdevs(&contents);
    debug!(count = devices.len(), "read network devices from {NET_DEV}");
    Ok(devices)
}

/// Extracts the interface names from the contents of `/proc/net/dev`. Each line after the header
/// starts with the name, followed by a `:` and its counters.
pub fn parse_netdevs(contents: &str) -> Vec<String> {
    contents
        .lines()
        .skip(HEADER_LINES)
        .filter_map(|line| line.split_once(':'))
        .map(|(name, _)| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
