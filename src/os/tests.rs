#![cfg(test)]

use super::*;

const NET_DEV_SAMPLE: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo:  104476     958    0    0    0     0          0         0   104476     958    0    0    0     0       0          0
  eth0: 9823410   12054    0    0    0     0          0         0  1204810    8110    0    0    0     0       0          0
wlp2s0:       0       0    0    0    0     0          0         0        0       0    0    0    0     0       0          0
";

#[test]
fn test_parse_netdevs() {
    assert_eq!(parse_netdevs(NET_DEV_SAMPLE), ["lo", "eth0", "wlp2s0"]);
}

#[test]
fn test_parse_netdevs_header_only() {
    let header: String = NET_DEV_SAMPLE.lines().take(2).collect::<Vec<_>>().join("\n");
    assert!(parse_netdevs(&header).is_empty(), "Header lines shouldn't be read as devices.");
    assert!(parse_netdevs("").is_empty());
}

#[test]
fn test_get_netdevs_names() {
    // Some sandboxes hide /proc/net/dev.
    if let Ok(devices) = get_netdevs() {
        assert!(devices.iter().all(|d| !d.is_empty() && !d.contains(':')));
    }
}

#[test]
fn test_get_groups() {
    let groups = get_groups().unwrap();
    let again = get_groups().unwrap();
    assert_eq!(groups, again, "Group membership shouldn't change between calls.");
}
