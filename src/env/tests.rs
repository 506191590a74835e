#![cfg(test)]

use std::path::PathBuf;

use super::*;

#[test]
fn test_fixed_environment() {
    let env = FixedEnvironment::new(7200, Some(PathBuf::from("/usr/local/bin/daemon")));

    assert_eq!(env.timezone_offset(), 7200);
    assert_eq!(env.self_path(), Some(PathBuf::from("/usr/local/bin")));
    assert_eq!(env.self_basename(), Some(PathBuf::from("daemon")));
}

#[test]
fn test_fixed_environment_without_executable() {
    let env = FixedEnvironment::default();

    assert_eq!(env.timezone_offset(), 0);
    assert_eq!(env.self_executable_path(), None);
    assert_eq!(env.self_path(), None, "Derived paths should be absent too.");
    assert_eq!(env.self_basename(), None);
}

#[test]
fn test_system_offset_is_within_a_day() {
    let offset = SystemEnvironment.timezone_offset();
    assert!(offset.abs() < 86_400, "{offset} isn't a valid timezone offset.");
}

#[cfg(target_os = "linux")]
#[test]
fn test_system_executable_is_this_test() {
    let exe = SystemEnvironment
        .self_executable_path()
        .expect("/proc/self/exe should resolve on Linux.");
    assert_eq!(exe, std::env::current_exe().unwrap());
    assert!(SystemEnvironment.self_basename().is_some());
}
