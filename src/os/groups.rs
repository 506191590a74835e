use std::io;
use std::ptr;

use libc::gid_t;
use tracing::trace;

use super::GroupsError;

/// Returns the supplementary group IDs of the calling process.
///
/// # Errors
/// Returns a [`GroupsError`] wrapping the OS error if `getgroups` fails.
pub fn get_groups() -> Result<Vec<gid_t>, GroupsError> {
    // SAFETY: A size of 0 only queries the count and never writes through the pointer.
    let count = unsafe { libc::getgroups(0, ptr::null_mut()) };
    if count < 0 {
        return Err(last_error());
    }

    let mut groups: Vec<gid_t> = vec![0; count as usize];
    // SAFETY: groups has room for exactly `count` elements.
    let written = unsafe { libc::getgroups(count, groups.as_mut_ptr()) };
    if written < 0 {
        return Err(last_error());
    }

    groups.truncate(written as usize);
    trace!(count = groups.len(), "read supplementary groups");
    Ok(groups)
}

fn last_error() -> GroupsError {
    GroupsError {
        source: io::Error::last_os_error(),
    }
}
