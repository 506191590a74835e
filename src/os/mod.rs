//! Linux specific queries about the running process and host.
#![cfg(target_os = "linux")]

mod error;
mod groups;
mod netdev;
mod tests;

pub use error::*;
pub use groups::*;
pub use netdev::*;
