use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::trace;

const SELF_EXE: &str = "/proc/self/exe";

/// Process-wide state that the rest of the crate reads from the OS.
pub trait Environment {
    /// The current timezone's offset from UTC in seconds, positive east of UTC.
    fn timezone_offset(&self) -> i64;

    /// The path of the running executable, if it can be determined.
    fn self_executable_path(&self) -> Option<PathBuf>;

    /// The directory containing the running executable.
    fn self_path(&self) -> Option<PathBuf> {
        self.self_executable_path()?.parent().map(Path::to_path_buf)
    }

    /// The file name of the running executable.
    fn self_basename(&self) -> Option<PathBuf> {
        self.self_executable_path()?.file_name().map(PathBuf::from)
    }
}

/// The real environment of this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn timezone_offset(&self) -> i64 {
        i64::from(Local::now().offset().local_minus_utc())
    }

    /// Resolves `/proc/self/exe`, giving `None` on systems where it doesn't exist or isn't a
    /// symlink.
    fn self_executable_path(&self) -> Option<PathBuf> {
        let link = Path::new(SELF_EXE);
        let is_symlink = fs::symlink_metadata(link).is_ok_and(|meta| meta.file_type().is_symlink());
        if !link.exists() || !is_symlink {
            trace!("{SELF_EXE} is unavailable");
            return None;
        }
        fs::read_link(link).ok()
    }
}

/// An environment with preset values, primarily for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub offset: i64,
    pub exe: Option<PathBuf>,
}

impl FixedEnvironment {
    pub fn new(offset: i64, exe: Option<PathBuf>) -> FixedEnvironment {
        FixedEnvironment { offset, exe }
    }
}

impl Environment for FixedEnvironment {
    fn timezone_offset(&self) -> i64 {
        self.offset
    }

    fn self_executable_path(&self) -> Option<PathBuf> {
        self.exe.clone()
    }
}
