use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
#[display("unable to list supplementary groups: {source}")]
pub struct GroupsError {
    pub source: io::Error,
}

#[derive(Debug, Display, Error)]
#[display("unable to read network devices from {}: {source}", path.display())]
pub struct NetDevError {
    pub path: PathBuf,
    pub source: io::Error,
}
