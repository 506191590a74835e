use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error)]
#[display("unable to open {} for parsing: {source}", path.display())]
pub struct OpenError {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Display, Error)]
#[display("error while reading {}: {source}", path.display())]
pub struct ReadError {
    pub path: PathBuf,
    pub source: io::Error,
}

#[derive(Debug, Display, From, Error, IsVariant)]
pub enum ParseFileError {
    Open(OpenError),
    Read(ReadError),
}

impl ParseFileError {
    /// The path of the file that couldn't be parsed.
    pub fn path(&self) -> &PathBuf {
        match self {
            ParseFileError::Open(e) => &e.path,
            ParseFileError::Read(e) => &e.path,
        }
    }
}
