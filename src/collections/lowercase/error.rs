use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("No entry found in LowercaseMap for key {key:?}!")]
pub struct KeyNotFound {
    #[error(not(source))]
    pub key: String,
}
