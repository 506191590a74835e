//! Access to process-wide OS state, behind a trait so that it can be substituted with fixed values.

mod environment;
mod tests;

pub use environment::*;
