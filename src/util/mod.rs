pub mod error;
pub mod panic;
