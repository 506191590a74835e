//! Traits shared between the collection types.

pub mod set;

#[doc(inline)]
pub use set::Set;
