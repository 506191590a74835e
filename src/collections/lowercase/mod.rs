//! A module containing [`LowercaseMap`] and associated types.
//!
//! The other included types provide owned and borrowed iteration over entries, keys or values in
//! insertion order.
//!
//! As with [`HashMap`](std::collections::HashMap), there is no iterator yielding mutable keys,
//! because changing a key in place would desynchronize it from the map's index. Use
//! [`LowercaseMap::rename`] instead.
//!
//! [`LowercaseMap`] is also re-exported under the parent module.

mod error;
mod iter;
mod lowercase_map;

pub use error::*;
pub use iter::*;
pub use lowercase_map::*;
