//! This library is an internal component of [`mapstitch`],
//! which defines some core mathematical types and functions.
//! Do not depend on this library; use only [`mapstitch`] instead.
//!
//! [`mapstitch`]: https://crates.io/crates/mapstitch

/// Do not use this module directly; its contents are re-exported from `mapstitch`.
pub mod math;

// reexport for convenience of our tests
#[doc(hidden)]
pub use euclid;
