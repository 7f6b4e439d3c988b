//! A fixed-capacity vector that stores its elements inline.
//!
//! [`Vec<T, N>`](Vec) looks and feels like `std::vec::Vec`, except that its
//! capacity `N` is fixed at compile time and its storage lives inside the
//! value itself. No heap allocation is ever performed, which makes it usable
//! in `#![no_std]` firmware, in `static`s, and on hot paths where allocator
//! traffic is unacceptable.
//!
//! # Examples
//!
//! ```
//! use inplace_vec::Vec;
//!
//! // A vector with a fixed capacity of 8 elements allocated on the stack
//! let mut xs: Vec<u8, 8> = Vec::new();
//!
//! assert!(xs.push(0).is_ok());
//! assert!(xs.push(1).is_ok());
//! assert_eq!(xs.pop(), Some(1));
//!
//! // A vector allocated in a static variable
//! static XS: Vec<u8, 8> = Vec::new();
//! ```
//!
//! Capacity exhaustion is not an abort: every growing operation either
//! returns the rejected element back ([`push`](vec::VecInner::push)), reports
//! a [`CapacityError`] ([`extend_from_slice`](vec::VecInner::extend_from_slice)),
//! or stops early and hands back the unconsumed remainder
//! ([`extend_until_full`](vec::VecInner::extend_until_full)).
//!
//! # Optional features
//!
//! - `alloc` — fallible conversions to and from `alloc::vec::Vec`.
//! - `defmt` — `defmt::Format` for the vector types.
//! - `embedded-io` — `embedded_io::Write` for byte vectors.
//! - `serde` — `Serialize`/`Deserialize` as a sequence of elements.
//! - `ufmt` — `ufmt_write::uWrite` for byte vectors.
//! - `zeroize` — `Zeroize` for the vector types.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub use crate::{
    len_type::LenType,
    vec::{Vec, VecView},
};

#[cfg(test)]
#[macro_use]
mod test_helpers;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "defmt")]
mod defmt;
#[cfg(feature = "embedded-io")]
mod embedded_io;
mod len_type;
#[cfg(feature = "serde")]
mod ser;
mod slice;
#[cfg(feature = "ufmt")]
mod ufmt;
pub mod vec;

/// Error returned when an operation would grow a vector past its fixed
/// capacity.
///
/// The vector is left in a valid state when this error is reported; see the
/// individual operations for how far a bulk operation may have progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("insufficient capacity")
    }
}

impl core::error::Error for CapacityError {}
