//! Fixed-capacity sample windows with lazily computed min / max / mean.
//!
//! Nothing in this crate allocates: a window of `N` samples lives inline in
//! its owner, so the memory footprint is known at compile time.  The crate is
//! `no_std` outside of its own unit tests.

#![cfg_attr(not(test), no_std)]

pub mod buffer;
pub mod sample;
pub mod series;

pub use buffer::BoundedBuffer;
pub use sample::Sample;
pub use series::{Rejected, StatisticsSeries};
