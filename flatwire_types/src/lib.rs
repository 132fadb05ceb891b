//! A tagless, big-endian, length-prefixed binary codec.
//!
//! - [`serde`] holds the wire format: fixed-width integers, strings, lists,
//!   and the dynamic [`serde::TypeDesc`] / [`serde::Datum`] pair that drives
//!   composite records.
//! - [`types`] holds the [`types::Record`] trait, through which a struct declares
//!   its fields in order, and the [`types::Ser`] / [`types::Deser`] traits built on it.
//! - [`iters`] reads and writes back-to-back values on a byte stream.

mod io_utils;

pub mod iters;
pub mod serde;
pub mod types;
