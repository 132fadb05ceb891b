//! # Serialization format
//!
//! The format carries no type tags, field names, or delimiters.
//! The reader must know the shape of what it reads, in the form of a [`Codec`]:
//! either one of the typed codecs, or a [`TypeDesc`] which encodes [`Datum`]s.
//!
//! All integers are unsigned and big-endian.
//!
//! The below pseudocode depicts the serialized representations.
//!
//! ```text
//! struct FixedWidthInt<width> {
//!     body:           [u8; width],    // width in {1, 2, 4, 8}
//! }
//!
//! struct String {
//!     body_len:       u16,            // Count of UTF-8 bytes, not of chars.
//!     body:           [u8; body_len],
//! }
//!
//! struct List<T> {
//!     elems_count:    u32,
//!     elem_0:         T,
//!     elem_1:         T,
//!     ...
//! }
//!
//! struct Record {
//!     field_0:        T0,
//!     field_1:        T1,
//!     ...
//!     // No header, no trailer. The field order is the schema's order.
//! }
//! ```
//!
//! A `List` may nest other `List`s and `Record`s; a `Record` may nest anything.
//!
//! A reader whose schema disagrees with the writer's does not get an error;
//! it gets wrong values.

pub mod composite;
mod codec;
mod datum;
mod error;
mod lengths;
mod type_desc;
mod width;

pub use codec::*;
pub use datum::*;
pub use error::*;
pub use lengths::*;
pub use type_desc::*;
pub use width::*;
