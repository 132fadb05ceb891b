//! Readers, writers, and iterators over streams of values laid back to back,
//! all encoded by one [`crate::serde::Codec`].
//! There is no separator between neighboring values and no count up front;
//! the stream simply ends after the last value.
//!
//! ```text
//! struct Stream {
//!     value_0: C::Value,
//!     value_1: C::Value,
//!     ...
//!     // where C: Codec
//! }
//! ```

mod iter_values;
mod reader;
mod writer;

pub use iter_values::*;
pub use reader::*;
pub use writer::*;
