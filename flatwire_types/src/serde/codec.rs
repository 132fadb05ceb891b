use crate::serde::CodecError;
use anyhow::Result;
use derive_more::Deref;
use std::io::{Cursor, Read, Write};

mod fixed_int;
mod list;
mod string;

pub use fixed_int::*;
pub use list::*;
pub use string::*;

/// Count of bytes written.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

/// A codec for one shape of value.
///
/// Writing is two-phase. [`Codec::measure`] validates a value and computes its
/// encoded length without writing; [`Codec::ser_unchecked`] writes a value that
/// `measure` accepted. [`Codec::ser`] runs both, so a rejected value leaves the
/// writer untouched.
///
/// Reading advances the reader by exactly the bytes of one value and reports that count.
pub trait Codec {
    type Value;

    fn measure(&self, value: &Self::Value) -> Result<usize>;

    /// Writes `value` without validating it.
    /// An integer beyond its width is written with its high bytes dropped.
    fn ser_unchecked<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen>;

    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, Self::Value)>;

    fn skip<R: Read>(&self, r: &mut R) -> Result<usize>;

    fn ser<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen> {
        self.measure(value)?;
        self.ser_unchecked(value, w)
    }

    fn ser_solo(&self, value: &Self::Value) -> Result<Vec<u8>> {
        let len = self.measure(value)?;
        let mut buf = Vec::with_capacity(len);
        self.ser_unchecked(value, &mut buf)?;
        Ok(buf)
    }

    /// Reads one value that must span all of `buf`.
    fn deser_solo(&self, buf: &[u8]) -> Result<Self::Value> {
        let mut r = Cursor::new(buf);
        let (r_len, value) = self.deser(&mut r)?;
        if r_len < buf.len() {
            return Err(CodecError::TrailingBytes {
                trailing: buf.len() - r_len,
            }
            .into());
        }
        Ok(value)
    }
}

impl<C: Codec> Codec for &C {
    type Value = C::Value;

    fn measure(&self, value: &Self::Value) -> Result<usize> {
        (*self).measure(value)
    }
    fn ser_unchecked<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen> {
        (*self).ser_unchecked(value, w)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, Self::Value)> {
        (*self).deser(r)
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<usize> {
        (*self).skip(r)
    }
}
