use crate::io_utils;
use crate::serde::{Codec, WriteLen};
use crate::types::{Record, RecordCodec};
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

pub trait Ser {
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen>;
    fn ser_solo(&self) -> Result<Vec<u8>>;
}

/// Reads values laid back to back on a stream.
///
/// [`ReadResult::EOF`] means the stream ended cleanly before the value.
/// A stream that ends partway through a value is an error.
pub trait Deser: Sized {
    fn skip<R: BufRead>(r: &mut R) -> Result<ReadResult<()>>;
    fn deser<R: BufRead>(r: &mut R) -> Result<ReadResult<Self>>;

    /// Reads one value that must span all of `buf`.
    fn deser_solo(buf: &[u8]) -> Result<Self>;
}

/* Blanket impls for Record */
impl<T: Record> Ser for T {
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        RecordCodec::<T>::new().ser(self, w)
    }
    fn ser_solo(&self) -> Result<Vec<u8>> {
        RecordCodec::<T>::new().ser_solo(self)
    }
}
impl<T: Record> Deser for T {
    fn skip<R: BufRead>(r: &mut R) -> Result<ReadResult<()>> {
        if io_utils::is_at_end(r)? {
            return Ok(ReadResult::EOF);
        }
        let r_len = RecordCodec::<T>::new().skip(r)?;
        Ok(ReadResult::Some(r_len, ()))
    }
    fn deser<R: BufRead>(r: &mut R) -> Result<ReadResult<Self>> {
        if io_utils::is_at_end(r)? {
            return Ok(ReadResult::EOF);
        }
        let (r_len, moi) = RecordCodec::<T>::new().deser(r)?;
        Ok(ReadResult::Some(r_len, moi))
    }

    /// An empty `buf` is accepted when `T` has no fields.
    fn deser_solo(buf: &[u8]) -> Result<Self> {
        RecordCodec::<T>::new().deser_solo(buf)
    }
}
