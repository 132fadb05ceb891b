use crate::io_utils;
use crate::serde::{Codec, CodecError, Width, WriteLen};
use anyhow::Result;
use derive_more::From;
use std::io::{Read, Write};
use std::mem;

const U64_LEN: usize = mem::size_of::<u64>();

/// An unsigned big-endian integer occupying exactly `width` bytes.
#[derive(From, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct FixedWidthInt {
    pub width: Width,
}

impl FixedWidthInt {
    /// Range-checks a possibly negative or oversized value against this width.
    pub fn narrow(&self, value: i128) -> Result<u64> {
        u64::try_from(value)
            .ok()
            .filter(|int| *int <= self.width.max_value())
            .ok_or_else(|| {
                CodecError::IntOutOfRange {
                    value,
                    width: self.width,
                }
                .into()
            })
    }
}

impl Codec for FixedWidthInt {
    type Value = u64;

    fn measure(&self, value: &u64) -> Result<usize> {
        self.narrow(i128::from(*value))?;
        Ok(self.width.bytes())
    }

    fn ser_unchecked<W: Write>(&self, value: &u64, w: &mut W) -> Result<WriteLen> {
        let buf = value.to_be_bytes();
        let body = &buf[U64_LEN - self.width.bytes()..];
        w.write_all(body)?;
        Ok(WriteLen::new_manual(body.len()))
    }

    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, u64)> {
        let mut buf = [0u8; U64_LEN];
        let body = &mut buf[U64_LEN - self.width.bytes()..];
        io_utils::read_exact(r, body, "fixed-width integer")?;
        let r_len = body.len();
        Ok((r_len, u64::from_be_bytes(buf)))
    }

    fn skip<R: Read>(&self, r: &mut R) -> Result<usize> {
        io_utils::skip_exact(r, self.width.bytes(), "fixed-width integer")?;
        Ok(self.width.bytes())
    }
}
