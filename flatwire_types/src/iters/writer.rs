use crate::serde::{Codec, WriteLen};
use anyhow::Result;
use std::io::{BufWriter, Write};

pub struct ValueWriter<W: Write, C> {
    w: BufWriter<W>,
    codec: C,
    offset: u64,
}

impl<W, C> ValueWriter<W, C>
where
    W: Write,
    C: Codec,
{
    pub fn new(w: W, codec: C) -> Self {
        Self {
            w: BufWriter::new(w),
            codec,
            offset: 0,
        }
    }

    /// Appends one value. A value the codec rejects leaves the stream unchanged.
    pub fn put(&mut self, value: &C::Value) -> Result<WriteLen> {
        let w_len = self.codec.ser(value, &mut self.w)?;
        self.offset += *w_len as u64;
        Ok(w_len)
    }

    /// Count of bytes written so far, flushed or not.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn flush(&mut self) -> Result<()> {
        self.w.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        let w = self.w.into_inner().map_err(|e| e.into_error())?;
        Ok(w)
    }
}
