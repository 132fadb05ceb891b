use crate::{io_utils, iters::ValueIterator, serde::Codec, types::ReadResult};
use anyhow::{anyhow, Context, Result};
use std::io::{BufReader, Read};

/// Reads values laid back to back.
///
/// A value that fails to decode may have been partly consumed, so the reader is
/// misaligned from then on. Every later call fails, naming the offset of the failed value.
pub struct ValueReader<R, C> {
    r: BufReader<R>,
    codec: C,
    offset: u64,
    failed_at: Option<u64>,
}

impl<R, C> ValueReader<R, C>
where
    R: Read,
{
    pub fn new(r: R, codec: C) -> Self {
        Self {
            r: BufReader::new(r),
            codec,
            offset: 0,
            failed_at: None,
        }
    }

    /// Count of bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl<R, C> ValueReader<R, C>
where
    R: Read,
    C: Codec,
{
    pub fn deser_next(&mut self) -> Result<ReadResult<C::Value>> {
        self.check_aligned()?;
        if io_utils::is_at_end(&mut self.r)? {
            tracing::debug!(offset = self.offset, "end of stream");
            return Ok(ReadResult::EOF);
        }

        let offset = self.offset;
        let res = self
            .codec
            .deser(&mut self.r)
            .with_context(|| format!("value at offset {offset}"));
        let (r_len, value) = self.fail_on_err(res)?;
        self.advance(r_len)?;

        Ok(ReadResult::Some(r_len, value))
    }

    pub fn skip_next(&mut self) -> Result<ReadResult<()>> {
        self.check_aligned()?;
        if io_utils::is_at_end(&mut self.r)? {
            return Ok(ReadResult::EOF);
        }

        let offset = self.offset;
        let res = self
            .codec
            .skip(&mut self.r)
            .with_context(|| format!("value at offset {offset}"));
        let r_len = self.fail_on_err(res)?;
        self.advance(r_len)?;

        Ok(ReadResult::Some(r_len, ()))
    }

    fn check_aligned(&self) -> Result<()> {
        match self.failed_at {
            Some(offset) => Err(anyhow!(
                "Stream is misaligned since the value at offset {offset} failed."
            )),
            None => Ok(()),
        }
    }

    fn fail_on_err<T>(&mut self, res: Result<T>) -> Result<T> {
        if res.is_err() {
            tracing::debug!(offset = self.offset, "value failed; reader is now misaligned");
            self.failed_at = Some(self.offset);
        }
        res
    }

    fn advance(&mut self, r_len: usize) -> Result<()> {
        if r_len == 0 {
            self.failed_at = Some(self.offset);
            return Err(anyhow!(
                "Value at offset {} consumed no bytes; the stream cannot advance.",
                self.offset
            ));
        }
        self.offset += r_len as u64;
        Ok(())
    }

    pub fn into_iter_values(self) -> ValueIterator<R, C> {
        ValueIterator::from(self)
    }
}
