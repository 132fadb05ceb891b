use crate::serde::CodecError;
use anyhow::Result;
use std::io::{self, BufRead, ErrorKind, Read};

/// Like [`Read::read_exact`], except a short read becomes [`CodecError::Truncated`].
pub fn read_exact(r: &mut impl Read, buf: &mut [u8], what: &'static str) -> Result<()> {
    match r.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(CodecError::Truncated {
            what,
            needed: buf.len(),
        }
        .into()),
        Err(e) => Err(e.into()),
    }
}

pub fn read_vec(r: &mut impl Read, len: usize, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    read_exact(r, &mut buf, what)?;
    Ok(buf)
}

/// Advances `r` by exactly `len` bytes without keeping them.
pub fn skip_exact<R: Read>(r: &mut R, len: usize, what: &'static str) -> Result<()> {
    let skipped = io::copy(&mut r.by_ref().take(len as u64), &mut io::sink())?;
    if skipped < len as u64 {
        return Err(CodecError::Truncated { what, needed: len }.into());
    }
    Ok(())
}

/// Whether the stream has no more bytes.
/// Only meaningful between top-level values; a codec never consults it mid-value.
pub fn is_at_end(r: &mut impl BufRead) -> Result<bool> {
    Ok(r.fill_buf()?.is_empty())
}
