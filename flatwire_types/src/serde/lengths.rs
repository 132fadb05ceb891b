use crate::io_utils;
use crate::serde::CodecError;
use anyhow::Result;
use derive_more::Deref;
use std::io::{Read, Write};
use std::mem;

pub const STR_LEN_PREFIX: usize = mem::size_of::<u16>();
pub const LIST_COUNT_PREFIX: usize = mem::size_of::<u32>();

pub const MAX_STR_BYTES: usize = u16::MAX as usize;
pub const MAX_LIST_ELEMS: usize = u32::MAX as usize;

/// A list's declared count is not trusted for pre-allocation beyond this many elements.
pub const MAX_LIST_PREALLOC: usize = 4096;

/// Most elements a list may hold when its elements occupy no bytes, e.g. records without fields.
/// Past this, a declared count would stand for values with no input behind them.
pub const MAX_ZERO_WIDTH_ELEMS: usize = MAX_LIST_PREALLOC;

#[derive(Deref, Clone, Copy, Debug)]
pub struct StrBodyLen(u16);
impl StrBodyLen {
    pub fn from_body(buf: &[u8]) -> Result<Self> {
        let int =
            u16::try_from(buf.len()).map_err(|_| CodecError::StrTooLong { len: buf.len() })?;
        Ok(Self(int))
    }
    pub fn ser(self, w: &mut impl Write) -> Result<usize> {
        let buf = self.0.to_be_bytes();
        w.write_all(&buf)?;
        Ok(buf.len())
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self)> {
        let mut buf = [0u8; STR_LEN_PREFIX];
        io_utils::read_exact(r, &mut buf, "string length prefix")?;
        let int = u16::from_be_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

#[derive(Deref, Clone, Copy, Debug)]
pub struct ListElemsCount(u32);
impl ListElemsCount {
    pub fn from_elems<T>(elems: &[T]) -> Result<Self> {
        let elems_ct =
            u32::try_from(elems.len()).map_err(|_| CodecError::ListTooLong { len: elems.len() })?;
        Ok(Self(elems_ct))
    }
    pub fn ser(self, w: &mut impl Write) -> Result<usize> {
        let buf = self.0.to_be_bytes();
        w.write_all(&buf)?;
        Ok(buf.len())
    }
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self)> {
        let mut buf = [0u8; LIST_COUNT_PREFIX];
        io_utils::read_exact(r, &mut buf, "list count prefix")?;
        let int = u32::from_be_bytes(buf);
        Ok((buf.len(), Self(int)))
    }

    pub fn prealloc(self) -> usize {
        (self.0 as usize).min(MAX_LIST_PREALLOC)
    }
}
