use crate::serde::{
    Codec, CodecError, ListElemsCount, WriteLen, LIST_COUNT_PREFIX, MAX_ZERO_WIDTH_ELEMS,
};
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// A homogeneous sequence behind a 4-byte element count.
///
/// The element layout comes entirely from `elem`; nothing about it is on the wire.
/// Decoding reads exactly the declared count of elements and never looks past them,
/// so whatever follows the list stays unread.
///
/// Elements that occupy no bytes are capped at [`MAX_ZERO_WIDTH_ELEMS`] per list,
/// both when writing and when reading.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct LengthPrefixedList<C> {
    pub elem: C,
}

impl<C> LengthPrefixedList<C> {
    pub fn new(elem: C) -> Self {
        Self { elem }
    }
}

impl<C: Codec> Codec for LengthPrefixedList<C> {
    type Value = Vec<C::Value>;

    fn measure(&self, value: &Self::Value) -> Result<usize> {
        ListElemsCount::from_elems(value)?;
        let len = value
            .iter()
            .try_fold(LIST_COUNT_PREFIX, |len, elem| -> Result<usize> {
                Ok(len + self.elem.measure(elem)?)
            })?;
        if len == LIST_COUNT_PREFIX && value.len() > MAX_ZERO_WIDTH_ELEMS {
            return Err(CodecError::ZeroWidthListTooLong { len: value.len() }.into());
        }
        Ok(len)
    }

    fn ser_unchecked<W: Write>(&self, value: &Self::Value, w: &mut W) -> Result<WriteLen> {
        /* elems_count */
        let mut w_len = ListElemsCount::from_elems(value)?.ser(w)?;

        /* elems */
        for elem in value {
            w_len += *self.elem.ser_unchecked(elem, w)?;
        }

        Ok(WriteLen::new_manual(w_len))
    }

    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, Self::Value)> {
        /* elems_count */
        let (mut r_len, elems_ct) = ListElemsCount::deser(r)?;
        tracing::trace!(elems_ct = *elems_ct, "reading list");

        /* elems */
        let mut elems = Vec::with_capacity(elems_ct.prealloc());
        for elem_i in 0..*elems_ct {
            let (delta_r_len, elem) = self
                .elem
                .deser(r)
                .with_context(|| format!("list element {elem_i} of {}", *elems_ct))?;
            check_elem_width(delta_r_len, elems_ct)?;
            r_len += delta_r_len;
            elems.push(elem);
        }

        Ok((r_len, elems))
    }

    fn skip<R: Read>(&self, r: &mut R) -> Result<usize> {
        let (mut r_len, elems_ct) = ListElemsCount::deser(r)?;
        for elem_i in 0..*elems_ct {
            let delta_r_len = self
                .elem
                .skip(r)
                .with_context(|| format!("list element {elem_i} of {}", *elems_ct))?;
            check_elem_width(delta_r_len, elems_ct)?;
            r_len += delta_r_len;
        }
        Ok(r_len)
    }
}

/// Stops an oversized list at its first element that consumed no bytes.
fn check_elem_width(elem_r_len: usize, elems_ct: ListElemsCount) -> Result<()> {
    if elem_r_len == 0 && *elems_ct as usize > MAX_ZERO_WIDTH_ELEMS {
        return Err(CodecError::ZeroWidthElems { count: *elems_ct }.into());
    }
    Ok(())
}
