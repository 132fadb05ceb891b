use crate::io_utils;
use crate::serde::{Codec, CodecError, StrBodyLen, WriteLen, STR_LEN_PREFIX};
use anyhow::Result;
use std::io::{Read, Write};

/// UTF-8 text behind a 2-byte count of its bytes.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct LengthPrefixedString;

impl Codec for LengthPrefixedString {
    type Value = String;

    fn measure(&self, value: &String) -> Result<usize> {
        let body_len = StrBodyLen::from_body(value.as_bytes())?;
        Ok(STR_LEN_PREFIX + *body_len as usize)
    }

    fn ser_unchecked<W: Write>(&self, value: &String, w: &mut W) -> Result<WriteLen> {
        let body = value.as_bytes();
        let mut w_len = StrBodyLen::from_body(body)?.ser(w)?;
        w.write_all(body)?;
        w_len += body.len();
        Ok(WriteLen::new_manual(w_len))
    }

    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, String)> {
        let (mut r_len, body_len) = StrBodyLen::deser(r)?;
        let body = io_utils::read_vec(r, *body_len as usize, "string body")?;
        r_len += body.len();
        let s = String::from_utf8(body).map_err(CodecError::from)?;
        Ok((r_len, s))
    }

    fn skip<R: Read>(&self, r: &mut R) -> Result<usize> {
        let (r_len, body_len) = StrBodyLen::deser(r)?;
        io_utils::skip_exact(r, *body_len as usize, "string body")?;
        Ok(r_len + *body_len as usize)
    }
}
