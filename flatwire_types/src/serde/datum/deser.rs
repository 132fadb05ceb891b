use crate::serde::{
    composite, Codec, Datum, FixedWidthInt, LengthPrefixedList, LengthPrefixedString, TypeDesc,
};
use anyhow::Result;
use std::io::Read;

impl TypeDesc {
    pub(super) fn deser_datum<R: Read>(&self, r: &mut R) -> Result<(usize, Datum)> {
        match self {
            TypeDesc::Int(width) => {
                let (r_len, int) = FixedWidthInt::from(*width).deser(r)?;
                Ok((r_len, Datum::Int(i128::from(int))))
            }
            TypeDesc::Str => {
                let (r_len, s) = LengthPrefixedString.deser(r)?;
                Ok((r_len, Datum::Str(s)))
            }
            TypeDesc::List(elem) => {
                let (r_len, elems) = LengthPrefixedList::new(elem.as_ref()).deser(r)?;
                Ok((r_len, Datum::List(elems)))
            }
            TypeDesc::Record(schema) => {
                let (r_len, fields) = composite::deser_fields(schema, r)?;
                Ok((r_len, Datum::Record(fields)))
            }
        }
    }

    pub(super) fn skip_datum<R: Read>(&self, r: &mut R) -> Result<usize> {
        match self {
            TypeDesc::Int(width) => FixedWidthInt::from(*width).skip(r),
            TypeDesc::Str => LengthPrefixedString.skip(r),
            TypeDesc::List(elem) => LengthPrefixedList::new(elem.as_ref()).skip(r),
            TypeDesc::Record(schema) => composite::skip_fields(schema, r),
        }
    }
}
