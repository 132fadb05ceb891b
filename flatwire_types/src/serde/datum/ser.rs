use crate::serde::{
    composite, Codec, Datum, FixedWidthInt, LengthPrefixedList, LengthPrefixedString, TypeDesc,
    WriteLen,
};
use anyhow::Result;
use std::io::Write;

impl TypeDesc {
    /// Validates `dat` against `self`, recursively, and totals its encoded length.
    pub(super) fn measure_datum(&self, dat: &Datum) -> Result<usize> {
        match (self, dat) {
            (TypeDesc::Int(width), Datum::Int(int)) => {
                FixedWidthInt::from(*width).narrow(*int)?;
                Ok(width.bytes())
            }
            (TypeDesc::Str, Datum::Str(s)) => LengthPrefixedString.measure(s),
            (TypeDesc::List(elem), Datum::List(elems)) => {
                LengthPrefixedList::new(elem.as_ref()).measure(elems)
            }
            (TypeDesc::Record(schema), Datum::Record(fields)) => {
                composite::measure_fields(schema, fields)
            }
            (_, dat) => Err(self.mismatch(dat)),
        }
    }

    pub(super) fn ser_datum<W: Write>(&self, dat: &Datum, w: &mut W) -> Result<WriteLen> {
        match (self, dat) {
            (TypeDesc::Int(width), Datum::Int(int)) => {
                let codec = FixedWidthInt::from(*width);
                let int = codec.narrow(*int)?;
                codec.ser_unchecked(&int, w)
            }
            (TypeDesc::Str, Datum::Str(s)) => LengthPrefixedString.ser_unchecked(s, w),
            (TypeDesc::List(elem), Datum::List(elems)) => {
                LengthPrefixedList::new(elem.as_ref()).ser_unchecked(elems, w)
            }
            (TypeDesc::Record(schema), Datum::Record(fields)) => {
                composite::ser_fields_unchecked(schema, fields, w)
            }
            (_, dat) => Err(self.mismatch(dat)),
        }
    }
}
