use crate::serde::{composite, Codec, CodecError, Datum, Schema, TypeDesc, WriteLen};
use anyhow::Result;
use std::io::{Read, Write};
use std::marker::PhantomData;

/// A struct that declares its own fields, in wire order.
///
/// [`Record::schema`] and [`Record::to_fields`] must agree in length and order;
/// [`Record::from_fields`] receives fields in the same order.
///
/// ```text
/// impl Record for Order {
///     fn schema() -> Schema {
///         Schema::new()
///             .field("id", Width::Long)
///             .field("tags", TypeDesc::list_of(TypeDesc::Str))
///     }
///     fn to_fields(&self) -> Vec<Datum> {
///         vec![Datum::from(self.id), Datum::list(self.tags.iter().map(String::as_str))]
///     }
///     fn from_fields(fields: Vec<Datum>) -> Result<Self> {
///         let [id, tags] = take_fields(fields)?;
///         Ok(Self { id: id.try_into()?, tags: tags.into_vec()? })
///     }
/// }
/// ```
pub trait Record: Sized {
    fn schema() -> Schema;
    fn to_fields(&self) -> Vec<Datum>;
    fn from_fields(fields: Vec<Datum>) -> Result<Self>;

    fn type_desc() -> TypeDesc {
        TypeDesc::Record(Self::schema())
    }
    fn to_datum(&self) -> Datum {
        Datum::Record(self.to_fields())
    }
    fn from_datum(dat: Datum) -> Result<Self> {
        Self::from_fields(dat.into_fields()?)
    }
}

/// Splits a record's fields into a fixed-size array, for destructuring in [`Record::from_fields`].
pub fn take_fields<const N: usize>(fields: Vec<Datum>) -> Result<[Datum; N]> {
    let actual = fields.len();
    fields.try_into().map_err(|_| {
        CodecError::FieldCountMismatch {
            expected: N,
            actual,
        }
        .into()
    })
}

/// The codec of a [`Record`] type. The schema is captured once, at construction.
pub struct RecordCodec<T> {
    schema: Schema,
    _phant: PhantomData<fn() -> T>,
}

impl<T: Record> RecordCodec<T> {
    pub fn new() -> Self {
        Self {
            schema: T::schema(),
            _phant: PhantomData,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl<T: Record> Default for RecordCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordCodec<T> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            _phant: PhantomData,
        }
    }
}

impl<T: Record> Codec for RecordCodec<T> {
    type Value = T;

    fn measure(&self, value: &T) -> Result<usize> {
        composite::measure_fields(&self.schema, &value.to_fields())
    }

    fn ser_unchecked<W: Write>(&self, value: &T, w: &mut W) -> Result<WriteLen> {
        composite::ser_fields_unchecked(&self.schema, &value.to_fields(), w)
    }

    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, T)> {
        let (r_len, fields) = composite::deser_fields(&self.schema, r)?;
        Ok((r_len, T::from_fields(fields)?))
    }

    fn skip<R: Read>(&self, r: &mut R) -> Result<usize> {
        composite::skip_fields(&self.schema, r)
    }

    /* The overrides below collect the fields only once. */

    fn ser<W: Write>(&self, value: &T, w: &mut W) -> Result<WriteLen> {
        composite::ser_fields(&self.schema, &value.to_fields(), w)
    }

    fn ser_solo(&self, value: &T) -> Result<Vec<u8>> {
        let fields = value.to_fields();
        let len = composite::measure_fields(&self.schema, &fields)?;
        let mut buf = Vec::with_capacity(len);
        composite::ser_fields_unchecked(&self.schema, &fields, &mut buf)?;
        Ok(buf)
    }
}
