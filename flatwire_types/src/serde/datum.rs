use crate::serde::{Codec, CodecError, TypeDesc, WriteLen};
use anyhow::Result;
use std::io::{Read, Write};

mod deser;
mod ser;

/// A value whose shape is given at runtime by a [`TypeDesc`].
///
/// `Int` is wider than any width so that out-of-range input, including negative
/// input, can be expressed and rejected at serialization time.
/// A `Record` holds its field values in schema order.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Datum {
    Int(i128),
    Str(String),
    List(Vec<Datum>),
    Record(Vec<Datum>),
}

impl Datum {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }

    pub fn list<T: Into<Datum>>(elems: impl IntoIterator<Item = T>) -> Self {
        Self::List(elems.into_iter().map(Into::into).collect())
    }

    pub fn into_vec<T, E>(self) -> Result<Vec<T>>
    where
        T: TryFrom<Datum, Error = E>,
        E: Into<anyhow::Error>,
    {
        match self {
            Self::List(elems) => elems
                .into_iter()
                .map(|elem| T::try_from(elem).map_err(Into::into))
                .collect(),
            other => Err(mismatch("list", &other)),
        }
    }

    pub fn into_fields(self) -> Result<Vec<Datum>> {
        match self {
            Self::Record(fields) => Ok(fields),
            other => Err(mismatch("record", &other)),
        }
    }
}

fn mismatch(expected: impl ToString, actual: &Datum) -> anyhow::Error {
    CodecError::DatumMismatch {
        expected: expected.to_string(),
        actual: actual.kind_name().to_string(),
    }
    .into()
}

/* Conversions into Datum. */
macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Datum {
                fn from(int: $t) -> Self {
                    Self::Int(i128::from(int))
                }
            }
        )*
    };
}
impl_from_int!(u8, u16, u32, u64, i128);

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}

/* Conversions out of Datum. */
macro_rules! impl_try_into_uint {
    ($($t:ty),*) => {
        $(
            impl TryFrom<Datum> for $t {
                type Error = anyhow::Error;
                fn try_from(dat: Datum) -> Result<Self> {
                    match dat {
                        Datum::Int(int) => <$t>::try_from(int).map_err(|_| {
                            CodecError::DatumMismatch {
                                expected: String::from(stringify!($t)),
                                actual: int.to_string(),
                            }
                            .into()
                        }),
                        other => Err(mismatch(stringify!($t), &other)),
                    }
                }
            }
        )*
    };
}
impl_try_into_uint!(u8, u16, u32, u64);

impl TryFrom<Datum> for String {
    type Error = anyhow::Error;
    fn try_from(dat: Datum) -> Result<Self> {
        match dat {
            Datum::Str(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

/// A [`TypeDesc`] is the codec of [`Datum`]s of its shape.
impl Codec for TypeDesc {
    type Value = Datum;

    fn measure(&self, value: &Datum) -> Result<usize> {
        self.measure_datum(value)
    }
    fn ser_unchecked<W: Write>(&self, value: &Datum, w: &mut W) -> Result<WriteLen> {
        self.ser_datum(value, w)
    }
    fn deser<R: Read>(&self, r: &mut R) -> Result<(usize, Datum)> {
        self.deser_datum(r)
    }
    fn skip<R: Read>(&self, r: &mut R) -> Result<usize> {
        self.skip_datum(r)
    }
}

impl TypeDesc {
    fn mismatch(&self, actual: &Datum) -> anyhow::Error {
        mismatch(self, actual)
    }
}
