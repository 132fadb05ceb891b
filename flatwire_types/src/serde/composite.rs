//! Composite records: field encodings concatenated in declaration order.
//!
//! The dispatcher works on ordered `(descriptor, value)` pairs. Where those pairs
//! come from is up to the caller; [`crate::types::Record`] is one source.

use crate::serde::{Codec, CodecError, Datum, Schema, TypeDesc, WriteLen};
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// Validates every pair and totals the encoded length.
pub fn measure_pairs<'a>(
    pairs: impl IntoIterator<Item = (&'a TypeDesc, &'a Datum)>,
) -> Result<usize> {
    pairs
        .into_iter()
        .enumerate()
        .try_fold(0, |len, (field_i, (type_desc, dat))| -> Result<usize> {
            let field_len = type_desc
                .measure(dat)
                .with_context(|| format!("field {field_i} ({type_desc})"))?;
            Ok(len + field_len)
        })
}

pub fn ser_pairs_unchecked<'a, W: Write>(
    pairs: impl IntoIterator<Item = (&'a TypeDesc, &'a Datum)>,
    w: &mut W,
) -> Result<WriteLen> {
    let mut w_len = 0;
    for (field_i, (type_desc, dat)) in pairs.into_iter().enumerate() {
        tracing::trace!(field_i, %type_desc, "writing field");
        w_len += *type_desc.ser_unchecked(dat, w)?;
    }
    Ok(WriteLen::new_manual(w_len))
}

/// Serializes the pairs in order. Nothing is written unless every pair is valid.
pub fn ser_pairs<'a, W, I>(pairs: I, w: &mut W) -> Result<WriteLen>
where
    W: Write,
    I: IntoIterator<Item = (&'a TypeDesc, &'a Datum)> + Clone,
{
    measure_pairs(pairs.clone())?;
    ser_pairs_unchecked(pairs, w)
}

fn zip_fields<'a>(
    schema: &'a Schema,
    fields: &'a [Datum],
) -> Result<impl Iterator<Item = (&'a TypeDesc, &'a Datum)> + Clone + 'a> {
    if schema.len() != fields.len() {
        return Err(CodecError::FieldCountMismatch {
            expected: schema.len(),
            actual: fields.len(),
        }
        .into());
    }
    let type_descs = schema.fields().iter().map(|field| &field.type_desc);
    Ok(type_descs.zip(fields))
}

pub fn measure_fields(schema: &Schema, fields: &[Datum]) -> Result<usize> {
    measure_pairs(zip_fields(schema, fields)?)
}

pub fn ser_fields_unchecked<W: Write>(
    schema: &Schema,
    fields: &[Datum],
    w: &mut W,
) -> Result<WriteLen> {
    ser_pairs_unchecked(zip_fields(schema, fields)?, w)
}

pub fn ser_fields<W: Write>(schema: &Schema, fields: &[Datum], w: &mut W) -> Result<WriteLen> {
    ser_pairs(zip_fields(schema, fields)?, w)
}

/// Reads one value per schema field, in schema order.
pub fn deser_fields<R: Read>(schema: &Schema, r: &mut R) -> Result<(usize, Vec<Datum>)> {
    let mut r_len = 0;
    let mut fields = Vec::with_capacity(schema.len());
    for field in schema.fields() {
        tracing::trace!(field = %field.name, type_desc = %field.type_desc, "reading field");
        let (delta_r_len, dat) = field
            .type_desc
            .deser(r)
            .with_context(|| format!("field `{}` ({})", field.name, field.type_desc))?;
        r_len += delta_r_len;
        fields.push(dat);
    }
    Ok((r_len, fields))
}

pub fn skip_fields<R: Read>(schema: &Schema, r: &mut R) -> Result<usize> {
    let mut r_len = 0;
    for field in schema.fields() {
        r_len += field
            .type_desc
            .skip(r)
            .with_context(|| format!("field `{}` ({})", field.name, field.type_desc))?;
    }
    Ok(r_len)
}
