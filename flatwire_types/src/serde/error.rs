use crate::serde::{Width, MAX_ZERO_WIDTH_ELEMS};
use std::string::FromUtf8Error;

/// Coarse classification of [`CodecError`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ErrorKind {
    /// A value does not fit its prefix or width. Raised before anything is written.
    Range,
    /// The input ended before a read was satisfied.
    Truncation,
    /// The input bytes are not a valid encoding.
    Decode,
    /// A [`crate::serde::Datum`] does not match the descriptor it is used with.
    Shape,
}

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("{value} does not fit in a {width}-byte unsigned integer")]
    IntOutOfRange { value: i128, width: Width },

    #[error("string body of {len} bytes does not fit a 2-byte length prefix")]
    StrTooLong { len: usize },

    #[error("list of {len} elements does not fit a 4-byte count prefix")]
    ListTooLong { len: usize },

    #[error("list of {len} zero-width elements exceeds {}", MAX_ZERO_WIDTH_ELEMS)]
    ZeroWidthListTooLong { len: usize },

    #[error("input ended while reading {what} ({needed} bytes needed)")]
    Truncated { what: &'static str, needed: usize },

    #[error("string body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("list declares {count} zero-width elements, more than {}", MAX_ZERO_WIDTH_ELEMS)]
    ZeroWidthElems { count: u32 },

    #[error("{trailing} trailing bytes after the value")]
    TrailingBytes { trailing: usize },

    #[error("expected {expected}, got {actual}")]
    DatumMismatch { expected: String, actual: String },

    #[error("schema declares {expected} fields, got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IntOutOfRange { .. }
            | Self::StrTooLong { .. }
            | Self::ListTooLong { .. }
            | Self::ZeroWidthListTooLong { .. } => ErrorKind::Range,
            Self::Truncated { .. } => ErrorKind::Truncation,
            Self::InvalidUtf8(_) | Self::ZeroWidthElems { .. } | Self::TrailingBytes { .. } => {
                ErrorKind::Decode
            }
            Self::DatumMismatch { .. } | Self::FieldCountMismatch { .. } => ErrorKind::Shape,
        }
    }
}

/// The [`ErrorKind`] of the first [`CodecError`] in `err`'s chain, if any.
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CodecError>())
        .map(CodecError::kind)
}
