//! Encode/decode error taxonomy.
//!
//! All failures are immediate and local: the codec aborts at the first
//! error and returns no partial value. No error is downgraded to a default.

use bitdata_buffers::BufferError;
use thiserror::Error;

/// Errors produced while encoding a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A character of the string has no code in the selected alphabet.
    /// Only reachable through the digits path (e.g. a non-finite float's
    /// textual form); plain strings fall back to UTF-8 instead.
    #[error("character {0:?} not found in alphabet")]
    CharacterNotFoundInAlphabet(char),
    /// The string's UTF-8 form is 65536 bytes or longer.
    #[error("string of {0} bytes is too long to encode")]
    StringTooLong(usize),
    /// The collection has 65536 elements or more.
    #[error("collection of {0} elements is too big to encode")]
    CollectionTooLarge(usize),
    /// The number's magnitude exceeds the unsigned 64-bit ceiling.
    #[error("number is too big to encode")]
    NumberTooLarge,
}

/// Errors produced while decoding a buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The leading version field names a format newer than this build.
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),
    /// A 3-bit primary tag outside the assigned range 0-4.
    #[error("unknown primary tag {0}")]
    UnknownPrimaryTag(u8),
    /// A subtag bit pattern outside the enumerated set for its primary tag.
    #[error("unknown subtag {0}")]
    UnknownSubTag(u8),
    /// A character code with no assignment in the selected alphabet.
    #[error("character code {0} not found in alphabet")]
    CharacterNotFoundInAlphabet(u8),
    /// A UTF-8 payload that is not valid UTF-8.
    #[error("failed to decode UTF-8 string")]
    FailedToDecodeUtf8String,
    /// A digit string that parses as neither `i64`, `u64` nor `f64`.
    #[error("failed to decode number from digits {0:?}")]
    NumberDecodeFailure(String),
    /// A negative 64-bit magnitude below `i64::MIN`.
    #[error("number is too big to decode")]
    NumberTooLarge,
    /// The value tree nests deeper than the decoder's depth limit.
    #[error("nesting is too deep")]
    NestingTooDeep,
    /// The buffer ended in the middle of a field.
    #[error("unexpected end of data")]
    UnexpectedEndOfData,
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DecodeError::UnexpectedEndOfData,
        }
    }
}
