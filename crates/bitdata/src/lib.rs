//! BitData — compact bit-packed binary serialization for dynamic value
//! trees (null, booleans, numbers, strings, arrays, string-keyed
//! dictionaries).
//!
//! Type discriminators and payloads are packed at bit granularity: a 3-bit
//! primary tag picks the kind, a 2/3-bit subtag picks the most compact
//! representation the encoder found — narrowest magnitude width for
//! numbers, smallest covering alphabet for strings, cheapest
//! count/termination scheme for collections, with repeated primary tags
//! elided across homogeneous collection elements.
//!
//! [`to_bytes`] / [`from_bytes`] frame the value with a 2-bit format
//! version; [`encode_value`] / [`decode_value`] expose the raw grammar.
//!
//! ```
//! use bitdata::{from_bytes, to_bytes, BitValue};
//!
//! let value = BitValue::Array(vec![
//!     BitValue::Int(1),
//!     BitValue::Int(2),
//!     BitValue::Int(3),
//! ]);
//! let bytes = to_bytes(&value).unwrap();
//! assert_eq!(from_bytes(&bytes).unwrap(), value);
//! ```

pub mod alphabet;
mod constants;
mod decoder;
mod encoder;
mod error;
mod tag;
mod value;

pub use alphabet::Alphabet;
pub use constants::{
    FORMAT_VERSION, MAX_COLLECTION_SIZE, MAX_NESTING_DEPTH, MAX_STRING_BYTES,
    VERSION_SIZE_IN_BITS,
};
pub use decoder::BitDataDecoder;
pub use encoder::BitDataEncoder;
pub use error::{DecodeError, EncodeError};
pub use tag::{CollectionTag, NumberTag, PrimaryTag, PrimitiveTag, StringTag};
pub use value::BitValue;

pub use bitdata_buffers::{BitReader, BitWriter, BufferError};

/// Encodes a value without any framing; the output starts directly with
/// the value's primary tag.
pub fn encode_value(value: &BitValue) -> Result<Vec<u8>, EncodeError> {
    BitDataEncoder::new().encode(value)
}

/// Decodes a value produced by [`encode_value`].
pub fn decode_value(data: &[u8]) -> Result<BitValue, DecodeError> {
    BitDataDecoder::new(data).read_any(None)
}

/// Encodes a value prefixed with the 2-bit format version.
pub fn to_bytes(value: &BitValue) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = BitDataEncoder::new();
    encoder
        .writer
        .write_bits(FORMAT_VERSION as u64, VERSION_SIZE_IN_BITS);
    encoder.write_any(value, true)?;
    Ok(encoder.writer.to_bytes())
}

/// Decodes a value produced by [`to_bytes`], checking the version field.
pub fn from_bytes(data: &[u8]) -> Result<BitValue, DecodeError> {
    let mut decoder = BitDataDecoder::new(data);
    let version = decoder.reader.read_bits(VERSION_SIZE_IN_BITS)? as u8;
    if version > FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }
    decoder.read_any(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framed_roundtrip() {
        let value = BitValue::Dict(vec![
            ("id".to_string(), BitValue::Int(17)),
            ("name".to_string(), BitValue::Str("bitdata".to_string())),
        ]);
        let bytes = to_bytes(&value).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn version_field_shifts_the_grammar_by_two_bits() {
        // Version 00 then primitive true (000 01).
        assert_eq!(to_bytes(&BitValue::Bool(true)).unwrap(), vec![0b0000_0010]);
    }

    #[test]
    fn newer_version_is_rejected() {
        let mut writer = BitWriter::new();
        writer.write_bits(1, VERSION_SIZE_IN_BITS);
        writer.write_bits(0b000, 3);
        writer.write_bits(0b00, 2);
        assert_eq!(
            from_bytes(&writer.to_bytes()),
            Err(DecodeError::UnsupportedVersion(1))
        );
    }

    #[test]
    fn unframed_entry_points_match_the_encoder_types() {
        let value = BitValue::Str("plain".to_string());
        let bytes = encode_value(&value).unwrap();
        assert_eq!(bytes, BitDataEncoder::new().encode(&value).unwrap());
        assert_eq!(decode_value(&bytes).unwrap(), value);
    }
}
