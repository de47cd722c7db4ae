//! `BitDataEncoder` — bit-packing encoder for [`BitValue`] trees.
//!
//! Every value is written as the most compact representation available:
//! numbers pick the narrowest magnitude width (or a digit string below
//! 1000), strings pick the smallest alphabet that covers them (or raw
//! UTF-8), and collections pick the cheapest count/termination scheme,
//! eliding repeated primary tags when every element shares one.

use bitdata_buffers::BitWriter;

use crate::alphabet::{self, Alphabet};
use crate::constants::*;
use crate::error::EncodeError;
use crate::tag::{CollectionTag, NumberTag, PrimaryTag, PrimitiveTag, StringTag};
use crate::value::BitValue;

pub struct BitDataEncoder {
    pub writer: BitWriter,
}

impl Default for BitDataEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BitDataEncoder {
    pub fn new() -> Self {
        Self {
            writer: BitWriter::new(),
        }
    }

    /// Encodes a whole value tree and returns the packed bytes.
    ///
    /// The output carries no version prefix; see [`crate::to_bytes`] for
    /// the framed variant.
    pub fn encode(&mut self, value: &BitValue) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_any(value, true)?;
        Ok(self.writer.to_bytes())
    }

    /// Writes one value, optionally preceded by its 3-bit primary tag.
    ///
    /// `include_tag` is false only when the caller has already established
    /// the element's primary tag through same-type elision.
    pub fn write_any(&mut self, value: &BitValue, include_tag: bool) -> Result<(), EncodeError> {
        if include_tag {
            self.write_primary_tag(value.primary_tag());
        }
        match value {
            BitValue::Null => self.write_primitive_tag(PrimitiveTag::Null),
            BitValue::Bool(true) => self.write_primitive_tag(PrimitiveTag::True),
            BitValue::Bool(false) => self.write_primitive_tag(PrimitiveTag::False),
            BitValue::Int(v) => self.write_number(v.unsigned_abs(), *v >= 0)?,
            BitValue::UInt(v) => self.write_number(*v, true)?,
            BitValue::Float(v) => self.write_digits(&v.to_string())?,
            BitValue::Str(s) => self.write_string(s)?,
            BitValue::Array(items) => self.write_array(items)?,
            BitValue::Dict(entries) => self.write_dictionary(entries)?,
        }
        Ok(())
    }

    #[inline]
    fn write_primary_tag(&mut self, tag: PrimaryTag) {
        self.writer
            .write_bits(tag.bits() as u64, PrimaryTag::SIZE_IN_BITS);
    }

    #[inline]
    fn write_primitive_tag(&mut self, tag: PrimitiveTag) {
        self.writer
            .write_bits(tag.bits() as u64, PrimitiveTag::SIZE_IN_BITS);
    }

    #[inline]
    fn write_number_tag(&mut self, tag: NumberTag) {
        self.writer
            .write_bits(tag.bits() as u64, NumberTag::SIZE_IN_BITS);
    }

    #[inline]
    fn write_string_tag(&mut self, tag: StringTag) {
        self.writer
            .write_bits(tag.bits() as u64, StringTag::SIZE_IN_BITS);
    }

    #[inline]
    fn write_collection_tag(&mut self, tag: CollectionTag) {
        self.writer
            .write_bits(tag.bits() as u64, CollectionTag::SIZE_IN_BITS);
    }

    /// Number subtag + payload for a sign/magnitude pair.
    fn write_number(&mut self, magnitude: u64, positive: bool) -> Result<(), EncodeError> {
        let sign = if positive { SIGN_POSITIVE } else { SIGN_NEGATIVE };
        if magnitude == 0 {
            self.write_number_tag(NumberTag::Zero);
        } else if magnitude <= DIGITS_MAX_VALUE {
            let text = if positive {
                magnitude.to_string()
            } else {
                format!("-{magnitude}")
            };
            self.write_digits(&text)?;
        } else if magnitude <= BITS16_MAX_VALUE {
            self.write_number_tag(NumberTag::Bits16);
            self.writer.write_bit(sign);
            self.writer.write_bits(magnitude, 16);
        } else if magnitude <= BITS24_MAX_VALUE {
            self.write_number_tag(NumberTag::Bits24);
            self.writer.write_bit(sign);
            self.writer.write_bits(magnitude, 24);
        } else if magnitude <= BITS32_MAX_VALUE {
            self.write_number_tag(NumberTag::Bits32);
            self.writer.write_bit(sign);
            self.writer.write_bits(magnitude, 32);
        } else {
            self.write_number_tag(NumberTag::Bits64);
            self.writer.write_bit(sign);
            self.writer.write_bits(magnitude, 64);
        }
        Ok(())
    }

    /// Number `Digits` subtag + a decimal string packed with the digits
    /// alphabet.
    fn write_digits(&mut self, text: &str) -> Result<(), EncodeError> {
        self.write_number_tag(NumberTag::Digits);
        self.write_alphabet_string(text, alphabet::digits())
    }

    /// String subtag + payload, picking the smallest covering alphabet.
    fn write_string(&mut self, s: &str) -> Result<(), EncodeError> {
        if s.is_empty() {
            self.write_string_tag(StringTag::Empty);
            return Ok(());
        }
        for (tag, table) in alphabet::string_alphabets() {
            if table.contains_all(s) {
                self.write_string_tag(tag);
                return self.write_alphabet_string(s, table);
            }
        }
        self.write_utf8_string(s)
    }

    /// `UTF8` subtag + 2-bit length class + length field + raw bytes.
    fn write_utf8_string(&mut self, s: &str) -> Result<(), EncodeError> {
        let bytes = s.as_bytes();
        let length = bytes.len();
        self.write_string_tag(StringTag::Utf8);
        if length < 16 {
            self.writer
                .write_bits(LENGTH_4_BITS as u64, LENGTH_CLASS_SIZE_IN_BITS);
            self.writer.write_bits(length as u64, 4);
        } else if length < 256 {
            self.writer
                .write_bits(LENGTH_8_BITS as u64, LENGTH_CLASS_SIZE_IN_BITS);
            self.writer.write_bits(length as u64, 8);
        } else if length < 4096 {
            self.writer
                .write_bits(LENGTH_12_BITS as u64, LENGTH_CLASS_SIZE_IN_BITS);
            self.writer.write_bits(length as u64, 12);
        } else if length < MAX_STRING_BYTES {
            self.writer
                .write_bits(LENGTH_16_BITS as u64, LENGTH_CLASS_SIZE_IN_BITS);
            self.writer.write_bits(length as u64, 16);
        } else {
            return Err(EncodeError::StringTooLong(length));
        }
        self.writer.write_bytes(bytes);
        Ok(())
    }

    /// Packs each character as its fixed-width code, then the close code.
    fn write_alphabet_string(&mut self, s: &str, table: &Alphabet) -> Result<(), EncodeError> {
        for c in s.chars() {
            let code = table
                .code(c)
                .ok_or(EncodeError::CharacterNotFoundInAlphabet(c))?;
            self.writer.write_bits(code as u64, table.char_width());
        }
        self.writer
            .write_bits(table.close_code() as u64, table.close_width());
        Ok(())
    }

    /// Array subtag + count/same-type header + elements.
    fn write_array(&mut self, items: &[BitValue]) -> Result<(), EncodeError> {
        let count = items.len();
        let same_type = all_same_primary_tag(items.iter());
        let use_separator = self.write_collection_header(count, same_type)?;
        for (i, item) in items.iter().enumerate() {
            self.write_any(item, !same_type || i == 0)?;
            if use_separator {
                self.write_separator_bit(i == count - 1);
            }
        }
        Ok(())
    }

    /// Dictionary subtag + header + key/value entries.
    ///
    /// The first value's primary tag is always written explicitly; it seeds
    /// the same-type comparison for the rest of the entries.
    fn write_dictionary(&mut self, entries: &[(String, BitValue)]) -> Result<(), EncodeError> {
        let count = entries.len();
        let same_type = all_same_primary_tag(entries.iter().map(|(_, v)| v));
        let use_separator = self.write_collection_header(count, same_type)?;
        for (i, (key, value)) in entries.iter().enumerate() {
            self.write_string(key)?;
            if i == 0 {
                self.write_primary_tag(value.primary_tag());
            }
            self.write_any(value, !same_type && i > 0)?;
            if use_separator {
                self.write_separator_bit(i == count - 1);
            }
        }
        Ok(())
    }

    /// Collection subtag plus count field and same-type bit, per the count
    /// bucket. Returns whether the elements use separator termination.
    fn write_collection_header(
        &mut self,
        count: usize,
        same_type: bool,
    ) -> Result<bool, EncodeError> {
        let same_bit = if same_type {
            SAME_VALUE_TYPE
        } else {
            DIFFERENT_VALUE_TYPES
        };
        match count {
            0 => self.write_collection_tag(CollectionTag::Empty),
            1 => self.write_collection_tag(CollectionTag::Single),
            2..=SEPARATOR_MAX_COUNT => {
                self.write_collection_tag(CollectionTag::Separator);
                self.writer.write_bit(same_bit);
            }
            9..=255 => {
                self.write_collection_tag(CollectionTag::Count8);
                self.writer.write_bits(count as u64, 8);
                self.writer.write_bit(same_bit);
            }
            256..=4095 => {
                self.write_collection_tag(CollectionTag::Count12);
                self.writer.write_bits(count as u64, 12);
                self.writer.write_bit(same_bit);
            }
            4096..=65535 => {
                self.write_collection_tag(CollectionTag::Count16);
                self.writer.write_bits(count as u64, 16);
                self.writer.write_bit(same_bit);
            }
            _ => return Err(EncodeError::CollectionTooLarge(count)),
        }
        Ok((2..=SEPARATOR_MAX_COUNT).contains(&count))
    }

    #[inline]
    fn write_separator_bit(&mut self, last: bool) {
        self.writer.write_bit(if last {
            SEPARATOR_LAST_ELEMENT
        } else {
            SEPARATOR_MIDDLE_ELEMENT
        });
    }
}

/// Whether every value carries the same primary tag as the first one.
///
/// Compares primary tags only; subtags and payloads are irrelevant here.
fn all_same_primary_tag<'a>(mut values: impl Iterator<Item = &'a BitValue>) -> bool {
    let Some(first) = values.next() else {
        return true;
    };
    let tag = first.primary_tag();
    values.all(|v| v.primary_tag() == tag)
}
