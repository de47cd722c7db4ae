//! `BitDataDecoder` — mirror of the encoder's subtag selection.
//!
//! Decoding is fully synchronous and recursive; nesting depth is bounded by
//! an explicit counter so malformed input fails with
//! [`DecodeError::NestingTooDeep`] instead of exhausting the call stack.

use bitdata_buffers::BitReader;

use crate::alphabet::{self, Alphabet};
use crate::constants::*;
use crate::error::DecodeError;
use crate::tag::{CollectionTag, NumberTag, PrimaryTag, PrimitiveTag, StringTag};
use crate::value::BitValue;

pub struct BitDataDecoder<'a> {
    pub reader: BitReader<'a>,
    depth: usize,
}

impl<'a> BitDataDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(data),
            depth: 0,
        }
    }

    /// Reads one value at the current cursor position.
    ///
    /// `forced_tag` is the primary tag established by the surrounding
    /// collection through same-type elision; `None` reads a fresh tag from
    /// the stream.
    pub fn read_any(&mut self, forced_tag: Option<PrimaryTag>) -> Result<BitValue, DecodeError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(DecodeError::NestingTooDeep);
        }
        self.depth += 1;
        let result = self.read_any_inner(forced_tag);
        self.depth -= 1;
        result
    }

    fn read_any_inner(&mut self, forced_tag: Option<PrimaryTag>) -> Result<BitValue, DecodeError> {
        let tag = match forced_tag {
            Some(tag) => tag,
            None => self.read_primary_tag()?,
        };
        match tag {
            PrimaryTag::Primitive => self.read_primitive(),
            PrimaryTag::Number => self.read_number(),
            PrimaryTag::String => Ok(BitValue::Str(self.read_string()?)),
            PrimaryTag::Array => self.read_array(),
            PrimaryTag::Dictionary => self.read_dictionary(),
        }
    }

    fn read_primary_tag(&mut self) -> Result<PrimaryTag, DecodeError> {
        let bits = self.reader.read_bits(PrimaryTag::SIZE_IN_BITS)? as u8;
        PrimaryTag::from_bits(bits).ok_or(DecodeError::UnknownPrimaryTag(bits))
    }

    fn read_primitive(&mut self) -> Result<BitValue, DecodeError> {
        let bits = self.reader.read_bits(PrimitiveTag::SIZE_IN_BITS)? as u8;
        match PrimitiveTag::from_bits(bits).ok_or(DecodeError::UnknownSubTag(bits))? {
            PrimitiveTag::Null => Ok(BitValue::Null),
            PrimitiveTag::True => Ok(BitValue::Bool(true)),
            PrimitiveTag::False => Ok(BitValue::Bool(false)),
        }
    }

    fn read_number(&mut self) -> Result<BitValue, DecodeError> {
        let bits = self.reader.read_bits(NumberTag::SIZE_IN_BITS)? as u8;
        let tag = NumberTag::from_bits(bits).ok_or(DecodeError::UnknownSubTag(bits))?;
        match tag {
            NumberTag::Zero => Ok(BitValue::Int(0)),
            NumberTag::Digits => self.read_digits(),
            NumberTag::Bits16 | NumberTag::Bits24 | NumberTag::Bits32 | NumberTag::Bits64 => {
                // Width is always present for these subtags.
                let width = tag.magnitude_width().unwrap_or(64);
                self.read_fixed_width(width)
            }
        }
    }

    /// Sign bit + fixed-width big-endian magnitude.
    fn read_fixed_width(&mut self, width: u8) -> Result<BitValue, DecodeError> {
        let positive = self.reader.read_bit()? == SIGN_POSITIVE;
        let magnitude = self.reader.read_bits(width)?;
        if positive {
            if magnitude <= i64::MAX as u64 {
                Ok(BitValue::Int(magnitude as i64))
            } else {
                Ok(BitValue::UInt(magnitude))
            }
        } else if magnitude <= i64::MAX as u64 {
            Ok(BitValue::Int(-(magnitude as i64)))
        } else if magnitude == i64::MIN.unsigned_abs() {
            Ok(BitValue::Int(i64::MIN))
        } else {
            // A 64-bit negative magnitude below i64::MIN has no home in
            // the value model.
            Err(DecodeError::NumberTooLarge)
        }
    }

    /// Digit-string number: parse as i64, then u64, then f64.
    ///
    /// The first successful parse wins, so an integral-valued float that
    /// was written as e.g. "5" comes back as `Int(5)`.
    fn read_digits(&mut self) -> Result<BitValue, DecodeError> {
        let text = self.read_alphabet_string(alphabet::digits())?;
        if let Ok(v) = text.parse::<i64>() {
            return Ok(BitValue::Int(v));
        }
        if let Ok(v) = text.parse::<u64>() {
            return Ok(BitValue::UInt(v));
        }
        if let Ok(v) = text.parse::<f64>() {
            return Ok(BitValue::Float(v));
        }
        Err(DecodeError::NumberDecodeFailure(text))
    }

    /// String subtag + payload. Dictionary keys also enter here, as they
    /// carry no primary tag of their own.
    fn read_string(&mut self) -> Result<String, DecodeError> {
        let bits = self.reader.read_bits(StringTag::SIZE_IN_BITS)? as u8;
        let tag = StringTag::from_bits(bits).ok_or(DecodeError::UnknownSubTag(bits))?;
        match tag {
            StringTag::Empty => Ok(String::new()),
            StringTag::Utf8 => self.read_utf8_string(),
            _ => {
                // Every remaining subtag names an alphabet.
                let table = alphabet::for_string_tag(tag).ok_or(DecodeError::UnknownSubTag(bits))?;
                self.read_alphabet_string(table)
            }
        }
    }

    fn read_utf8_string(&mut self) -> Result<String, DecodeError> {
        let class = self.reader.read_bits(LENGTH_CLASS_SIZE_IN_BITS)? as u8;
        let length = match class {
            LENGTH_4_BITS => self.reader.read_bits(4)?,
            LENGTH_8_BITS => self.reader.read_bits(8)?,
            LENGTH_12_BITS => self.reader.read_bits(12)?,
            _ => self.reader.read_bits(16)?,
        } as usize;
        let bytes = self.reader.read_bytes(length)?;
        String::from_utf8(bytes).map_err(|_| DecodeError::FailedToDecodeUtf8String)
    }

    /// Alphabet-packed string: probe `close_width` bits; on a close code
    /// the string ends, otherwise the remaining bits complete a character
    /// code.
    fn read_alphabet_string(&mut self, table: &Alphabet) -> Result<String, DecodeError> {
        let mut out = String::new();
        loop {
            let probe = self.reader.read_bits(table.close_width())? as u8;
            if probe == table.close_code() {
                return Ok(out);
            }
            let rest_width = table.char_width() - table.close_width();
            let code = if rest_width == 0 {
                probe
            } else {
                (probe << rest_width) | self.reader.read_bits(rest_width)? as u8
            };
            let c = table
                .char(code)
                .ok_or(DecodeError::CharacterNotFoundInAlphabet(code))?;
            out.push(c);
        }
    }

    fn read_array(&mut self) -> Result<BitValue, DecodeError> {
        let tag = self.read_collection_tag()?;
        if tag == CollectionTag::Empty {
            return Ok(BitValue::Array(Vec::new()));
        }
        let (count, same_type) = self.read_collection_header(tag)?;
        if count == Some(0) {
            return Ok(BitValue::Array(Vec::new()));
        }
        let use_separator = tag == CollectionTag::Separator;

        let mut items = Vec::with_capacity(count.unwrap_or(SEPARATOR_MAX_COUNT));
        let mut element_tag: Option<PrimaryTag> = None;
        loop {
            if element_tag.is_none() {
                element_tag = Some(self.read_primary_tag()?);
            }
            items.push(self.read_any(element_tag)?);
            if !same_type {
                element_tag = None;
            }
            if self.collection_finished(use_separator, count, items.len())? {
                return Ok(BitValue::Array(items));
            }
        }
    }

    fn read_dictionary(&mut self) -> Result<BitValue, DecodeError> {
        let tag = self.read_collection_tag()?;
        if tag == CollectionTag::Empty {
            return Ok(BitValue::Dict(Vec::new()));
        }
        let (count, same_type) = self.read_collection_header(tag)?;
        if count == Some(0) {
            return Ok(BitValue::Dict(Vec::new()));
        }
        let use_separator = tag == CollectionTag::Separator;

        let mut entries = Vec::with_capacity(count.unwrap_or(SEPARATOR_MAX_COUNT));
        let mut first_tag: Option<PrimaryTag> = None;
        loop {
            let key = self.read_string()?;
            if first_tag.is_none() {
                first_tag = Some(self.read_primary_tag()?);
            }
            let forced = if same_type || entries.is_empty() {
                first_tag
            } else {
                None
            };
            entries.push((key, self.read_any(forced)?));
            if self.collection_finished(use_separator, count, entries.len())? {
                return Ok(BitValue::Dict(entries));
            }
        }
    }

    fn read_collection_tag(&mut self) -> Result<CollectionTag, DecodeError> {
        let bits = self.reader.read_bits(CollectionTag::SIZE_IN_BITS)? as u8;
        CollectionTag::from_bits(bits).ok_or(DecodeError::UnknownSubTag(bits))
    }

    /// Count and same-type flag for a non-empty collection subtag.
    ///
    /// `Single` implies same-type without spending a bit; `Separator`
    /// carries no count and terminates through continuation bits.
    fn read_collection_header(
        &mut self,
        tag: CollectionTag,
    ) -> Result<(Option<usize>, bool), DecodeError> {
        match tag {
            CollectionTag::Single => Ok((Some(1), true)),
            CollectionTag::Separator => {
                let same_type = self.reader.read_bit()? == SAME_VALUE_TYPE;
                Ok((None, same_type))
            }
            _ => {
                // Count8/12/16 were filtered by the caller's Empty check.
                let width = tag.count_width().ok_or(DecodeError::UnknownSubTag(tag.bits()))?;
                let count = self.reader.read_bits(width)? as usize;
                let same_type = self.reader.read_bit()? == SAME_VALUE_TYPE;
                Ok((Some(count), same_type))
            }
        }
    }

    fn collection_finished(
        &mut self,
        use_separator: bool,
        count: Option<usize>,
        decoded: usize,
    ) -> Result<bool, DecodeError> {
        if use_separator {
            Ok(self.reader.read_bit()? == SEPARATOR_LAST_ELEMENT)
        } else {
            Ok(count == Some(decoded))
        }
    }
}
