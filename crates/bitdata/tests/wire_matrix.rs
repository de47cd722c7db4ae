//! Exact-bit wire scenarios and boundary grids for the value grammar.

use bitdata::{
    decode_value, encode_value, BitReader, BitValue, CollectionTag, EncodeError, NumberTag,
    PrimaryTag, StringTag,
};

fn encode(value: &BitValue) -> Vec<u8> {
    encode_value(value).unwrap()
}

/// Reads the primary + number subtag off the front of an encoded buffer.
fn number_tag_of(bytes: &[u8]) -> NumberTag {
    let mut reader = BitReader::new(bytes);
    assert_eq!(reader.read_bits(3).unwrap() as u8, PrimaryTag::Number.bits());
    NumberTag::from_bits(reader.read_bits(3).unwrap() as u8).unwrap()
}

fn string_tag_of(bytes: &[u8]) -> StringTag {
    let mut reader = BitReader::new(bytes);
    assert_eq!(reader.read_bits(3).unwrap() as u8, PrimaryTag::String.bits());
    StringTag::from_bits(reader.read_bits(3).unwrap() as u8).unwrap()
}

fn collection_tag_of(bytes: &[u8], primary: PrimaryTag) -> CollectionTag {
    let mut reader = BitReader::new(bytes);
    assert_eq!(reader.read_bits(3).unwrap() as u8, primary.bits());
    CollectionTag::from_bits(reader.read_bits(3).unwrap() as u8).unwrap()
}

#[test]
fn scenario_zero() {
    let bytes = encode(&BitValue::Int(0));
    assert_eq!(bytes, vec![0b0010_0000]); // 001 + 000, six bits
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(0));
}

#[test]
fn scenario_true() {
    let bytes = encode(&BitValue::Bool(true));
    assert_eq!(bytes, vec![0b0000_1000]); // 000 + 01, five bits
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Bool(true));
}

#[test]
fn scenario_empty_string() {
    let bytes = encode(&BitValue::Str(String::new()));
    assert_eq!(bytes, vec![0b0100_0000]); // 010 + 000
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Str(String::new()));
}

#[test]
fn scenario_empty_array() {
    let bytes = encode(&BitValue::Array(vec![]));
    assert_eq!(bytes, vec![0b0110_0000]); // 011 + 000
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Array(vec![]));
}

#[test]
fn scenario_one_two_three() {
    // Array/Separator, same-type bit set, Number tag written once, three
    // digit-string magnitudes each followed by a continuation bit (0 0 1).
    let value = BitValue::Array(vec![BitValue::Int(1), BitValue::Int(2), BitValue::Int(3)]);
    let bytes = encode(&value);
    assert_eq!(bytes, vec![0x6a, 0x48, 0xe2, 0x58, 0x9f]);
    assert_eq!(decode_value(&bytes).unwrap(), value);
}

#[test]
fn scenario_mixed_pair_writes_every_tag() {
    // Same-type bit clear; both elements carry their own primary tag.
    let value = BitValue::Array(vec![BitValue::Int(1), BitValue::Str("a".to_string())]);
    let bytes = encode(&value);
    assert_eq!(bytes, vec![0x68, 0x48, 0xe4, 0x81, 0xf8]);
    assert_eq!(decode_value(&bytes).unwrap(), value);
}

#[test]
fn scenario_key_value_dictionary() {
    // Dictionary/Single; key via lowercase alphabet; explicit String tag
    // seeding same-type elision; value via lowercase alphabet.
    let value = BitValue::Dict(vec![("key".to_string(), BitValue::Str("value".to_string()))]);
    let bytes = encode(&value);
    assert_eq!(
        bytes,
        vec![0x85, 0x28, 0x98, 0xfa, 0x55, 0x02, 0xe8, 0x4f, 0x80]
    );
    assert_eq!(decode_value(&bytes).unwrap(), value);
}

#[test]
fn scenario_one_million_fits_24_bits() {
    let bytes = encode(&BitValue::Int(1_000_000));
    assert_eq!(number_tag_of(&bytes), NumberTag::Bits24);
    assert_eq!(bytes, vec![0x2e, 0x1e, 0x84, 0x80]);
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(1_000_000));
}

#[test]
fn number_width_selection_grid() {
    let cases: [(i64, NumberTag); 14] = [
        (1, NumberTag::Digits),
        (999, NumberTag::Digits),
        (-999, NumberTag::Digits),
        (1_000, NumberTag::Bits16),
        (-1_000, NumberTag::Bits16),
        (65_535, NumberTag::Bits16),
        (65_536, NumberTag::Bits24),
        (16_777_215, NumberTag::Bits24),
        (16_777_216, NumberTag::Bits32),
        (100_000_000, NumberTag::Bits32),
        (4_294_967_295, NumberTag::Bits32),
        (4_294_967_296, NumberTag::Bits64),
        (i64::MAX, NumberTag::Bits64),
        (i64::MIN, NumberTag::Bits64),
    ];
    for (value, expected) in cases {
        let bytes = encode(&BitValue::Int(value));
        assert_eq!(number_tag_of(&bytes), expected, "value {value}");
        assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(value));
    }
}

#[test]
fn unsigned_ceiling_roundtrips_as_uint() {
    let bytes = encode(&BitValue::UInt(u64::MAX));
    assert_eq!(number_tag_of(&bytes), NumberTag::Bits64);
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::UInt(u64::MAX));
}

#[test]
fn string_alphabet_selection_grid() {
    let cases: [(&str, StringTag); 7] = [
        ("3.14", StringTag::Digits),
        ("-273", StringTag::Digits),
        ("hello, world", StringTag::Lowercase),
        ("HELLO-WORLD", StringTag::Uppercase),
        ("abc123XYZ", StringTag::Combined),
        ("Mixed case!", StringTag::Ascii),
        ("héllo", StringTag::Utf8),
    ];
    for (text, expected) in cases {
        let bytes = encode(&BitValue::Str(text.to_string()));
        assert_eq!(string_tag_of(&bytes), expected, "string {text:?}");
        assert_eq!(
            decode_value(&bytes).unwrap(),
            BitValue::Str(text.to_string())
        );
    }
}

#[test]
fn full_alphabet_charsets_avoid_the_utf8_fallback() {
    let digits: String = "0123456789.-".to_string();
    let lower: String = ('a'..='z').chain(" .,-".chars()).collect();
    let upper: String = ('A'..='Z').chain(" .,-".chars()).collect();
    let combined: String = ('0'..='9').chain('a'..='z').chain('A'..='Z').collect();
    let ascii: String = (0u8..=127).filter(|&v| v != 3).map(|v| v as char).collect();
    let cases = [
        (digits, StringTag::Digits),
        (lower, StringTag::Lowercase),
        (upper, StringTag::Uppercase),
        (combined, StringTag::Combined),
        (ascii, StringTag::Ascii),
    ];
    for (text, expected) in cases {
        let bytes = encode(&BitValue::Str(text.clone()));
        assert_eq!(string_tag_of(&bytes), expected);
        assert_eq!(decode_value(&bytes).unwrap(), BitValue::Str(text));
    }
}

/// A string that always takes the UTF-8 path: one two-byte character plus
/// ASCII filler to reach exactly `bytes` UTF-8 bytes.
fn utf8_filler(bytes: usize) -> String {
    assert!(bytes >= 2);
    let mut s = String::from("Ω"); // two UTF-8 bytes
    s.push_str(&"a".repeat(bytes - 2));
    s
}

#[test]
fn utf8_length_class_grid() {
    // (byte length, total encoded bits) — 3 tag + 3 subtag + 2 class +
    // length field + payload.
    let cases: [(usize, usize); 7] = [
        (2, 3 + 3 + 2 + 4 + 16),
        (15, 3 + 3 + 2 + 4 + 120),
        (16, 3 + 3 + 2 + 8 + 128),
        (255, 3 + 3 + 2 + 8 + 2040),
        (256, 3 + 3 + 2 + 12 + 2048),
        (4095, 3 + 3 + 2 + 12 + 32760),
        (4096, 3 + 3 + 2 + 16 + 32768),
    ];
    for (length, expected_bits) in cases {
        let text = utf8_filler(length);
        let bytes = encode(&BitValue::Str(text.clone()));
        assert_eq!(string_tag_of(&bytes), StringTag::Utf8, "length {length}");
        assert_eq!(bytes.len(), expected_bits.div_ceil(8), "length {length}");
        assert_eq!(decode_value(&bytes).unwrap(), BitValue::Str(text));
    }
}

#[test]
fn utf8_upper_boundary() {
    let ok = utf8_filler(65_535);
    let bytes = encode(&BitValue::Str(ok.clone()));
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Str(ok));

    let too_long = utf8_filler(65_536);
    assert_eq!(
        encode_value(&BitValue::Str(too_long)),
        Err(EncodeError::StringTooLong(65_536))
    );
}

#[test]
fn collection_count_bucket_grid() {
    let cases: [(usize, CollectionTag); 10] = [
        (0, CollectionTag::Empty),
        (1, CollectionTag::Single),
        (2, CollectionTag::Separator),
        (8, CollectionTag::Separator),
        (9, CollectionTag::Count8),
        (255, CollectionTag::Count8),
        (256, CollectionTag::Count12),
        (4_095, CollectionTag::Count12),
        (4_096, CollectionTag::Count16),
        (65_535, CollectionTag::Count16),
    ];
    for (size, expected) in cases {
        let value = BitValue::Array(vec![BitValue::Null; size]);
        let bytes = encode(&value);
        assert_eq!(
            collection_tag_of(&bytes, PrimaryTag::Array),
            expected,
            "size {size}"
        );
        assert_eq!(decode_value(&bytes).unwrap(), value, "size {size}");
    }
}

#[test]
fn dictionary_count_buckets_match_arrays() {
    for size in [1usize, 8, 9, 255, 256] {
        let entries: Vec<(String, BitValue)> = (0..size)
            .map(|i| (format!("k{i}"), BitValue::Int(i as i64)))
            .collect();
        let value = BitValue::Dict(entries);
        let bytes = encode(&value);
        let array_bytes = encode(&BitValue::Array(vec![BitValue::Null; size]));
        assert_eq!(
            collection_tag_of(&bytes, PrimaryTag::Dictionary),
            collection_tag_of(&array_bytes, PrimaryTag::Array),
            "size {size}"
        );
        assert_eq!(decode_value(&bytes).unwrap(), value, "size {size}");
    }
}

#[test]
fn oversized_dictionary_fails() {
    let entries: Vec<(String, BitValue)> = (0..65_536)
        .map(|i| (format!("k{i}"), BitValue::Null))
        .collect();
    assert_eq!(
        encode_value(&BitValue::Dict(entries)),
        Err(EncodeError::CollectionTooLarge(65_536))
    );
}
