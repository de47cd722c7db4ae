//! Round-trip coverage: targeted cases for the numeric ambiguities plus
//! property tests over randomly generated value trees.

use bitdata::{decode_value, encode_value, from_bytes, to_bytes, BitValue};
use proptest::prelude::*;

#[test]
fn integers_roundtrip_exactly() {
    for value in [
        0i64,
        1,
        -1,
        999,
        -999,
        1_000,
        -1_000,
        65_536,
        -65_536,
        i64::MAX,
        i64::MIN,
    ] {
        let bytes = encode_value(&BitValue::Int(value)).unwrap();
        assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(value));
    }
}

#[test]
fn small_uint_decodes_as_int() {
    // The digit-string path keeps no signedness discriminator, so unsigned
    // values inside the i64 range come back as Int.
    let bytes = encode_value(&BitValue::UInt(42)).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(42));

    let bytes = encode_value(&BitValue::UInt(1_000_000)).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(1_000_000));
}

#[test]
fn large_uint_stays_uint() {
    let value = i64::MAX as u64 + 1;
    let bytes = encode_value(&BitValue::UInt(value)).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::UInt(value));
}

#[test]
fn integral_float_decodes_as_int() {
    // 5.0 serializes to the digit string "5" and parses back as an
    // integer; the ambiguity is part of the format.
    let bytes = encode_value(&BitValue::Float(5.0)).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(5));
}

#[test]
fn fractional_floats_roundtrip() {
    for value in [3.14, -0.5, 0.0625, 1e-9, -123456.789, f64::MAX] {
        let bytes = encode_value(&BitValue::Float(value)).unwrap();
        assert_eq!(
            decode_value(&bytes).unwrap(),
            BitValue::Float(value),
            "value {value}"
        );
    }
}

#[test]
fn float_zero_takes_the_digits_path() {
    // Unlike integer zero (subtag Zero, no payload), 0.0 formats to "0"
    // and decodes as Int(0).
    let bytes = encode_value(&BitValue::Float(0.0)).unwrap();
    assert!(bytes.len() > 1);
    assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(0));
}

#[test]
fn dictionary_preserves_entry_order() {
    let value = BitValue::Dict(vec![
        ("zebra".to_string(), BitValue::Int(1)),
        ("apple".to_string(), BitValue::Int(2)),
        ("mango".to_string(), BitValue::Int(3)),
    ]);
    let bytes = encode_value(&value).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), value);
}

#[test]
fn mixed_value_dictionary_roundtrips() {
    let value = BitValue::Dict(vec![
        ("name".to_string(), BitValue::Str("BitData".to_string())),
        ("version".to_string(), BitValue::Int(1)),
        ("enabled".to_string(), BitValue::Bool(true)),
        ("threshold".to_string(), BitValue::Float(0.75)),
        ("missing".to_string(), BitValue::Null),
        (
            "nested".to_string(),
            BitValue::Dict(vec![(
                "items".to_string(),
                BitValue::Array(vec![BitValue::Int(1), BitValue::Str("two".to_string())]),
            )]),
        ),
    ]);
    let bytes = encode_value(&value).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), value);
}

#[test]
fn unicode_keys_take_the_utf8_path_and_roundtrip() {
    let value = BitValue::Dict(vec![
        ("ключ".to_string(), BitValue::Str("значение".to_string())),
        ("鍵".to_string(), BitValue::Int(7)),
    ]);
    let bytes = encode_value(&value).unwrap();
    assert_eq!(decode_value(&bytes).unwrap(), value);
}

/// Value trees whose variants all round-trip exactly: floats are excluded
/// here because the digit-string path folds integral floats into Int, and
/// sub-i64 UInt folds into Int the same way.
fn arb_exact_value() -> impl Strategy<Value = BitValue> {
    let leaf = prop_oneof![
        Just(BitValue::Null),
        any::<bool>().prop_map(BitValue::Bool),
        any::<i64>().prop_map(BitValue::Int),
        ((i64::MAX as u64 + 1)..=u64::MAX).prop_map(BitValue::UInt),
        "[ -~]{0,24}".prop_map(BitValue::Str),
        proptest::collection::vec(any::<char>(), 0..12)
            .prop_map(|chars| BitValue::Str(chars.into_iter().collect())),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(BitValue::Array),
            proptest::collection::btree_map("[a-z]{1,8}", inner, 0..8)
                .prop_map(|map| BitValue::Dict(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn any_value_roundtrips(value in arb_exact_value()) {
        let bytes = encode_value(&value).unwrap();
        prop_assert_eq!(decode_value(&bytes).unwrap(), value);
    }

    #[test]
    fn framed_value_roundtrips(value in arb_exact_value()) {
        let bytes = to_bytes(&value).unwrap();
        prop_assert_eq!(from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn encoding_is_deterministic(value in arb_exact_value()) {
        prop_assert_eq!(encode_value(&value).unwrap(), encode_value(&value).unwrap());
    }

    #[test]
    fn any_string_roundtrips(text in proptest::collection::vec(any::<char>(), 0..64)) {
        let text: String = text.into_iter().collect();
        let bytes = encode_value(&BitValue::Str(text.clone())).unwrap();
        prop_assert_eq!(decode_value(&bytes).unwrap(), BitValue::Str(text));
    }

    #[test]
    fn any_i64_roundtrips(value in any::<i64>()) {
        let bytes = encode_value(&BitValue::Int(value)).unwrap();
        prop_assert_eq!(decode_value(&bytes).unwrap(), BitValue::Int(value));
    }
}
