//! Wire-format constants.

/// Format version written by [`crate::to_bytes`] and checked by
/// [`crate::from_bytes`].
pub const FORMAT_VERSION: u8 = 0;
/// Width of the version field, in bits.
pub const VERSION_SIZE_IN_BITS: u8 = 2;

/// Sign bit values for fixed-width numbers (1 = positive).
pub const SIGN_POSITIVE: u8 = 1;
pub const SIGN_NEGATIVE: u8 = 0;

/// Largest magnitude encoded as a decimal digit string.
pub const DIGITS_MAX_VALUE: u64 = 999;
/// Magnitude ceilings for the fixed-width number subtags.
pub const BITS16_MAX_VALUE: u64 = u16::MAX as u64;
pub const BITS24_MAX_VALUE: u64 = (1 << 24) - 1;
pub const BITS32_MAX_VALUE: u64 = u32::MAX as u64;

/// Two-bit length-class selector for UTF-8 string payloads.
pub const LENGTH_CLASS_SIZE_IN_BITS: u8 = 2;
pub const LENGTH_4_BITS: u8 = 0; // 00
pub const LENGTH_8_BITS: u8 = 1; // 01
pub const LENGTH_12_BITS: u8 = 2; // 10
pub const LENGTH_16_BITS: u8 = 3; // 11
/// UTF-8 payloads must be shorter than this many bytes.
pub const MAX_STRING_BYTES: usize = 65536;

/// Largest collection that uses per-element separator bits.
pub const SEPARATOR_MAX_COUNT: usize = 8;
/// Collections must have fewer elements than this.
pub const MAX_COLLECTION_SIZE: usize = 65536;

/// Same-type bit: 1 = every element shares the first element's primary tag.
pub const SAME_VALUE_TYPE: u8 = 1;
pub const DIFFERENT_VALUE_TYPES: u8 = 0;

/// Separator continuation bit: 1 = last element, 0 = more follow.
pub const SEPARATOR_LAST_ELEMENT: u8 = 1;
pub const SEPARATOR_MIDDLE_ELEMENT: u8 = 0;

/// Maximum value-tree depth accepted by the decoder.
pub const MAX_NESTING_DEPTH: usize = 1024;
