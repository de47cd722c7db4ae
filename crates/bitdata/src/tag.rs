//! Tag registry: the closed bit ↔ enum mappings for primary and sub tags.
//!
//! A value starts with a 3-bit primary tag, followed by a subtag whose
//! width depends on the primary tag (2 bits for primitives, 3 bits for
//! everything else). The registry is pure: it maps bit patterns to enums
//! and back, and never touches the stream itself.

/// Top-level kind discriminator, 3 bits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryTag {
    Primitive,
    Number,
    String,
    Array,
    Dictionary,
}

impl PrimaryTag {
    /// Width of a primary tag on the wire.
    pub const SIZE_IN_BITS: u8 = 3;

    /// Wire code of this tag.
    pub fn bits(self) -> u8 {
        match self {
            PrimaryTag::Primitive => 0,  // 000
            PrimaryTag::Number => 1,     // 001
            PrimaryTag::String => 2,     // 010
            PrimaryTag::Array => 3,      // 011
            PrimaryTag::Dictionary => 4, // 100
        }
    }

    /// Decodes a 3-bit code; codes 5-7 are unassigned.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(PrimaryTag::Primitive),
            1 => Some(PrimaryTag::Number),
            2 => Some(PrimaryTag::String),
            3 => Some(PrimaryTag::Array),
            4 => Some(PrimaryTag::Dictionary),
            _ => None,
        }
    }

    /// Width of the subtag that follows this primary tag.
    pub fn sub_tag_size_in_bits(self) -> u8 {
        match self {
            PrimaryTag::Primitive => PrimitiveTag::SIZE_IN_BITS,
            _ => 3,
        }
    }
}

/// Subtag for [`PrimaryTag::Primitive`], 2 bits on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTag {
    Null,
    True,
    False,
}

impl PrimitiveTag {
    pub const SIZE_IN_BITS: u8 = 2;

    pub fn bits(self) -> u8 {
        match self {
            PrimitiveTag::Null => 0,  // 00
            PrimitiveTag::True => 1,  // 01
            PrimitiveTag::False => 2, // 10
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(PrimitiveTag::Null),
            1 => Some(PrimitiveTag::True),
            2 => Some(PrimitiveTag::False),
            _ => None,
        }
    }
}

/// Subtag for [`PrimaryTag::Number`], 3 bits on the wire.
///
/// Selects the payload encoding: nothing (zero), a digit string, or a sign
/// bit plus a fixed-width big-endian magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberTag {
    Zero,
    Digits,
    Bits16,
    Bits24,
    Bits32,
    Bits64,
}

impl NumberTag {
    pub const SIZE_IN_BITS: u8 = 3;

    pub fn bits(self) -> u8 {
        match self {
            NumberTag::Zero => 0,   // 000
            NumberTag::Digits => 1, // 001
            NumberTag::Bits16 => 2, // 010
            NumberTag::Bits24 => 3, // 011
            NumberTag::Bits32 => 4, // 100
            NumberTag::Bits64 => 5, // 101
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(NumberTag::Zero),
            1 => Some(NumberTag::Digits),
            2 => Some(NumberTag::Bits16),
            3 => Some(NumberTag::Bits24),
            4 => Some(NumberTag::Bits32),
            5 => Some(NumberTag::Bits64),
            _ => None,
        }
    }

    /// Magnitude width in bits for the fixed-width subtags.
    pub fn magnitude_width(self) -> Option<u8> {
        match self {
            NumberTag::Bits16 => Some(16),
            NumberTag::Bits24 => Some(24),
            NumberTag::Bits32 => Some(32),
            NumberTag::Bits64 => Some(64),
            _ => None,
        }
    }
}

/// Subtag for [`PrimaryTag::String`], 3 bits on the wire.
///
/// Selects the alphabet the string is packed with, or the raw UTF-8
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringTag {
    Empty,
    Digits,
    Lowercase,
    Uppercase,
    Combined,
    Ascii,
    Utf8,
}

impl StringTag {
    pub const SIZE_IN_BITS: u8 = 3;

    pub fn bits(self) -> u8 {
        match self {
            StringTag::Empty => 0,     // 000
            StringTag::Digits => 1,    // 001
            StringTag::Lowercase => 2, // 010
            StringTag::Uppercase => 3, // 011
            StringTag::Combined => 4,  // 100
            StringTag::Ascii => 5,     // 101
            StringTag::Utf8 => 6,      // 110
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(StringTag::Empty),
            1 => Some(StringTag::Digits),
            2 => Some(StringTag::Lowercase),
            3 => Some(StringTag::Uppercase),
            4 => Some(StringTag::Combined),
            5 => Some(StringTag::Ascii),
            6 => Some(StringTag::Utf8),
            _ => None,
        }
    }
}

/// Subtag shared by [`PrimaryTag::Array`] and [`PrimaryTag::Dictionary`],
/// 3 bits on the wire.
///
/// Selects how the element count is carried: implicitly (empty, single,
/// per-element separator bits) or as an explicit 8/12/16-bit count field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionTag {
    Empty,
    Single,
    Separator,
    Count8,
    Count12,
    Count16,
}

impl CollectionTag {
    pub const SIZE_IN_BITS: u8 = 3;

    pub fn bits(self) -> u8 {
        match self {
            CollectionTag::Empty => 0,     // 000
            CollectionTag::Single => 1,    // 001
            CollectionTag::Separator => 2, // 010
            CollectionTag::Count8 => 3,    // 011
            CollectionTag::Count12 => 4,   // 100
            CollectionTag::Count16 => 5,   // 101
        }
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(CollectionTag::Empty),
            1 => Some(CollectionTag::Single),
            2 => Some(CollectionTag::Separator),
            3 => Some(CollectionTag::Count8),
            4 => Some(CollectionTag::Count12),
            5 => Some(CollectionTag::Count16),
            _ => None,
        }
    }

    /// Width of the explicit count field, if this subtag carries one.
    pub fn count_width(self) -> Option<u8> {
        match self {
            CollectionTag::Count8 => Some(8),
            CollectionTag::Count12 => Some(12),
            CollectionTag::Count16 => Some(16),
            _ => None,
        }
    }
}
