//! Character alphabets for bit-packed string payloads.
//!
//! An [`Alphabet`] is a bijection between characters and fixed-width codes
//! plus a reserved close code that terminates the string on the wire. The
//! close code may be narrower than a full character code; in that case the
//! assigned character codes never start with the close pattern, so the
//! decoder can probe `close_width` bits first and complete the remaining
//! bits only for regular characters.
//!
//! The five process-wide tables are built once behind `OnceLock` and are
//! read-only afterwards, so they are safe to share across threads.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::tag::StringTag;

/// An immutable character ↔ code table with a reserved close code.
pub struct Alphabet {
    close_code: u8,
    close_width: u8,
    char_width: u8,
    to_code: HashMap<char, u8>,
    from_code: HashMap<u8, char>,
}

impl Alphabet {
    fn new(close_code: u8, close_width: u8, char_width: u8, chars: Vec<(char, u8)>) -> Self {
        let to_code: HashMap<char, u8> = chars.iter().copied().collect();
        let from_code: HashMap<u8, char> = chars.iter().map(|&(c, code)| (code, c)).collect();
        debug_assert_eq!(to_code.len(), from_code.len());
        Self {
            close_code,
            close_width,
            char_width,
            to_code,
            from_code,
        }
    }

    /// The reserved termination code.
    pub fn close_code(&self) -> u8 {
        self.close_code
    }

    /// Width of the termination code, in bits.
    pub fn close_width(&self) -> u8 {
        self.close_width
    }

    /// Width of a regular character code, in bits.
    pub fn char_width(&self) -> u8 {
        self.char_width
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_code.is_empty()
    }

    /// Code assigned to `c`, if the alphabet covers it.
    pub fn code(&self, c: char) -> Option<u8> {
        self.to_code.get(&c).copied()
    }

    /// Character assigned to `code`, if any.
    pub fn char(&self, code: u8) -> Option<char> {
        self.from_code.get(&code).copied()
    }

    /// Whether every character of `s` is covered by this alphabet.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.to_code.contains_key(&c))
    }

    /// An iterator over the characters of this alphabet.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.to_code.keys().copied()
    }
}

/// Digits alphabet: `0-9 . -`, 4-bit codes, 2-bit close code `11`.
///
/// Shared by the number codec's digit-string path and the string codec.
pub fn digits() -> &'static Alphabet {
    static TABLE: OnceLock<Alphabet> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut chars: Vec<(char, u8)> = ('0'..='9').zip(0u8..).collect();
        chars.push(('.', 10));
        chars.push(('-', 11));
        Alphabet::new(0b11, 2, 4, chars)
    })
}

/// Lowercase alphabet: `a-z`, space, `.`, `,`, `-`; 5-bit codes, close
/// code `11111`.
pub fn lowercase() -> &'static Alphabet {
    static TABLE: OnceLock<Alphabet> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut chars: Vec<(char, u8)> = ('a'..='z').zip(0u8..).collect();
        chars.push((' ', 26));
        chars.push(('.', 27));
        chars.push((',', 28));
        chars.push(('-', 29));
        Alphabet::new(0b11111, 5, 5, chars)
    })
}

/// Uppercase alphabet: mirror of [`lowercase`] with `A-Z`.
pub fn uppercase() -> &'static Alphabet {
    static TABLE: OnceLock<Alphabet> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut chars: Vec<(char, u8)> = ('A'..='Z').zip(0u8..).collect();
        chars.push((' ', 26));
        chars.push(('.', 27));
        chars.push((',', 28));
        chars.push(('-', 29));
        Alphabet::new(0b11111, 5, 5, chars)
    })
}

/// Combined alphanumeric alphabet: `0-9 a-z A-Z`; 6-bit codes, close code
/// `111111`.
pub fn combined() -> &'static Alphabet {
    static TABLE: OnceLock<Alphabet> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut chars: Vec<(char, u8)> = ('0'..='9').zip(0u8..).collect();
        chars.extend(('a'..='z').zip(10u8..));
        chars.extend(('A'..='Z').zip(36u8..));
        Alphabet::new(0b111111, 6, 6, chars)
    })
}

/// ASCII alphabet: all 7-bit code points except 3, which is the close code.
pub fn ascii() -> &'static Alphabet {
    static TABLE: OnceLock<Alphabet> = OnceLock::new();
    TABLE.get_or_init(|| {
        let chars: Vec<(char, u8)> = (0u8..=127)
            .filter(|&v| v != 3)
            .map(|v| (v as char, v))
            .collect();
        Alphabet::new(3, 7, 7, chars)
    })
}

/// The string alphabets in selection order (ascending character-set size).
///
/// The encoder picks the first alphabet that covers the whole string; ties
/// between [`lowercase`] and [`uppercase`] resolve to lowercase.
pub fn string_alphabets() -> [(StringTag, &'static Alphabet); 5] {
    [
        (StringTag::Digits, digits()),
        (StringTag::Lowercase, lowercase()),
        (StringTag::Uppercase, uppercase()),
        (StringTag::Combined, combined()),
        (StringTag::Ascii, ascii()),
    ]
}

/// The alphabet assigned to a string subtag, if it has one.
pub fn for_string_tag(tag: StringTag) -> Option<&'static Alphabet> {
    match tag {
        StringTag::Digits => Some(digits()),
        StringTag::Lowercase => Some(lowercase()),
        StringTag::Uppercase => Some(uppercase()),
        StringTag::Combined => Some(combined()),
        StringTag::Ascii => Some(ascii()),
        StringTag::Empty | StringTag::Utf8 => None,
    }
}
