//! Bit-granular buffer reader with cursor tracking.

use crate::BufferError;

/// A bit-granular buffer reader over a byte slice.
///
/// The reader maintains a monotonic bit cursor. All reads are
/// bounds-checked and fail with [`BufferError::EndOfBuffer`] once the data
/// is exhausted.
///
/// # Example
///
/// ```
/// use bitdata_buffers::BitReader;
///
/// let data = [0b1010_0001];
/// let mut reader = BitReader::new(&data);
///
/// assert_eq!(reader.read_bits(3).unwrap(), 0b101);
/// assert_eq!(reader.read_bits(5).unwrap(), 0b00001);
/// assert!(reader.read_bit().is_err());
/// ```
pub struct BitReader<'a> {
    /// The underlying byte slice.
    pub data: &'a [u8],
    /// Current cursor position, in bits.
    pub x: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new reader over the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.x = 0;
    }

    /// Number of unread bits left in the buffer.
    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.x
    }

    #[inline]
    fn check(&self, bits: usize) -> Result<(), BufferError> {
        if self.x + bits > self.data.len() * 8 {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let byte = self.data[self.x / 8];
        let bit = (byte >> (7 - (self.x % 8))) & 1;
        self.x += 1;
        Ok(bit)
    }

    /// Reads `count` bits (at most 64) as an unsigned integer,
    /// most-significant bit first.
    pub fn read_bits(&mut self, count: u8) -> Result<u64, BufferError> {
        debug_assert!(count <= 64);
        self.check(count as usize)?;
        let mut value: u64 = 0;
        let mut remaining = count;
        while remaining > 0 {
            let offset = (self.x % 8) as u8;
            let available = 8 - offset;
            let take = remaining.min(available);
            let byte = self.data[self.x / 8];
            let chunk = (byte >> (available - take)) as u64 & ((1u64 << take) - 1);
            value = (value << take) | chunk;
            self.x += take as usize;
            remaining -= take;
        }
        Ok(value)
    }

    /// Reads a full byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, BufferError> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Reads a run of `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, BufferError> {
        self.check(count * 8)?;
        if self.x % 8 == 0 {
            let start = self.x / 8;
            self.x += count * 8;
            Ok(self.data[start..start + count].to_vec())
        } else {
            let mut out = Vec::with_capacity(count);
            for _ in 0..count {
                out.push(self.read_bits(8)? as u8);
            }
            Ok(out)
        }
    }
}
