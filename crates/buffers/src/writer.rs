//! Bit-granular buffer writer with auto-growing capacity.

/// A bit-granular buffer writer.
///
/// Bits are packed most-significant-bit first. The final byte is padded
/// with zero bits when the written length is not a multiple of eight.
///
/// # Example
///
/// ```
/// use bitdata_buffers::BitWriter;
///
/// let mut writer = BitWriter::new();
/// writer.write_bits(0b101, 3);
/// writer.write_bits(0b00001, 5);
/// assert_eq!(writer.size_in_bits(), 8);
/// assert_eq!(writer.to_bytes(), vec![0b1010_0001]);
/// ```
pub struct BitWriter {
    /// Completed bytes.
    bytes: Vec<u8>,
    /// Partially filled trailing byte, bits packed from the high end.
    current: u8,
    /// Number of occupied bits in `current` (0..8).
    used: u8,
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            current: 0,
            used: 0,
        }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            current: 0,
            used: 0,
        }
    }

    /// Total number of bits written so far.
    pub fn size_in_bits(&self) -> usize {
        self.bytes.len() * 8 + self.used as usize
    }

    /// Discards all written data.
    pub fn reset(&mut self) {
        self.bytes.clear();
        self.current = 0;
        self.used = 0;
    }

    /// Writes a single bit; any non-zero `bit` writes 1.
    #[inline]
    pub fn write_bit(&mut self, bit: u8) {
        let bit = (bit != 0) as u8;
        self.current |= bit << (7 - self.used);
        self.used += 1;
        if self.used == 8 {
            self.bytes.push(self.current);
            self.current = 0;
            self.used = 0;
        }
    }

    /// Writes the `count` least-significant bits of `value`,
    /// most-significant bit first.
    ///
    /// `count` must be at most 64; higher bits of `value` are ignored.
    pub fn write_bits(&mut self, value: u64, count: u8) {
        debug_assert!(count <= 64);
        let mut remaining = count;
        while remaining > 0 {
            let free = 8 - self.used;
            let take = remaining.min(free);
            let chunk = (value >> (remaining - take)) & ((1u64 << take) - 1);
            self.current |= (chunk as u8) << (free - take);
            self.used += take;
            if self.used == 8 {
                self.bytes.push(self.current);
                self.current = 0;
                self.used = 0;
            }
            remaining -= take;
        }
    }

    /// Writes a full byte.
    #[inline]
    pub fn write_byte(&mut self, value: u8) {
        self.write_bits(value as u64, 8);
    }

    /// Writes a run of raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) {
        if self.used == 0 {
            self.bytes.extend_from_slice(data);
        } else {
            for &byte in data {
                self.write_bits(byte as u64, 8);
            }
        }
    }

    /// Returns the written data, padding the last partial byte with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.bytes.clone();
        if self.used > 0 {
            out.push(self.current);
        }
        out
    }

    /// Consumes the writer and returns the written data.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.used > 0 {
            self.bytes.push(self.current);
        }
        self.bytes
    }
}
