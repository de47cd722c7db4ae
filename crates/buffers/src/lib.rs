//! Bit-addressable buffer primitives.
//!
//! A sequential [`BitWriter`] and [`BitReader`] over an in-memory byte
//! buffer. Fields of any width from 1 to 64 bits are packed back to back,
//! most-significant-bit first, with no alignment padding between them.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

use thiserror::Error;

/// Errors produced by buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read ran past the end of the buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
}
