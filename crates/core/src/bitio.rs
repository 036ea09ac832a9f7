//! Bit-level I/O for packing and unpacking Huffman codes.
//!
//! [`BitWriter`] and [`BitReader`] both operate MSB-first (most significant
//! bit first), which matches the payload layout of the container format.
//! Neither type knows anything about Huffman semantics; the writer is fed
//! code bits by the encoder and the reader is driven bit-by-bit by the
//! decoder's tree traversal.
//!
//! # Padding Rules
//!
//! `BitWriter::finish` zero-pads the final partial byte and always emits it,
//! even when no bits are pending. Every payload therefore ends on a byte
//! boundary and is at least one byte long. Padding length is not recorded;
//! the decoder stops on its symbol counter and never interprets pad bits.

use crate::error::{BitIoError, Result};

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_buffer` holds at most 7 bits (a full byte is flushed immediately)
/// - `bit_count` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in `bit_buffer` (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new writer with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the lowest `count` bits of `value`, MSB-first.
    ///
    /// Writing `value = 0b101` with `count = 3` emits the bits 1, 0, 1 in
    /// that order.
    ///
    /// # Errors
    /// Returns `BitIoError::InvalidBitCount` if `count` > 64.
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }

        let mut remaining = count;
        while remaining > 0 {
            let room = 8 - self.bit_count as usize;
            let take = remaining.min(room);

            // Top `take` of the remaining bits, aligned into the buffer.
            let shift = remaining - take;
            let chunk = ((value >> shift) as u8) & bit_mask(take);
            self.bit_buffer |= chunk << (room - take);
            self.bit_count += take as u8;

            if self.bit_count == 8 {
                self.bytes.push(self.bit_buffer);
                self.bit_buffer = 0;
                self.bit_count = 0;
            }

            remaining -= take;
        }

        Ok(())
    }

    /// Write a packed bit sequence of exactly `len` bits.
    ///
    /// `bits` holds the sequence MSB-first; trailing bits of the final byte
    /// beyond `len` are ignored. This is the entry point for code-table
    /// entries, whose length is bounded only by tree depth.
    pub fn write_packed(&mut self, bits: &[u8], len: usize) -> Result<()> {
        let full_bytes = len / 8;
        for &byte in &bits[..full_bytes] {
            self.write_bits(byte as u64, 8)?;
        }
        let tail = len % 8;
        if tail > 0 {
            self.write_bits((bits[full_bytes] >> (8 - tail)) as u64, tail)?;
        }
        Ok(())
    }

    /// Finish writing and return the output bytes.
    ///
    /// The final byte is zero-padded and emitted unconditionally, even when
    /// it is entirely padding. A writer that was fed zero bits still yields
    /// a single all-zero byte, which is what gives the degenerate
    /// single-symbol container its one-byte payload.
    pub fn finish(mut self) -> Vec<u8> {
        self.bytes.push(self.bit_buffer);
        self.bytes
    }

    /// Total number of data bits written so far (padding excluded).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }
}

/// Reads bits MSB-first from a byte slice.
///
/// The reader cannot distinguish pad bits from data; the caller tracks how
/// many symbols remain and stops asking once the count is satisfied.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read a single bit.
    ///
    /// # Errors
    /// Returns `BitIoError::UnexpectedEof` when the slice is exhausted.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.bit_position >= self.data.len() * 8 {
            return Err(BitIoError::UnexpectedEof.into());
        }
        let byte = self.data[self.bit_position / 8];
        let offset = self.bit_position % 8;
        self.bit_position += 1;
        Ok(byte & (0x80 >> offset) != 0)
    }

    /// Number of bits remaining (including any trailing padding).
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }
}

/// Mask covering the lowest `count` bits, `count` <= 8.
fn bit_mask(count: usize) -> u8 {
    ((1u16 << count) - 1) as u8
}
