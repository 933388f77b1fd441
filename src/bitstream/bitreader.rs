//! BitReader: reads back a bit stream packed by BitWriter.
//!
//! The packed buffer carries no length of its own, so the reader must be told how many
//! bits are real. Everything after that is padding and is never returned.

const BIT_MASK: u8 = 0xff;

/// Reads bits, most significant first, from a packed byte buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    remaining: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over `buffer` that yields at most `bit_len` bits.
    pub fn new(buffer: &'a [u8], bit_len: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            remaining: bit_len.min(buffer.len() * 8),
        }
    }

    /// Return the next bit, or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.remaining -= 1;
        Some(bit == 1)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
