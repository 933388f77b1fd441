use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::bitreader::BitReader;
use super::bitwriter::BitWriter;
use crate::error::HuffmanError;

/// An ordered sequence of bits. Used both for a single codeword and for a whole
/// encoded message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append all of `other` to the end of this string.
    pub fn append(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        self.len() < other.len() && other.bits.starts_with(&self.bits)
    }

    /// Render the bits with caller chosen characters for 0 and 1.
    pub fn render(&self, zero: char, one: char) -> String {
        self.iter().map(|bit| if bit { one } else { zero }).collect()
    }

    /// Pack into bytes, most significant bit first. Returns the bytes and the number of
    /// zero padding bits in the last byte.
    pub fn to_bytes(&self) -> (Vec<u8>, u8) {
        let mut bw = BitWriter::new((self.len() + 7) / 8);
        bw.out_bits(self);
        bw.finish()
    }

    /// Unpack the first `bit_len` bits of a buffer produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Self {
        BitReader::new(bytes, bit_len).collect()
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render('0', '1'))
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(HuffmanError::InvalidBit { found, position }),
            })
            .collect()
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}
