//! Huffman coding of symbol sequences.
//!
//! Version 0.1.0
//!
//! Builds a prefix-free binary code for an alphabet weighted by how often each symbol
//! appears, then uses it to encode a message into bits and decode it back.
//!
//! Symbols can be any `Clone + Eq + Hash + Debug` value. The binary works on the
//! characters of one line of text.
//!
//! ```
//! use huffman::{build, count, decode, encode, generate};
//!
//! let text = "abracadabra".chars().collect::<Vec<_>>();
//! let tree = build(&count(text.iter().copied()))?;
//! let table = generate(&tree);
//! let bits = encode(&text, &table)?;
//! assert!(bits.len() < text.len() * 8);
//! assert_eq!(decode(&bits, &tree)?, text);
//! # Ok::<(), huffman::HuffmanError>(())
//! ```
//!
//! Basic usage of the binary is as follows:
//!
//! `$> huffman -t "abracadabra"`
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitstring::BitString;
pub use error::HuffmanError;
pub use huffman_coding::code_table::{generate, CodeTable};
pub use huffman_coding::codec::{decode, decode_bits, decode_with_table, encode};
pub use huffman_coding::tree::{build, HuffNode, HuffmanTree};
pub use tools::freq_count::{count, FrequencyTable};
