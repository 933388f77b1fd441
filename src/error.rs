//! Error type shared by the frequency, tree, table and codec stages.
//!
//! Every failure here is caused by the caller's input, so nothing is retried or logged
//! inside the library. The error is handed straight back to the caller.

use std::io;

use thiserror::Error;

/// Failures raised while building a code or running the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// No symbols were supplied, so there is nothing to build a tree from.
    #[error("cannot build a huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// The symbol being encoded has no codeword in the table.
    #[error("symbol {symbol} is not in the code table")]
    UnknownSymbol { symbol: String },

    /// The bit stream ended part way through a codeword.
    #[error("bit stream ended mid-codeword after {consumed} bits")]
    TruncatedStream { consumed: usize },

    /// The bits read so far cannot be the start of any codeword.
    #[error("no codeword matches the bits ending at position {position}")]
    InvalidCode { position: usize },

    /// A bit string contained something other than '0' or '1'.
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;

impl From<HuffmanError> for io::Error {
    fn from(e: HuffmanError) -> Self {
        let kind = match e {
            HuffmanError::EmptyAlphabet | HuffmanError::UnknownSymbol { .. } => {
                io::ErrorKind::InvalidInput
            }
            HuffmanError::TruncatedStream { .. }
            | HuffmanError::InvalidCode { .. }
            | HuffmanError::InvalidBit { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}
