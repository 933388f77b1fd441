//! Encodes symbols with a code table and decodes bits back into symbols.
//!
//! Decoding normally walks the tree: each bit steps left or right and a leaf emits its
//! symbol. `decode_with_table` needs only the code table and matches the bits gathered
//! so far against the inverse map instead.
//!
//! Encoding fails with UnknownSymbol. Decoding fails with TruncatedStream when the bits
//! run out mid-codeword, and with InvalidCode when no codeword can match.

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use super::code_table::CodeTable;
use super::tree::{HuffNode, HuffmanTree};
use crate::bitstream::bitstring::BitString;
use crate::error::{HuffmanError, Result};

/// Encode the symbols by concatenating their codewords in order. Fails on the first
/// symbol with no codeword; no partial stream is returned.
pub fn encode<'a, S, I>(symbols: I, table: &CodeTable<S>) -> Result<BitString>
where
    S: Clone + Eq + Hash + Debug + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut stream = BitString::new();
    let mut count = 0;
    for symbol in symbols {
        let code = table.get(symbol).ok_or_else(|| HuffmanError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        })?;
        stream.append(code);
        count += 1;
    }
    debug!("Encoded {} symbols into {} bits", count, stream.len());
    Ok(stream)
}

/// Decode a bit stream by walking the tree from the root.
pub fn decode<S: Clone>(bits: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    decode_bits(bits, tree)
}

/// Decode any source of bits by walking the tree. Each bit steps left (0) or right (1);
/// reaching a leaf emits its symbol and restarts at the root.
pub fn decode_bits<S, I>(bits: I, tree: &HuffmanTree<S>) -> Result<Vec<S>>
where
    S: Clone,
    I: IntoIterator<Item = bool>,
{
    let root = tree.root();
    let mut output = Vec::new();
    let mut consumed = 0;

    // A lone leaf root owns the one bit codeword 0.
    if let HuffNode::Leaf { symbol, .. } = root {
        for bit in bits {
            if bit {
                return Err(HuffmanError::InvalidCode { position: consumed });
            }
            consumed += 1;
            output.push(symbol.clone());
        }
        return Ok(output);
    }

    let mut node = root;
    for bit in bits {
        consumed += 1;
        node = node
            .child(bit)
            .ok_or(HuffmanError::InvalidCode { position: consumed - 1 })?;
        if let HuffNode::Leaf { symbol, .. } = node {
            output.push(symbol.clone());
            node = root;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(HuffmanError::TruncatedStream { consumed });
    }
    Ok(output)
}

/// Decode a bit stream using only the code table, by collecting bits until they
/// match a codeword.
pub fn decode_with_table<S>(bits: &BitString, table: &CodeTable<S>) -> Result<Vec<S>>
where
    S: Clone + Eq + Hash,
{
    let max_len = table.max_len();
    let mut output = Vec::new();
    let mut code = BitString::with_capacity(max_len);

    for (position, bit) in bits.iter().enumerate() {
        code.push(bit);
        if let Some(symbol) = table.symbol_for(&code) {
            output.push(symbol.clone());
            code = BitString::with_capacity(max_len);
        } else if code.len() >= max_len {
            return Err(HuffmanError::InvalidCode { position });
        }
    }

    if !code.is_empty() {
        return Err(HuffmanError::TruncatedStream {
            consumed: bits.len(),
        });
    }
    Ok(output)
}
