//! Derives the symbol → codeword table from a huffman tree.
//!
//! The tree is walked depth first with an explicit stack, appending a 0 for each left
//! branch and a 1 for each right branch. Every leaf sits at its own position in the
//! tree and only leaves carry symbols, so the codewords come out prefix-free.

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use super::tree::{HuffNode, HuffmanTree};
use crate::bitstream::bitstring::BitString;
use crate::error::{HuffmanError, Result};
use crate::tools::freq_count::FrequencyTable;

/// Lazy depth-first walk over a tree, yielding (symbol, codeword) for each leaf from
/// left to right.
pub struct Codes<'a, S> {
    stack: Vec<(&'a HuffNode<S>, BitString)>,
}

impl<'a, S> Iterator for Codes<'a, S> {
    type Item = (&'a S, BitString);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, code)) = self.stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    // A lone leaf root still needs a one bit codeword.
                    if code.is_empty() {
                        return Some((symbol, BitString::from(vec![false])));
                    }
                    return Some((symbol, code));
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_code = code.clone();
                    right_code.push(true);
                    let mut left_code = code;
                    left_code.push(false);
                    self.stack.push((right.as_ref(), right_code));
                    self.stack.push((left.as_ref(), left_code));
                }
            }
        }
        None
    }
}

impl<S> HuffmanTree<S> {
    /// Walk the tree from the root, yielding each leaf's codeword. Call again to restart.
    pub fn codes(&self) -> Codes<'_, S> {
        Codes {
            stack: vec![(self.root(), BitString::new())],
        }
    }
}

/// Symbol → codeword mapping plus its inverse for decoding.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    /// Entries in left-to-right leaf order.
    entries: Vec<(S, BitString)>,
    by_symbol: FxHashMap<S, usize>,
    by_code: FxHashMap<BitString, usize>,
}

impl<S: Clone + Eq + Hash> CodeTable<S> {
    /// Codeword for `symbol`, if it is in the table.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.by_symbol.get(symbol).map(|&i| &self.entries[i].1)
    }

    /// Symbol whose codeword is exactly `code`.
    pub fn symbol_for(&self, code: &BitString) -> Option<&S> {
        self.by_code.get(code).map(|&i| &self.entries[i].0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in left-to-right leaf order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.entries.iter().map(|(s, c)| (s, c))
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }

    /// True when no codeword is a prefix of, or equal to, another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self.entries.iter().map(|(_, c)| c).collect::<Vec<_>>();
        // After sorting, a codeword that prefixes any other also prefixes its successor.
        codes.sort();
        codes
            .windows(2)
            .all(|pair| pair[0] != pair[1] && !pair[0].is_prefix_of(pair[1]))
    }

    /// Exact size in bits of encoding input with these frequencies.
    pub fn encoded_len(&self, freqs: &FrequencyTable<S>) -> Result<usize>
    where
        S: Debug,
    {
        freqs.iter().try_fold(0, |total, (symbol, n)| {
            let code = self.get(symbol).ok_or_else(|| HuffmanError::UnknownSymbol {
                symbol: format!("{:?}", symbol),
            })?;
            Ok(total + code.len() * n)
        })
    }
}

/// Generate the code table for a tree.
pub fn generate<S>(tree: &HuffmanTree<S>) -> CodeTable<S>
where
    S: Clone + Eq + Hash + Debug,
{
    let mut table = CodeTable {
        entries: Vec::new(),
        by_symbol: FxHashMap::default(),
        by_code: FxHashMap::default(),
    };
    for (i, (symbol, code)) in tree.codes().enumerate() {
        table.by_symbol.insert(symbol.clone(), i);
        table.by_code.insert(code.clone(), i);
        table.entries.push((symbol.clone(), code));
    }
    debug!(
        "Generated {} codewords, longest {} bits",
        table.len(),
        table.max_len()
    );
    table
}
