//! The huffman coding module builds the code and runs the codec.
//!
//! - tree: greedy minimum-weight merging into a single huffman tree.
//! - code_table: depth-first walk of the tree into symbol → codeword and back.
//! - codec: encode with the table, decode by walking the tree (or by table lookup).
//!
//! Building a tree is inherently sequential: each merge depends on the queue left by
//! the one before it. Independent inputs can be built side by side with no coordination.

pub mod code_table;
pub mod codec;
pub mod tree;
