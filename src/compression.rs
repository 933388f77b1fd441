//! Runs the whole pipeline for one line of text and writes the report.
//!
//! Compression happens in the following steps:
//! - Frequency count: how often each character appears.
//! - Tree build: join the two lightest nodes until one tree remains.
//! - Code table: walk the tree, 0 for left and 1 for right.
//! - Encode: concatenate the codeword of every character.
//!
//! The encoded stream is then packed into bytes and decoded again from those bytes,
//! so every run checks its own output.

use std::io::{self, Write};

use log::{info, warn};

use crate::bitstream::bitreader::BitReader;
use crate::huffman_coding::code_table::generate;
use crate::huffman_coding::codec::{decode_bits, encode};
use crate::huffman_coding::tree::build;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::count;
use crate::tools::report::{Report, Stats};

/// Compress `text` as described by `opts`, writing the report to `out`.
pub fn compress<W: Write>(opts: &HuffOpts, text: &str, out: &mut W) -> io::Result<()> {
    let symbols = text.chars().collect::<Vec<char>>();

    // Nothing to compress is a normal outcome, not an error.
    if symbols.is_empty() {
        warn!("Input is empty, nothing to compress");
        writeln!(out, "NOTHING TO COMPRESS")?;
        return Ok(());
    }

    let freqs = count(symbols.iter().copied());
    info!(
        "Counted {} chars, {} distinct",
        freqs.total(),
        freqs.len()
    );

    let tree = build(&freqs)?;
    info!(
        "Huffman tree has {} leaves, depth {}",
        tree.leaf_count(),
        tree.depth()
    );
    if opts.show_tree {
        writeln!(out, "HUFFMAN TREE:")?;
        write!(out, "{}", tree)?;
    }

    let table = generate(&tree);
    let stream = encode(&symbols, &table)?;

    let report = Report {
        table: &table,
        stream: &stream,
        stats: Stats::new(symbols.len(), stream.len()),
        zero: opts.zero,
        one: opts.one,
    };
    write!(out, "{}", report)?;

    // Pack the stream, then read it back and make sure we get the input again.
    let (bytes, padding) = stream.to_bytes();
    if opts.packed {
        let hex = bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "PACKED DATA ({} bytes, {} padding bits):", bytes.len(), padding)?;
        writeln!(out, "{}", hex)?;
    }
    let decoded = decode_bits(BitReader::new(&bytes, stream.len()), &tree)?;
    if decoded != symbols {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "decoded text does not match the input",
        ));
    }
    info!("Round trip verified over {} packed bytes", bytes.len());
    Ok(())
}
