//! The tools module holds the helpers around the huffman core.
//!
//! The tools are:
//! - cli: Command line interface and run options.
//! - freq_count: Frequency count of the input symbols.
//! - report: Size statistics and the printed coding report.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
