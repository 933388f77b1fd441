//! The bitstream module holds the bit level types used by the codec.
//!
//! - bitstring: the owned bit sequence used for codewords and encoded messages.
//! - bitwriter: packs bits into bytes, most significant bit first.
//! - bitreader: reads packed bits back out, stopping before the padding.
//!
//! Packing is offered to callers that want a compact buffer. The codec itself works on
//! `BitString` and never needs bytes.
pub mod bitreader;
pub mod bitstring;
pub mod bitwriter;
