//! `bitrle` implements the run-length / bit-packing hybrid encoding for
//! boolean columns: long runs of one value are stored as a count, chaotic
//! regions as bit-packed groups of 8. Because run headers expose run
//! lengths, a decoder can also skip whole runs in constant time, which makes
//! the encoding double as a compact bitmap with efficient "next run"
//! scanning.
//!
//! The two entry points are [`RleEncoder`] and [`RleDecoder`]; the wire
//! format is documented in [`rle`].
//!
//! Examples with boolean values:
//!
//! ```text
//! 100 1s followed by 100 0s:
//! <varint(100 << 1)> <1, padded to 1 byte> <varint(100 << 1)> <0, padded to 1 byte>
//! (total 4 bytes)
//!
//! alternating 1s and 0s (200 total): 200 values = 25 groups of 8
//! <varint((25 << 1) | 1)> <25 bytes of values, bit-packed>
//! (total 26 bytes)
//! ```

pub mod bitmap;
pub mod bitstream;
pub mod error;
pub mod rle;
pub mod uleb128;

pub use rle::{RleDecoder, RleEncoder};
