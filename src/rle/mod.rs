//! Run-length / bit-packing hybrid encoding for boolean sequences.
//!
//! The grammar of an encoded stream:
//!
//! ```text
//! encoded-stream := run*
//! run            := literal-run | repeated-run
//! literal-run    := varint(group_count << 1 | 1) <group_count bytes, bit-packed>
//! repeated-run   := varint(repeat_count << 1) <value, padded to one byte>
//! ```
//!
//! Every run starts with a byte-aligned varint whose least significant bit
//! selects the run type. Literal runs store groups of 8 values bit-packed
//! LSB-first, so they always end on a byte boundary. Repeated runs store the
//! value once, in the low bit of a single byte, together with how many times
//! it repeats.
//!
//! Sufficiently long runs of one value are cheaper repeated; chaotic regions
//! are cheaper literal. For one-bit values the break-even point is 8 values,
//! which is why the encoder buffers 8 values before committing them to
//! either run type.
//!
//! A stream carries no length framing and no terminator; how many values it
//! holds is the caller's knowledge. A literal run whose logical length is
//! not a multiple of 8 is zero-padded to the next group boundary, so reading
//! past the caller-known length yields up to 7 trailing `false`s.

mod decoder;
mod encoder;

pub use decoder::RleDecoder;
pub use encoder::RleEncoder;

use crate::error::{Error, Result};

/// The largest group count a literal indicator is allowed to carry, keeping
/// every indicator a single varint byte.
pub(crate) const MAX_GROUPS_PER_LITERAL_RUN: u64 = 63;

/// Encodes an iterator of booleans, returning the encoded bytes.
pub fn encode<I: IntoIterator<Item = bool>>(iterator: I) -> Vec<u8> {
    let mut encoder = RleEncoder::new();
    encoder.extend(iterator);
    encoder.into_inner()
}

/// Decodes `length` values from `data`.
/// Errors if the stream is malformed or holds fewer than `length` values.
pub fn decode(data: &[u8], length: usize) -> Result<Vec<bool>> {
    let mut decoder = RleDecoder::new(data);
    let mut values = Vec::with_capacity(length);
    for _ in 0..length {
        match decoder.get()? {
            Some(value) => values.push(value),
            None => {
                return Err(Error::OutOfSpec(format!(
                    "stream ended after {} of {} values",
                    values.len(),
                    length
                )))
            }
        }
    }
    Ok(values)
}
