use crate::bitmap::{ceil8, Bitmap, BitmapIter};
use crate::bitstream::BitWriter;

use super::MAX_GROUPS_PER_LITERAL_RUN;

/// Streaming encoder producing run-length / bit-packed hybrid streams.
///
/// Values are buffered 8 at a time. Once 8 are held, they either extend the
/// open literal run or, when they all continue a run of one value, are
/// reclaimed into a repeated-run counter. Switching run modes flushes the
/// previous run.
#[derive(Debug)]
pub struct RleEncoder {
    bit_writer: BitWriter,

    // values not yet committed to either run type
    buffered_values: [bool; 8],
    num_buffered: usize,

    // the last value observed and the length of its trailing run, maintained
    // even while buffering literals; reaching 8 switches to a repeated run
    current_value: bool,
    repeat_count: u64,

    // values committed to the open literal run, excluding `buffered_values`;
    // always a multiple of 8
    literal_count: u64,

    // where the open literal run's indicator will be patched in
    literal_indicator_slot: Option<usize>,
}

impl Default for RleEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RleEncoder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bit_writer: BitWriter::with_capacity(capacity),
            buffered_values: [false; 8],
            num_buffered: 0,
            current_value: false,
            repeat_count: 0,
            literal_count: 0,
            literal_indicator_slot: None,
        }
    }

    /// Encodes a single value.
    #[inline]
    pub fn put(&mut self, value: bool) {
        self.put_run(value, 1)
    }

    /// Encodes `run_length` copies of `value`.
    // TODO: fold long runs directly into `repeat_count` instead of looping
    pub fn put_run(&mut self, value: bool, run_length: u64) {
        for _ in 0..run_length {
            if value == self.current_value {
                self.repeat_count += 1;
                if self.repeat_count > 8 {
                    // continuation of a committed repeated run; the value
                    // is already accounted for by the counter
                    continue;
                }
            } else {
                if self.repeat_count >= 8 {
                    // the previous value's run crossed the threshold and
                    // has now ended
                    debug_assert_eq!(self.literal_count, 0);
                    self.flush_repeated_run();
                }
                self.repeat_count = 1;
                self.current_value = value;
            }

            self.buffered_values[self.num_buffered] = value;
            self.num_buffered += 1;
            if self.num_buffered == 8 {
                debug_assert_eq!(self.literal_count % 8, 0);
                self.flush_buffered_values(false);
            }
        }
    }

    /// Encodes every value yielded by `iterator`.
    pub fn extend<I: IntoIterator<Item = bool>>(&mut self, iterator: I) {
        for value in iterator {
            self.put(value);
        }
    }

    /// Encodes the range of values a bitmap views.
    pub fn extend_from_bitmap(&mut self, bitmap: &Bitmap) {
        self.extend(BitmapIter::from_bitmap(bitmap))
    }

    /// Flushes all pending values and returns the total number of bytes
    /// written. Calling it again without an intervening `put` writes
    /// nothing further.
    pub fn flush(&mut self) -> usize {
        if self.literal_count > 0 || self.repeat_count > 0 || self.num_buffered > 0 {
            let all_repeat = self.literal_count == 0
                && (self.repeat_count == self.num_buffered as u64 || self.num_buffered == 0);
            if self.repeat_count > 0 && all_repeat {
                self.flush_repeated_run();
            } else {
                self.literal_count += self.num_buffered as u64;
                self.flush_literal_run(true);
                self.repeat_count = 0;
            }
        }
        debug_assert_eq!(self.num_buffered, 0);
        debug_assert_eq!(self.literal_count, 0);
        debug_assert_eq!(self.repeat_count, 0);
        self.bit_writer.finish()
    }

    /// Resets the encoder to its freshly constructed state, retaining the
    /// backing allocation.
    pub fn clear(&mut self) {
        self.bit_writer.clear();
        self.num_buffered = 0;
        self.current_value = false;
        self.repeat_count = 0;
        self.literal_count = 0;
        self.literal_indicator_slot = None;
    }

    /// The encoded bytes written so far.
    pub fn buffer(&self) -> &[u8] {
        self.bit_writer.buffer()
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bit_writer.bytes_written()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flushes and returns the backing buffer.
    pub fn into_inner(mut self) -> Vec<u8> {
        self.flush();
        self.bit_writer.into_inner()
    }

    // Decides what the 8 buffered values are: a continuation of a repeated
    // run, in which case they are reclaimed, or another literal group.
    fn flush_buffered_values(&mut self, done: bool) {
        if self.repeat_count >= 8 {
            // the buffered values are subsumed by the repeated-run counter
            self.num_buffered = 0;
            if self.literal_count != 0 {
                // the open literal run's bits are already written out; it
                // only misses its indicator
                debug_assert_eq!(self.literal_count % 8, 0);
                debug_assert_eq!(self.repeat_count, 8);
                self.flush_literal_run(true);
            }
            debug_assert_eq!(self.literal_count, 0);
            return;
        }

        self.literal_count += self.num_buffered as u64;
        let num_groups = ceil8(self.literal_count as usize) as u64;
        if num_groups + 1 > MAX_GROUPS_PER_LITERAL_RUN {
            // the reserved indicator byte cannot express another group
            debug_assert!(self.literal_indicator_slot.is_some());
            self.flush_literal_run(true);
        } else {
            self.flush_literal_run(done);
        }
        self.repeat_count = 0;
    }

    // Writes the buffered values as bit-packed literals. When
    // `update_indicator_byte`, the run is complete: its indicator is patched
    // in and the run closed.
    fn flush_literal_run(&mut self, update_indicator_byte: bool) {
        let slot = match self.literal_indicator_slot {
            Some(slot) => slot,
            None => {
                let slot = self.bit_writer.reserve_byte_slot();
                self.literal_indicator_slot = Some(slot);
                slot
            }
        };

        for i in 0..self.num_buffered {
            self.bit_writer.put_bool(self.buffered_values[i]);
        }
        self.num_buffered = 0;

        if update_indicator_byte {
            let num_groups = ceil8(self.literal_count as usize) as u64;
            debug_assert!(num_groups >= 1);
            debug_assert!(num_groups <= MAX_GROUPS_PER_LITERAL_RUN);
            self.bit_writer
                .patch_byte(slot, ((num_groups << 1) | 1) as u8);
            self.literal_indicator_slot = None;
            self.literal_count = 0;
        }
    }

    fn flush_repeated_run(&mut self) {
        debug_assert!(self.repeat_count > 0);
        // the lsb of the indicator is left unset for a repeated run
        self.bit_writer.put_vlq(self.repeat_count << 1);
        self.bit_writer.put_aligned(self.current_value as u8);
        self.num_buffered = 0;
        self.repeat_count = 0;
    }
}
