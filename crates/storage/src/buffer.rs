//! Record buffer - contiguous record storage
//!
//! RecordBuffer stores fixed-size records back to back in a single
//! zero-initialized byte allocation.
//!
//! Layout: `[r0_byte0 .. r0_byteN, r1_byte0 .. r1_byteN, ...]`. Record `i`
//! occupies `[i * record_size, (i + 1) * record_size)`.
//!
//! # Invariants
//!
//! - `bytes.len() == capacity * record_size` at all times
//! - Growth allocates a fresh buffer and copies the populated prefix; the
//!   old allocation is dropped, never resized in place
//! - The buffer never tracks length; the owning container passes it in

use structarray_core::{Error, Result};
use tracing::debug;

/// Counters describing the reallocation history of a buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferStats {
    /// Number of reallocations performed by `grow`
    pub grows: u64,
    /// Total bytes copied across all reallocations
    pub bytes_copied: u64,
}

/// Single contiguous allocation holding `capacity` records
#[derive(Debug, Clone)]
pub struct RecordBuffer {
    /// Raw record bytes
    bytes: Box<[u8]>,
    /// Bytes per record
    record_size: usize,
    /// Allocated record slots
    ///
    /// Tracked explicitly because a zero-sized record cannot derive it from
    /// the byte length.
    capacity: usize,
    stats: BufferStats,
}

impl RecordBuffer {
    /// Allocate a zero-initialized buffer of `capacity` records
    ///
    /// # Panics
    ///
    /// Panics if `capacity * record_size` overflows `usize`.
    pub fn allocate(record_size: usize, capacity: usize) -> Self {
        RecordBuffer {
            bytes: vec![0u8; byte_len(record_size, capacity)].into_boxed_slice(),
            record_size,
            capacity,
            stats: BufferStats::default(),
        }
    }

    /// Replace the allocation with one of `new_capacity` records
    ///
    /// The first `length` records are copied into the new allocation; all
    /// other bytes of the new allocation are zero. `new_capacity` may be
    /// smaller than the current capacity as long as it holds `length`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `new_capacity < length`.
    pub fn grow(&mut self, new_capacity: usize, length: usize) -> Result<()> {
        if new_capacity < length {
            return Err(Error::InvalidCapacity {
                requested: new_capacity,
                length,
            });
        }
        self.reallocate(new_capacity, length);
        Ok(())
    }

    /// Replace the allocation, copying the first `length` records
    ///
    /// Callers guarantee `length <= new_capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity * record_size` overflows `usize`.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, length: usize) {
        debug_assert!(length <= self.capacity && length <= new_capacity);

        let populated = length * self.record_size;
        let mut bytes = vec![0u8; byte_len(self.record_size, new_capacity)].into_boxed_slice();
        bytes[..populated].copy_from_slice(&self.bytes[..populated]);

        debug!(
            target: "structarray::buffer",
            old_capacity = self.capacity,
            new_capacity,
            bytes_copied = populated,
            "Record buffer reallocated"
        );

        self.bytes = bytes;
        self.capacity = new_capacity;
        self.stats.grows += 1;
        self.stats.bytes_copied += populated as u64;
    }

    /// Allocated record slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per record
    #[inline]
    pub fn record_size(&self) -> usize {
        self.record_size
    }

    /// Reallocation counters
    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Whole allocation
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whole allocation, mutable
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Bytes of slot `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity` and the record size is non-zero.
    #[inline]
    pub fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.record_size;
        &self.bytes[start..start + self.record_size]
    }

    /// Bytes of slot `index`, mutable
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity` and the record size is non-zero.
    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.record_size;
        &mut self.bytes[start..start + self.record_size]
    }

    /// Exchange the bytes of two slots in place
    ///
    /// # Panics
    ///
    /// Panics if either index is outside the allocation.
    pub fn swap_slots(&mut self, i: usize, j: usize) {
        if i == j || self.record_size == 0 {
            return;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let size = self.record_size;
        let (head, tail) = self.bytes.split_at_mut(hi * size);
        head[lo * size..(lo + 1) * size].swap_with_slice(&mut tail[..size]);
    }

    /// Move slots `[from, length)` by one slot towards the end
    ///
    /// Slot `from` keeps its old bytes; the caller overwrites it.
    ///
    /// # Panics
    ///
    /// Panics if `length >= capacity`.
    pub fn shift_right(&mut self, from: usize, length: usize) {
        let size = self.record_size;
        self.bytes
            .copy_within(from * size..length * size, (from + 1) * size);
    }

    /// Move slots `(from, length)` by one slot towards the start
    ///
    /// The previous contents of slot `from` are overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `length > capacity`.
    pub fn shift_left(&mut self, from: usize, length: usize) {
        let size = self.record_size;
        self.bytes
            .copy_within((from + 1) * size..length * size, from * size);
    }
}

fn byte_len(record_size: usize, capacity: usize) -> usize {
    match record_size.checked_mul(capacity) {
        Some(len) => len,
        None => panic!("capacity overflow"),
    }
}
