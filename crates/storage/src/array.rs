//! Struct array container
//!
//! [`StructArray`] packs records of one [`Layout`] into a single
//! [`RecordBuffer`] and tracks how many slots are populated. It offers two
//! access styles:
//!
//! - Index-based: `get`/`set`/`push`/`pop`/`swap`/`insert`/`remove`, which
//!   decode or encode whole [`Record`]s.
//! - Cursor-based: `move_to`/`next` position a byte cursor, and the field
//!   accessors read or write single fields at the cursor without
//!   materializing a record.
//!
//! # Bounds
//!
//! The default accessors do not compare indices against `len()`. An index in
//! `len()..capacity()` addresses a physically present slot (zeroed, or
//! holding stale bytes after `pop`/`truncate`); an index past `capacity()`
//! panics on the slice bounds check. The `*_checked` variants return
//! `OutOfBounds` for any index `>= len()` instead.
//!
//! # Growth
//!
//! `push` and `insert` on a full container grow it to twice its capacity,
//! or to the configured growth floor when the capacity is zero. Growth
//! replaces the buffer; borrowed views such as [`StructArray::as_bytes`]
//! cannot outlive it.

use crate::buffer::{BufferStats, RecordBuffer};
use crate::codec::FieldCodec;
use crate::config::DEFAULT_GROWTH_FLOOR;
use crate::layout::{FieldAccessor, Layout};
use std::iter::FusedIterator;
use std::sync::Arc;
use structarray_core::{Error, Record, Result, Value};

/// Growable array of fixed-layout records
#[derive(Debug, Clone)]
pub struct StructArray {
    /// Shared, immutable layout
    layout: Arc<Layout>,
    /// Exclusively owned record storage
    buffer: RecordBuffer,
    /// Populated slots
    len: usize,
    /// Byte offset used by the cursor accessors
    cursor: usize,
    /// Capacity used when growing from zero
    growth_floor: usize,
}

impl StructArray {
    /// Create an empty container with room for `capacity` records
    pub fn with_capacity(layout: Arc<Layout>, capacity: usize) -> Self {
        StructArray::with_growth_floor(layout, capacity, DEFAULT_GROWTH_FLOOR)
    }

    pub(crate) fn with_growth_floor(
        layout: Arc<Layout>,
        capacity: usize,
        growth_floor: usize,
    ) -> Self {
        debug_assert!(growth_floor > 0);
        let buffer = RecordBuffer::allocate(layout.record_size(), capacity);
        StructArray {
            layout,
            buffer,
            len: 0,
            cursor: 0,
            growth_floor,
        }
    }

    // ========================================================================
    // State
    // ========================================================================

    /// The layout shared with every container of the same type
    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    /// Number of populated records
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no records are populated
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated record slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Bytes per record
    #[inline]
    pub fn record_size(&self) -> usize {
        self.layout.record_size()
    }

    /// Current cursor position in bytes
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reallocation counters of the backing buffer
    pub fn stats(&self) -> BufferStats {
        self.buffer.stats()
    }

    /// Bytes of the populated records, in the layout's wire format
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.bytes()[..self.len * self.record_size()]
    }

    // ========================================================================
    // Cursor Access
    // ========================================================================

    /// Point the cursor at record `index`
    #[inline]
    pub fn move_to(&mut self, index: usize) {
        self.cursor = index * self.layout.record_size();
    }

    /// Point the cursor at record `index`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= len()`.
    pub fn move_checked(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.move_to(index);
        Ok(())
    }

    /// Advance the cursor by one record
    #[inline]
    pub fn next(&mut self) {
        self.cursor += self.layout.record_size();
    }

    /// Read a field (by declaration index) of the record at the cursor
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a field index or the cursor is outside the
    /// allocation.
    #[inline]
    pub fn read_field(&self, field: usize) -> Value {
        self.layout
            .decode_field(field, &self.buffer.bytes()[self.cursor..])
    }

    /// Write a field (by declaration index) of the record at the cursor
    ///
    /// # Panics
    ///
    /// Panics if `field` is not a field index or the cursor is outside the
    /// allocation.
    #[inline]
    pub fn write_field(&mut self, field: usize, value: impl Into<Value>) {
        let cursor = self.cursor;
        self.layout
            .encode_field(field, &mut self.buffer.bytes_mut()[cursor..], &value.into())
    }

    /// Read a field by name at the cursor
    ///
    /// Resolves the name on every call; prefer [`StructArray::read`] with a
    /// [`FieldAccessor`] in loops.
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` if the schema has no such field.
    pub fn read_named(&self, name: &str) -> Result<Value> {
        let field = self.field_index(name)?;
        Ok(self.read_field(field))
    }

    /// Write a field by name at the cursor
    ///
    /// # Errors
    ///
    /// Returns `UnknownField` if the schema has no such field.
    pub fn write_named(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let field = self.field_index(name)?;
        self.write_field(field, value);
        Ok(())
    }

    /// Read a typed field at the cursor
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside the allocation.
    #[inline(always)]
    pub fn read<T: FieldCodec>(&self, field: FieldAccessor<T>) -> T {
        field.read(&self.buffer.bytes()[self.cursor..])
    }

    /// Write a typed field at the cursor
    ///
    /// # Panics
    ///
    /// Panics if the cursor is outside the allocation.
    #[inline(always)]
    pub fn write<T: FieldCodec>(&mut self, field: FieldAccessor<T>, value: T) {
        let cursor = self.cursor;
        field.write(&mut self.buffer.bytes_mut()[cursor..], value)
    }

    /// Decode the whole record at the cursor
    pub fn read_record(&self) -> Record {
        self.layout
            .decode_record(&self.buffer.bytes()[self.cursor..])
    }

    /// Encode a whole record at the cursor
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the record has the wrong number of
    /// fields and `MissingField` if it lacks one of the layout's fields.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let cursor = self.cursor;
        self.layout
            .encode_record(&mut self.buffer.bytes_mut()[cursor..], record)
    }

    // ========================================================================
    // Index Access
    // ========================================================================

    /// Decode the record in slot `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()` (for non-empty layouts).
    #[inline]
    pub fn get(&self, index: usize) -> Record {
        self.layout.decode_record(self.buffer.slot(index))
    }

    /// Decode the record at a populated index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= len()`.
    pub fn get_checked(&self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        Ok(self.get(index))
    }

    /// Encode every field of `record` into slot `index`
    ///
    /// Values are matched to fields by name.
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the record has the wrong number of
    /// fields and `MissingField` if it lacks one of the layout's fields; the
    /// slot is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()` (for non-empty layouts).
    pub fn set(&mut self, index: usize, record: &Record) -> Result<()> {
        self.layout
            .encode_record(self.buffer.slot_mut(index), record)
    }

    /// Encode a record at a populated index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= len()` and `FieldCountMismatch`
    /// for a record of the wrong shape.
    pub fn set_checked(&mut self, index: usize, record: &Record) -> Result<()> {
        self.check_index(index)?;
        self.set(index, record)
    }

    /// Append a record, growing the buffer when full
    ///
    /// Values are matched to fields by name.
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` if the record has the wrong number of
    /// fields and `MissingField` if it lacks one of the layout's fields; the
    /// container is left unchanged.
    pub fn push(&mut self, record: &Record) -> Result<()> {
        let values = self.layout.record_values(record)?;
        self.push_values(&values)
    }

    /// Append values given in declaration order
    ///
    /// # Errors
    ///
    /// Returns `FieldCountMismatch` unless exactly one value per field is
    /// supplied; the container is left unchanged.
    pub fn push_values(&mut self, values: &[Value]) -> Result<()> {
        self.layout.check_arity(values.len())?;
        if self.len == self.capacity() {
            self.grow_for_insert();
        }
        self.layout
            .encode_values(self.buffer.slot_mut(self.len), values)?;
        self.len += 1;
        Ok(())
    }

    /// Remove the last record and return it
    ///
    /// The bytes stay in the buffer until the slot is reused.
    pub fn pop(&mut self) -> Option<Record> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.get(self.len))
    }

    /// Shorten the container to `len` records without decoding them
    ///
    /// Has no effect if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Remove all records; capacity and cursor are unchanged
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchange two records by decoding both and re-encoding them
    ///
    /// `swap(i, i)` leaves the record unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= capacity()` (for non-empty layouts).
    pub fn swap(&mut self, i: usize, j: usize) {
        let left = self.get(i);
        let right = self.get(j);
        self.write_slot(i, right.values());
        self.write_slot(j, left.values());
    }

    /// Exchange two populated records
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is `>= len()`.
    pub fn swap_checked(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.swap(i, j);
        Ok(())
    }

    /// Exchange two records by swapping their raw bytes in place
    ///
    /// Produces the same result as [`StructArray::swap`]; it avoids decoding
    /// and pays off for records with many fields.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= capacity()`.
    pub fn swap_bytes(&mut self, i: usize, j: usize) {
        self.buffer.swap_slots(i, j);
    }

    /// Insert a record at `index`, shifting later records towards the end
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index > len()`, and `FieldCountMismatch`
    /// or `MissingField` for a record that does not match the layout; the
    /// container is left unchanged.
    pub fn insert(&mut self, index: usize, record: &Record) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfBounds {
                index,
                length: self.len,
            });
        }
        let values = self.layout.record_values(record)?;
        if self.len == self.capacity() {
            self.grow_for_insert();
        }
        self.buffer.shift_right(index, self.len);
        self.write_slot(index, &values);
        self.len += 1;
        Ok(())
    }

    /// Remove the record at `index`, shifting later records towards the start
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        let record = self.get(index);
        self.buffer.shift_left(index, self.len);
        self.len -= 1;
        Ok(record)
    }

    // ========================================================================
    // Capacity Management
    // ========================================================================

    /// Reallocate the buffer to exactly `capacity` records
    ///
    /// Populated records are preserved. Capacities smaller than the current
    /// one are accepted as long as they hold `len()` records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `capacity < len()`.
    pub fn grow(&mut self, capacity: usize) -> Result<()> {
        self.buffer.grow(capacity, self.len)
    }

    /// Ensure room for at least `additional` more records
    ///
    /// Follows the doubling policy, so repeated small reservations stay
    /// amortized O(1).
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        if required <= self.capacity() {
            return;
        }
        let target = required.max(self.next_capacity());
        self.buffer.reallocate(target, self.len);
    }

    /// Reallocate the buffer to exactly `len()` records
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.buffer.reallocate(self.len, self.len);
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterate over decoded records `0..len()`
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            front: 0,
            back: self.len,
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn next_capacity(&self) -> usize {
        match self.capacity() {
            0 => self.growth_floor,
            capacity => capacity.saturating_mul(2),
        }
    }

    fn grow_for_insert(&mut self) {
        let target = self.next_capacity();
        self.buffer.reallocate(target, self.len);
    }

    /// Encode values that are already known to match the layout
    #[inline]
    fn write_slot(&mut self, index: usize, values: &[Value]) {
        let slot = self.buffer.slot_mut(index);
        for (field, value) in self.layout.fields().iter().zip(values) {
            field.encode(slot, value);
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::OutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(())
    }

    fn field_index(&self, name: &str) -> Result<usize> {
        self.layout
            .field_index(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }
}

/// Iterator over the decoded records of a [`StructArray`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    array: &'a StructArray,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.front == self.back {
            return None;
        }
        let record = self.array.get(self.front);
        self.front += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Record> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.array.get(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a StructArray {
    type Item = Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
