//! Fixed-size circular buffer for reading history
//!
//! ## Overview
//!
//! The display surfaces (charts, latest-value cards) need a sliding window
//! of recent readings, and the sampling loop keeps producing them whether
//! or not a workflow is in flight. A ring buffer gives us exactly that with
//! fixed memory and constant-time operations:
//!
//! - O(1) insertion, overwriting the oldest reading when full
//! - O(1) access to the most recent reading
//! - O(n) chronological iteration for chart consumers
//!
//! ## Internal invariants
//!
//! - `write_pos < N` (next write position is always valid)
//! - `len <= N` (never claim more items than capacity)
//! - Iteration yields readings oldest to newest
//!
//! ## Memory layout
//!
//! Storage is an array of `Option<Reading>`; `Option` keeps the
//! implementation free of `unsafe` at the cost of one discriminant byte
//! per slot.
//!
//! ```text
//! HistoryBuffer<5> after 7 pushes (write_pos = 2):
//!
//! Physical:  [F, G, C, D, E]
//!             0  1  2  3  4
//! Logical:   [C, D, E, F, G]   (chronological order)
//! ```
//!
//! This type is not thread-safe; the station owns it and mutates it from
//! the single sampling loop.

use crate::reading::Reading;

/// Fixed-size circular buffer holding the most recent N readings
///
/// When full, a push silently discards the oldest reading. Recent data is
/// always more valuable than old data for this workload, so overwrite is
/// the right overflow policy rather than an error.
#[derive(Clone)]
pub struct HistoryBuffer<const N: usize> {
    /// Storage array using Option for uninitialized slots
    data: [Option<Reading>; N],

    /// Index where the next write will occur, wraps at N
    write_pos: usize,

    /// Current number of valid readings, saturates at N
    len: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    /// Creates a new empty buffer
    pub const fn new() -> Self {
        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a reading, overwriting the oldest when full
    pub fn push(&mut self, reading: Reading) {
        self.data[self.write_pos] = Some(reading);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Get number of stored readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Buffer capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get the most recent reading
    pub fn latest(&self) -> Option<&Reading> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one before write position
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };

        self.data[idx].as_ref()
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> HistoryIter<'_, N> {
        HistoryIter {
            buffer: self,
            count: 0,
        }
    }

    /// Clear all readings
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Gets a reading by logical index (0 = oldest, len-1 = newest)
    ///
    /// When the buffer is not full, logical and physical indices match.
    /// When full, the oldest element sits at `write_pos`, so the logical
    /// index is offset by it.
    fn get(&self, index: usize) -> Option<&Reading> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Chronological iterator over buffer contents
pub struct HistoryIter<'a, const N: usize> {
    buffer: &'a HistoryBuffer<N>,
    count: usize,
}

impl<'a, const N: usize> Iterator for HistoryIter<'a, N> {
    type Item = &'a Reading;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count >= self.buffer.len() {
            return None;
        }

        let item = self.buffer.get(self.count)?;
        self.count += 1;
        Some(item)
    }
}
