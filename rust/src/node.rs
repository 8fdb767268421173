//! Bucket implementation for UnrolledList.
//!
//! A bucket holds a left-packed run of up to `K` elements plus the links to
//! its neighbours in the chain. All element placement inside a bucket
//! (shifting to open or close a gap, moving the upper half out during a split)
//! lives here; the list only decides which bucket to touch.

use std::fmt;

use crate::slots::SlotArray;
use crate::types::{NodeId, MIN_NODE_CAPACITY, NULL_NODE};

/// Fixed-capacity segment of the list.
///
/// Live elements always occupy slots `[0, len)`.
pub struct Bucket<T, const K: usize> {
    slots: SlotArray<T, K>,
    len: usize,
    /// Previous bucket in the chain.
    pub(crate) prev: NodeId,
    /// Next bucket in the chain.
    pub(crate) next: NodeId,
}

impl<T, const K: usize> Bucket<T, K> {
    const CAPACITY_CHECK: () = assert!(
        K >= MIN_NODE_CAPACITY,
        "bucket capacity must be at least 2"
    );

    /// Create an empty, unlinked bucket.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            slots: SlotArray::new(),
            len: 0,
            prev: NULL_NODE,
            next: NULL_NODE,
        }
    }

    // ============================================================================
    // GET OPERATIONS
    // ============================================================================

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == K
    }

    /// Maximum number of elements this bucket can hold.
    pub const fn capacity(&self) -> usize {
        K
    }

    /// Previous bucket in the chain, `NULL_NODE` for the head.
    pub fn prev(&self) -> NodeId {
        self.prev
    }

    /// Next bucket in the chain, `NULL_NODE` for the tail.
    pub fn next(&self) -> NodeId {
        self.next
    }

    /// The live elements in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are live.
        unsafe { self.slots.prefix(self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are live.
        unsafe { self.slots.prefix_mut(self.len) }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        // SAFETY: bounds checked against len.
        (index < self.len).then(|| unsafe { self.slots.get(index) })
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: bounds checked against len.
            Some(unsafe { self.slots.get_mut(index) })
        } else {
            None
        }
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Append after the last live element.
    pub(crate) fn push(&mut self, value: T) {
        assert!(!self.is_full(), "push into a full bucket");
        // SAFETY: slot `len` is uninitialized and below K.
        unsafe { self.slots.write(self.len, value) };
        self.len += 1;
    }

    /// Insert at `index`, shifting `[index, len)` one slot to the right.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        assert!(!self.is_full(), "insert into a full bucket");
        assert!(index <= self.len, "insert index {} past length {}", index, self.len);
        // SAFETY: len < K so the shifted run stays in bounds, and slot `index`
        // is uninitialized once the shift is done.
        unsafe {
            self.slots.shift_right(index, self.len);
            self.slots.write(index, value);
        }
        self.len += 1;
    }

    /// Move slots `[mid, len)` into the empty bucket `dst`, keeping their order.
    pub(crate) fn move_upper_into(&mut self, mid: usize, dst: &mut Self) {
        assert!(dst.is_empty(), "split target must be empty");
        assert!(mid <= self.len, "split point {} past length {}", mid, self.len);
        let count = self.len - mid;
        // SAFETY: source slots [mid, len) are live, destination slots are all free.
        unsafe { self.slots.transfer_to(mid, count, &mut dst.slots) };
        self.len = mid;
        dst.len = count;
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Remove the element at `index`, shifting the rest of the run left.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: slot `index` is live; after reading it the tail run
        // [index + 1, len) slides down over it.
        let value = unsafe {
            let value = self.slots.read(index);
            self.slots.shift_left(index, self.len);
            value
        };
        self.len -= 1;
        Some(value)
    }

    /// Remove the last element.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the old last slot was live and is no longer counted.
        Some(unsafe { self.slots.read(self.len) })
    }

    /// Remove the first element.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }
}

impl<T, const K: usize> Default for Bucket<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const K: usize> Drop for Bucket<T, K> {
    fn drop(&mut self) {
        let len = std::mem::replace(&mut self.len, 0);
        // SAFETY: slots [0, len) were live and are no longer counted.
        unsafe { self.slots.drop_prefix(len) };
    }
}

impl<T: fmt::Debug, const K: usize> fmt::Debug for Bucket<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("elements", &self.as_slice())
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}
