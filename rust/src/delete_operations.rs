//! DELETE operations for UnrolledList.
//!
//! This module contains all the removal operations: pops at both ends,
//! positional and range erasure, and the helpers that unlink and release
//! buckets once their last element is gone.

use crate::allocator::BucketAllocator;
use crate::error::{ListResult, ListResultExt, UnrolledListError};
use crate::types::{NodeId, Position, UnrolledList};

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    // ============================================================================
    // POP OPERATIONS
    // ============================================================================

    /// Remove and return the last element, or `None` if the list is empty.
    ///
    /// Releases the tail bucket if it becomes empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail;
        let value = self.arena.get_mut(tail)?.pop()?;
        self.len -= 1;
        self.release_if_empty(tail);
        Some(value)
    }

    /// Remove and return the first element, or `None` if the list is empty.
    ///
    /// The remaining elements of the head bucket slide down one slot so the
    /// bucket stays left-packed; the head bucket is released if it becomes
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head;
        let value = self.arena.get_mut(head)?.pop_front()?;
        self.len -= 1;
        self.release_if_empty(head);
        Some(value)
    }

    // ============================================================================
    // POSITIONAL REMOVAL
    // ============================================================================

    /// Remove the element at `pos` and return the position of the element
    /// that followed it (the end position if it was the last).
    ///
    /// Positions of later elements in the same bucket go stale; if the bucket
    /// empties it is released and every position into it goes stale.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `pos` is the end position or not a live element.
    pub fn erase(&mut self, pos: Position) -> ListResult<Position> {
        let (value, next) = self.take_at(pos).with_operation("erase")?;
        drop(value);
        Ok(next)
    }

    /// Remove and return the element at `pos`.
    pub fn remove(&mut self, pos: Position) -> ListResult<T> {
        self.take_at(pos)
            .with_operation("remove")
            .map(|(value, _)| value)
    }

    /// Remove the elements in `[first, last)` and return the position that
    /// now holds what `last` held.
    ///
    /// The range length is measured before anything is removed, so `last`
    /// may be any position reachable from `first` (including the end
    /// position) even though erasing shifts slots around it.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `first` is not live or `last` is not reachable
    /// from `first`. On error nothing has been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32, 3> = (0..10).collect();
    /// let first = list.nth_position(2);
    /// let last = list.nth_position(7);
    /// let next = list.erase_range(first, last).unwrap();
    ///
    /// assert_eq!(list.get(next), Some(&7));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 7, 8, 9]);
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> ListResult<Position> {
        let count = self.distance(first, last).with_operation("erase_range")?;
        let mut pos = first;
        for _ in 0..count {
            pos = self.erase(pos)?;
        }
        Ok(pos)
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Remove the element at `pos`, returning it and the position of its successor.
    pub(crate) fn take_at(&mut self, pos: Position) -> ListResult<(T, Position)> {
        let bucket = self.checked_bucket_mut(pos)?;
        let value = bucket.remove(pos.index).ok_or_else(|| {
            UnrolledListError::data_integrity("remove", "checked slot was not live")
        })?;
        let (remaining, next) = (bucket.len(), bucket.next);
        self.len -= 1;

        let following = if remaining == 0 {
            self.unlink_bucket(pos.node);
            self.start_of(next)
        } else if pos.index < remaining {
            pos
        } else {
            self.start_of(next)
        };
        Ok((value, following))
    }

    /// Number of steps from `first` to `last`.
    fn distance(&self, first: Position, last: Position) -> ListResult<usize> {
        if !first.is_end() {
            self.checked_bucket(first)?;
        }
        let mut pos = first;
        let mut steps = 0usize;
        while pos != last {
            if pos.is_end() {
                return Err(UnrolledListError::invalid_position(
                    last.node,
                    last.index,
                    "not reachable from the range start",
                ));
            }
            pos = self.next_position(pos);
            steps += 1;
        }
        Ok(steps)
    }

    /// Release bucket `id` if it holds no elements. Returns true if released.
    pub(crate) fn release_if_empty(&mut self, id: NodeId) -> bool {
        match self.arena.get(id) {
            Some(bucket) if bucket.is_empty() => self.unlink_bucket(id),
            _ => false,
        }
    }

    /// Detach bucket `id` from the chain, repairing neighbour links and
    /// head/tail, then hand it back to the allocator.
    pub(crate) fn unlink_bucket(&mut self, id: NodeId) -> bool {
        let (prev, next) = match self.arena.get(id) {
            Some(bucket) => (bucket.prev, bucket.next),
            None => return false,
        };
        match self.arena.get_mut(prev) {
            Some(bucket) => bucket.next = next,
            None => self.head = next,
        }
        match self.arena.get_mut(next) {
            Some(bucket) => bucket.prev = prev,
            None => self.tail = prev,
        }
        self.arena.deallocate(id)
    }
}
