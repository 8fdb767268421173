//! GET operations for UnrolledList.
//!
//! This module contains the read side of the list: element access by
//! position, position arithmetic across bucket boundaries, the front/back
//! accessors and the helpers for reaching individual buckets.

use crate::allocator::BucketAllocator;
use crate::error::{ListResult, UnrolledListError};
use crate::iteration::{Cursor, CursorMut};
use crate::node::Bucket;
use crate::types::{NodeId, Position, UnrolledList};

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    // ============================================================================
    // POSITIONS
    // ============================================================================

    /// Position of the first element, or the end position if empty.
    pub fn begin(&self) -> Position {
        self.start_of(self.head)
    }

    /// The one-past-the-last position.
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Position of the last element, or the end position if empty.
    pub fn last_position(&self) -> Position {
        self.prev_position(Position::END)
    }

    /// The position after `pos`.
    ///
    /// Moves to the next bucket after a bucket's last element and to the end
    /// position after the list's last element. The end position, and any
    /// position that does not refer to a live element, map to the end position.
    pub fn next_position(&self, pos: Position) -> Position {
        match self.bucket_at(pos) {
            Some(bucket) if pos.index + 1 < bucket.len() => pos.at_index(pos.index + 1),
            Some(bucket) if pos.index < bucket.len() => self.start_of(bucket.next),
            _ => Position::END,
        }
    }

    /// The position before `pos`.
    ///
    /// From the end position this is the last element (or the end position
    /// again if the list is empty). From the first element it is the end
    /// position.
    pub fn prev_position(&self, pos: Position) -> Position {
        let node = if pos.is_end() {
            self.tail
        } else {
            match self.bucket_at(pos) {
                Some(_) if pos.index > 0 => return pos.at_index(pos.index - 1),
                Some(bucket) => bucket.prev,
                None => return Position::END,
            }
        };
        match self.arena.get(node) {
            Some(bucket) if !bucket.is_empty() => self.position_in(node, bucket.len() - 1),
            _ => Position::END,
        }
    }

    /// Position of the `n`-th element (0-based), walking from the front.
    ///
    /// Whole buckets are skipped at a time, but this is still linear in the
    /// number of buckets. Returns the end position if `n >= len()`.
    pub fn nth_position(&self, mut n: usize) -> Position {
        if n >= self.len {
            return Position::END;
        }
        let mut node = self.head;
        while let Some(bucket) = self.arena.get(node) {
            if n < bucket.len() {
                return self.position_in(node, n);
            }
            n -= bucket.len();
            node = bucket.next;
        }
        Position::END
    }

    // ============================================================================
    // ELEMENT ACCESS
    // ============================================================================

    /// The element at `pos`, or `None` for the end position or a stale one.
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.bucket_at(pos)?.get(pos.index)
    }

    /// Mutable access to the element at `pos`.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if self.bucket_at(pos).is_none() {
            return None;
        }
        self.arena.get_mut(pos.node)?.get_mut(pos.index)
    }

    end_accessors!(front, begin, "first");
    end_accessors!(back, last_position, "last");

    /// A read-only cursor at `pos`.
    pub fn cursor_at(&self, pos: Position) -> Cursor<'_, T, K, A> {
        Cursor::new(self, pos)
    }

    /// A mutable cursor at `pos`.
    pub fn cursor_at_mut(&mut self, pos: Position) -> CursorMut<'_, T, K, A> {
        CursorMut::new(self, pos)
    }

    // ============================================================================
    // BUCKET ACCESS HELPERS
    // ============================================================================

    /// Slot `index` of the live bucket `node`, stamped with its generation.
    pub(crate) fn position_in(&self, node: NodeId, index: usize) -> Position {
        match self.arena.generation(node) {
            Some(generation) => Position::new(node, index, generation),
            None => Position::END,
        }
    }

    /// First slot of `node`, or the end position when `node` is `NULL_NODE`.
    pub(crate) fn start_of(&self, node: NodeId) -> Position {
        self.position_in(node, 0)
    }

    /// The bucket `pos` points into, if it is still the bucket the position
    /// was taken from.
    fn bucket_at(&self, pos: Position) -> Option<&Bucket<T, K>> {
        match self.arena.generation(pos.node) {
            Some(generation) if generation == pos.generation => self.arena.get(pos.node),
            _ => None,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> ListResult<&Bucket<T, K>> {
        self.arena
            .get(id)
            .ok_or_else(|| UnrolledListError::dangling_bucket(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> ListResult<&mut Bucket<T, K>> {
        self.arena
            .get_mut(id)
            .ok_or_else(|| UnrolledListError::dangling_bucket(id))
    }

    /// The bucket holding the live element at `pos`.
    pub(crate) fn checked_bucket(&self, pos: Position) -> ListResult<&Bucket<T, K>> {
        if self.arena.generation(pos.node).is_some_and(|g| g != pos.generation) {
            return Err(UnrolledListError::invalid_position(
                pos.node,
                pos.index,
                "bucket was released and its id reused",
            ));
        }
        match self.arena.get(pos.node) {
            Some(bucket) if pos.index < bucket.len() => Ok(bucket),
            Some(_) => Err(UnrolledListError::invalid_position(
                pos.node,
                pos.index,
                "index past bucket length",
            )),
            None => Err(UnrolledListError::invalid_position(
                pos.node,
                pos.index,
                "bucket is not part of this list",
            )),
        }
    }

    /// Mutable form of [`checked_bucket`](Self::checked_bucket).
    pub(crate) fn checked_bucket_mut(&mut self, pos: Position) -> ListResult<&mut Bucket<T, K>> {
        self.checked_bucket(pos)?;
        self.node_mut(pos.node)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Position, UnrolledList};

    #[test]
    fn test_positions_cross_bucket_boundaries() {
        let list: UnrolledList<i32, 2> = UnrolledList::from([1, 2, 3, 4, 5]);
        let mut pos = list.begin();
        let mut seen = Vec::new();
        while pos != list.end() {
            seen.push(*list.get(pos).unwrap());
            pos = list.next_position(pos);
        }
        assert_eq!(seen, [1, 2, 3, 4, 5]);

        let mut pos = list.end();
        let mut seen = Vec::new();
        loop {
            pos = list.prev_position(pos);
            if pos.is_end() {
                break;
            }
            seen.push(*list.get(pos).unwrap());
        }
        assert_eq!(seen, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_prev_of_end_on_empty_list_stays_end() {
        let list: UnrolledList<i32, 4> = UnrolledList::new();
        assert_eq!(list.prev_position(list.end()), Position::END);
        assert_eq!(list.last_position(), Position::END);
        assert_eq!(list.next_position(list.end()), Position::END);
    }

    #[test]
    fn test_nth_position_skips_whole_buckets() {
        let list: UnrolledList<i32, 3> = (0..10).collect();
        for n in 0..10 {
            assert_eq!(list.get(list.nth_position(n)), Some(&(n as i32)));
        }
        assert!(list.nth_position(10).is_end());
    }

    #[test]
    fn test_front_and_back() {
        let mut list: UnrolledList<i32, 2> = UnrolledList::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);

        list.extend([10, 20, 30]);
        assert_eq!(list.front(), Some(&10));
        assert_eq!(list.back(), Some(&30));

        *list.front_mut().unwrap() += 1;
        *list.back_mut().unwrap() += 1;
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [11, 20, 31]);
    }

    #[test]
    fn test_end_positions_compare_equal_across_lists() {
        let a: UnrolledList<i32, 2> = UnrolledList::from([1]);
        let b: UnrolledList<u8, 4> = UnrolledList::new();
        assert_eq!(a.end(), b.end());
        assert_eq!(b.begin(), b.end());
    }
}
