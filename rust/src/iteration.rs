//! Iterator implementations for UnrolledList.
//!
//! This module contains the borrowing and owning iterators, which walk the
//! bucket chain in either direction, and the two cursor types that expose the
//! list's positions for navigation and in-place editing.

use std::fmt;
use std::iter::{Flatten, FusedIterator};

use crate::allocator::BucketAllocator;
use crate::error::ListResult;
use crate::types::{Position, UnrolledList};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Double-ended iterator over shared references, in list order.
pub struct Iter<'a, T, const K: usize, A> {
    list: &'a UnrolledList<T, K, A>,
    front: Position,
    back: Position,
    remaining: usize,
}

/// Double-ended iterator over mutable references, in list order.
pub struct IterMut<'a, T> {
    elements: Flatten<std::vec::IntoIter<&'a mut [T]>>,
    remaining: usize,
}

/// Owning iterator that drains the list from both ends.
pub struct IntoIter<T, const K: usize, A> {
    list: UnrolledList<T, K, A>,
}

/// A read-only cursor: a list and a position in it.
///
/// Navigation never fails; stepping off either end lands on the end
/// position, and stepping back from the end position lands on the last
/// element.
pub struct Cursor<'a, T, const K: usize, A> {
    list: &'a UnrolledList<T, K, A>,
    pos: Position,
}

/// A cursor with exclusive access, able to edit the list around its position.
///
/// Converts into a [`Cursor`], never the other way round.
pub struct CursorMut<'a, T, const K: usize, A> {
    list: &'a mut UnrolledList<T, K, A>,
    pos: Position,
}

// ============================================================================
// UNROLLEDLIST ITERATOR METHODS
// ============================================================================

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    /// Returns an iterator over the elements, front to back.
    ///
    /// `iter().rev()` walks back to front.
    pub fn iter(&self) -> Iter<'_, T, K, A> {
        Iter {
            list: self,
            front: self.begin(),
            back: self.last_position(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let ids = self.chain_ids();
        let buckets = self.arena.get_many_mut(&ids);
        debug_assert!(buckets.is_some(), "chained buckets are not distinct and live");
        let slices: Vec<&mut [T]> = buckets
            .unwrap_or_default()
            .into_iter()
            .map(|bucket| bucket.as_mut_slice())
            .collect();
        let remaining = slices.iter().map(|slice| slice.len()).sum::<usize>();
        IterMut {
            elements: slices.into_iter().flatten(),
            remaining,
        }
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> Iterator for Iter<'a, T, K, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.list.get(self.front)?;
        self.front = self.list.next_position(self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> DoubleEndedIterator for Iter<'a, T, K, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.list.get(self.back)?;
        self.back = self.list.prev_position(self.back);
        self.remaining -= 1;
        Some(item)
    }
}

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> ExactSizeIterator for Iter<'a, T, K, A> {}

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> FusedIterator for Iter<'a, T, K, A> {}

impl<'a, T, const K: usize, A> Clone for Iter<'a, T, K, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// ITERMUT IMPLEMENTATION
// ============================================================================

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.elements.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.elements.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

// ============================================================================
// INTOITER IMPLEMENTATION
// ============================================================================

impl<T, const K: usize, A: BucketAllocator<T, K>> Iterator for IntoIter<T, K, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K>> DoubleEndedIterator for IntoIter<T, K, A> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, const K: usize, A: BucketAllocator<T, K>> ExactSizeIterator for IntoIter<T, K, A> {}

impl<T, const K: usize, A: BucketAllocator<T, K>> FusedIterator for IntoIter<T, K, A> {}

impl<T, const K: usize, A: BucketAllocator<T, K>> IntoIterator for UnrolledList<T, K, A> {
    type Item = T;
    type IntoIter = IntoIter<T, K, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> IntoIterator for &'a UnrolledList<T, K, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> IntoIterator for &'a mut UnrolledList<T, K, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================================================
// CURSOR IMPLEMENTATION
// ============================================================================

cursor_navigation!(Cursor);
cursor_navigation!(CursorMut);

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> Cursor<'a, T, K, A> {
    pub(crate) fn new(list: &'a UnrolledList<T, K, A>, pos: Position) -> Self {
        Self { list, pos }
    }

    /// The element under the cursor, or `None` at the end position.
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.pos)
    }

    /// The list this cursor walks.
    pub fn list(&self) -> &'a UnrolledList<T, K, A> {
        self.list
    }
}

impl<'a, T, const K: usize, A> Clone for Cursor<'a, T, K, A> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            pos: self.pos,
        }
    }
}

impl<'a, T, const K: usize, A> Copy for Cursor<'a, T, K, A> {}

impl<'a, T: fmt::Debug, const K: usize, A: BucketAllocator<T, K>> fmt::Debug for Cursor<'a, T, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).field(&self.current()).finish()
    }
}

// ============================================================================
// CURSORMUT IMPLEMENTATION
// ============================================================================

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> CursorMut<'a, T, K, A> {
    pub(crate) fn new(list: &'a mut UnrolledList<T, K, A>, pos: Position) -> Self {
        Self { list, pos }
    }

    /// The element under the cursor, or `None` at the end position.
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.pos)
    }

    /// A read-only view at the same position, borrowing this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T, K, A> {
        Cursor::new(self.list, self.pos)
    }

    /// Insert `value` before the current element (or append at the end
    /// position). The cursor moves onto the inserted element.
    pub fn insert_before(&mut self, value: T) -> ListResult<()> {
        self.pos = self.list.insert(self.pos, value)?;
        Ok(())
    }

    /// Remove the current element. The cursor moves onto its successor.
    /// Returns `None` at the end position.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.pos.is_end() {
            return None;
        }
        let (value, next) = self.list.take_at(self.pos).ok()?;
        self.pos = next;
        Some(value)
    }
}

impl<'a, T, const K: usize, A: BucketAllocator<T, K>> From<CursorMut<'a, T, K, A>> for Cursor<'a, T, K, A> {
    fn from(cursor: CursorMut<'a, T, K, A>) -> Self {
        Cursor::new(cursor.list, cursor.pos)
    }
}
