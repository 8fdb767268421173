//! INSERT operations for UnrolledList.
//!
//! This module contains all the insertion operations: pushes at both ends,
//! positional insertion, bucket splitting, and the helpers that link newly
//! allocated buckets into the chain.

use std::alloc::{handle_alloc_error, Layout};

use crate::allocator::BucketAllocator;
use crate::error::{ListResult, ListResultExt, UnrolledListError};
use crate::node::Bucket;
use crate::types::{NodeId, Position, UnrolledList, NULL_NODE};

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    // ============================================================================
    // PUSH OPERATIONS
    // ============================================================================

    /// Append an element to the back of the list.
    ///
    /// Allocates a new bucket only when the tail bucket is full.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if no bucket can be allocated,
    /// like the standard collections. Use [`try_push_back`](Self::try_push_back)
    /// to observe the failure instead.
    pub fn push_back(&mut self, value: T) {
        if self.try_push_back(value).is_err() {
            bucket_alloc_failure::<T, K>();
        }
    }

    /// Prepend an element to the front of the list.
    ///
    /// If the head bucket has room its elements shift one slot right to make
    /// space at slot 0; otherwise a new head bucket is allocated.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if no bucket can be allocated.
    pub fn push_front(&mut self, value: T) {
        if self.try_push_front(value).is_err() {
            bucket_alloc_failure::<T, K>();
        }
    }

    /// Append an element, reporting allocation failure instead of aborting.
    ///
    /// On error the list is unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32, 2> = UnrolledList::new();
    /// list.try_push_back(1).unwrap();
    /// list.try_push_back(2).unwrap();
    /// list.try_push_back(3).unwrap();
    /// assert_eq!(list.bucket_count(), 2);
    /// ```
    pub fn try_push_back(&mut self, value: T) -> ListResult<()> {
        let tail = match self.arena.get(self.tail) {
            Some(bucket) if !bucket.is_full() => self.tail,
            _ => {
                let id = self.arena.allocate().with_operation("push_back")?;
                self.link_between(id, self.tail, NULL_NODE);
                id
            }
        };
        self.node_mut(tail)?.push(value);
        self.len += 1;
        Ok(())
    }

    /// Prepend an element, reporting allocation failure instead of aborting.
    ///
    /// On error the list is unchanged and `value` is dropped.
    pub fn try_push_front(&mut self, value: T) -> ListResult<()> {
        let head = match self.arena.get(self.head) {
            Some(bucket) if !bucket.is_full() => self.head,
            _ => {
                let id = self.arena.allocate().with_operation("push_front")?;
                self.link_between(id, NULL_NODE, self.head);
                id
            }
        };
        self.node_mut(head)?.insert(0, value);
        self.len += 1;
        Ok(())
    }

    // ============================================================================
    // POSITIONAL INSERT OPERATIONS
    // ============================================================================

    /// Insert `value` before the element at `pos` and return its position.
    ///
    /// Inserting at [`end`](Self::end) appends. A bucket with room shifts its
    /// elements from `pos` onwards one slot right; a full bucket is split at
    /// its midpoint first. Either way, positions of elements at or after `pos`
    /// in that bucket go stale.
    ///
    /// # Errors
    ///
    /// `InvalidPosition` if `pos` is not a live element of this list,
    /// `AllocationError` if a split needs a bucket and none is available. On
    /// error the list is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32, 2> = UnrolledList::from([1, 2, 3]);
    /// let two = list.nth_position(1);
    /// let inserted = list.insert(two, 99).unwrap();
    ///
    /// assert_eq!(list.get(inserted), Some(&99));
    /// assert_eq!(list.buckets(), vec![&[1][..], &[99, 2][..], &[3][..]]);
    /// ```
    pub fn insert(&mut self, pos: Position, value: T) -> ListResult<Position> {
        if pos.is_end() {
            self.try_push_back(value).with_operation("insert")?;
            return Ok(self.last_position());
        }

        let bucket = self.checked_bucket_mut(pos).with_operation("insert")?;
        if !bucket.is_full() {
            bucket.insert(pos.index, value);
            self.len += 1;
            return Ok(pos);
        }

        self.split_and_insert(pos, value)
    }

    /// Insert `count` clones of `value` before `pos`.
    ///
    /// Returns the position of the first inserted element, or `pos` when
    /// `count` is zero. Each element is inserted on its own, so a burst of
    /// insertions into one bucket may split it several times.
    ///
    /// If cloning panics, the elements inserted so far stay in the list and
    /// the list remains consistent.
    pub fn insert_n(&mut self, pos: Position, count: usize, value: T) -> ListResult<Position>
    where
        T: Clone,
    {
        if count == 0 {
            return self.ensure_insert_position(pos).map(|()| pos);
        }
        self.insert_iter(pos, std::iter::repeat(value).take(count))
    }

    /// Insert every element of `iter` before `pos`, keeping their order.
    ///
    /// Returns the position of the first inserted element, or `pos` when the
    /// iterator is empty.
    pub fn insert_iter<I>(&mut self, pos: Position, iter: I) -> ListResult<Position>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_insert_position(pos)?;

        let mut cursor = pos;
        let mut last_inserted = None;
        let mut inserted = 0usize;
        for value in iter {
            let at = self.insert(cursor, value)?;
            // The element that was at `pos` now follows the new one.
            cursor = self.next_position(at);
            last_inserted = Some(at);
            inserted += 1;
        }

        // Later insertions may have split the bucket holding the first new
        // element, so walk back from the last one instead of remembering it.
        Ok(match last_inserted {
            Some(mut first) => {
                for _ in 1..inserted {
                    first = self.prev_position(first);
                }
                first
            }
            None => pos,
        })
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Split the full bucket at `pos` and insert `value` into the half that
    /// logically holds `pos.index`.
    fn split_and_insert(&mut self, pos: Position, value: T) -> ListResult<Position> {
        let next = self.node(pos.node)?.next;
        let new_id = self.arena.allocate().with_operation("split")?;
        self.link_between(new_id, pos.node, next);

        let mid = K / 2;
        let upper = self.start_of(new_id);
        let target = match self.arena.get_pair_mut(pos.node, new_id) {
            Some((old, new)) => {
                old.move_upper_into(mid, new);
                if pos.index < mid {
                    old.insert(pos.index, value);
                    pos
                } else {
                    new.insert(pos.index - mid, value);
                    upper.at_index(pos.index - mid)
                }
            }
            None => {
                self.unlink_bucket(new_id);
                return Err(UnrolledListError::data_integrity(
                    "split",
                    &format!("buckets {} and {} not both reachable", pos.node, new_id),
                ));
            }
        };
        self.len += 1;
        Ok(target)
    }

    /// End, or a live element position.
    fn ensure_insert_position(&self, pos: Position) -> ListResult<()> {
        if pos.is_end() {
            Ok(())
        } else {
            self.checked_bucket(pos).map(|_| ())
        }
    }

    /// Link the unlinked bucket `id` between `prev` and `next`, either of
    /// which may be `NULL_NODE`. Updates head and tail as needed.
    pub(crate) fn link_between(&mut self, id: NodeId, prev: NodeId, next: NodeId) {
        if let Some(bucket) = self.arena.get_mut(id) {
            bucket.prev = prev;
            bucket.next = next;
        }
        match self.arena.get_mut(prev) {
            Some(bucket) => bucket.next = id,
            None => self.head = id,
        }
        match self.arena.get_mut(next) {
            Some(bucket) => bucket.prev = id,
            None => self.tail = id,
        }
    }
}

#[cold]
fn bucket_alloc_failure<T, const K: usize>() -> ! {
    handle_alloc_error(Layout::new::<Bucket<T, K>>())
}
