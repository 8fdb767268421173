//! List structure management operations for UnrolledList.
//!
//! This module contains the whole-container operations: size queries,
//! clearing, assignment, swapping, bucket statistics and the comparison
//! traits.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::allocator::BucketAllocator;
use crate::compact_arena::{CompactArena, CompactArenaStats};
use crate::node::Bucket;
use crate::types::{NodeId, UnrolledList, NULL_NODE};

// ============================================================================
// LIST STRUCTURE OPERATIONS
// ============================================================================

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upper bound on the number of elements, given the allocator's bucket limit.
    pub fn max_size(&self) -> usize {
        self.arena.max_buckets().saturating_mul(K)
    }

    /// Returns the number of buckets in the chain.
    pub fn bucket_count(&self) -> usize {
        self.chain_ids().len()
    }

    /// The allocator this list takes its buckets from.
    pub fn allocator(&self) -> &A {
        &self.arena
    }

    /// Remove every element and release every bucket.
    pub fn clear(&mut self) {
        // Reset the chain first so a panicking element drop cannot leave
        // head/tail pointing into released buckets.
        self.head = NULL_NODE;
        self.tail = NULL_NODE;
        self.len = 0;
        self.arena.clear();
    }

    /// Shorten the list to its first `len` elements.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop_back();
        }
    }

    /// Exchange the contents of two lists, allocators included.
    ///
    /// No element is moved or copied and no position goes stale; positions
    /// simply follow their elements into the other list.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Replace the contents with the elements of `iter`.
    ///
    /// Equivalent to [`clear`](Self::clear) followed by [`extend`](Extend::extend):
    /// every old element is dropped and its buckets released before the new
    /// elements are appended, so the result is packed the way a fresh list
    /// built by `push_back` would be.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list: UnrolledList<i32, 3> = (0..10).collect();
    /// list.assign([7, 8]);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [7, 8]);
    ///
    /// list.assign(1..=5);
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
    }

    /// Replace the contents with `count` clones of `value`.
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.assign(std::iter::repeat(value).take(count));
    }

    // ============================================================================
    // CHAIN HELPERS
    // ============================================================================

    /// Ids of the chained buckets, head to tail.
    ///
    /// Stops early if the chain is broken or longer than the number of
    /// allocated buckets, so a corrupted chain never loops.
    pub(crate) fn chain_ids(&self) -> Vec<NodeId> {
        let limit = self.arena.allocated_count();
        let mut ids = Vec::new();
        let mut id = self.head;
        while let Some(bucket) = self.arena.get(id) {
            if ids.len() == limit {
                break;
            }
            ids.push(id);
            id = bucket.next;
        }
        ids
    }
}

impl<T, const K: usize> UnrolledList<T, K, CompactArena<Bucket<T, K>>> {
    /// Statistics for the default bucket arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }
}

/// Exchange the contents of two lists.
pub fn swap<T, const K: usize, A: BucketAllocator<T, K>>(
    a: &mut UnrolledList<T, K, A>,
    b: &mut UnrolledList<T, K, A>,
) {
    a.swap(b);
}

// ============================================================================
// COMPARISON TRAITS
// ============================================================================

impl<T, U, const K: usize, const K2: usize, A, B> PartialEq<UnrolledList<U, K2, B>>
    for UnrolledList<T, K, A>
where
    T: PartialEq<U>,
    A: BucketAllocator<T, K>,
    B: BucketAllocator<U, K2>,
{
    /// Lists are equal when they hold equal elements in the same order;
    /// bucket layout and capacity play no part.
    fn eq(&self, other: &UnrolledList<U, K2, B>) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, const K: usize, A: BucketAllocator<T, K>> Eq for UnrolledList<T, K, A> {}

impl<T: PartialOrd, const K: usize, A: BucketAllocator<T, K>> PartialOrd for UnrolledList<T, K, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const K: usize, A: BucketAllocator<T, K>> Ord for UnrolledList<T, K, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const K: usize, A: BucketAllocator<T, K>> Hash for UnrolledList<T, K, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, const K: usize, A: BucketAllocator<T, K>> fmt::Debug for UnrolledList<T, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::UnrolledList;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_len_tracks_every_mutation() {
        let mut list: UnrolledList<i32, 3> = UnrolledList::new();
        assert_eq!(list.len(), 0);
        list.extend(0..7);
        assert_eq!(list.len(), 7);
        list.insert(list.nth_position(3), 100).unwrap();
        assert_eq!(list.len(), 8);
        list.erase(list.begin()).unwrap();
        list.pop_back();
        assert_eq!(list.len(), 6);
        assert!(list.check_invariants());
    }

    #[test]
    fn test_clear_releases_all_buckets() {
        let mut list: UnrolledList<String, 4> = (0..30).map(|i| i.to_string()).collect();
        assert!(list.bucket_count() > 1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.bucket_count(), 0);
        assert_eq!(list.arena_stats().allocated_count, 0);
        assert_eq!(list.begin(), list.end());

        list.push_back("again".to_string());
        assert_eq!(list.front().map(String::as_str), Some("again"));
        assert!(list.check_invariants());
    }

    #[test]
    fn test_assign_shrinks_and_grows() {
        let mut list: UnrolledList<i32, 2> = (0..9).collect();
        list.assign([5, 6, 7]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 6, 7]);
        assert!(list.check_invariants());

        list.assign_n(6, 1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1; 6]);

        // The old bucket layout is discarded and rebuilt by appending.
        let mut split: UnrolledList<i32, 2> = UnrolledList::from([1, 2, 3]);
        split.insert(split.nth_position(1), 99).unwrap();
        assert_eq!(split.buckets(), vec![&[1][..], &[99, 2][..], &[3][..]]);
        split.assign([10, 20, 30, 40]);
        assert_eq!(split.buckets(), vec![&[10, 20][..], &[30, 40][..]]);
        assert!(split.check_invariants());

        list.assign(std::iter::empty());
        assert!(list.is_empty());
        assert_eq!(list.bucket_count(), 0);
    }

    #[test]
    fn test_swap_exchanges_positions_with_elements() {
        let mut a: UnrolledList<i32, 2> = UnrolledList::from([1, 2, 3]);
        let mut b: UnrolledList<i32, 2> = UnrolledList::from([9]);
        let two = a.nth_position(1);

        crate::swap(&mut a, &mut b);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [9]);
        assert_eq!(b.get(two), Some(&2));

        a.swap(&mut b);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_equality_ignores_bucket_layout() {
        let packed: UnrolledList<i32, 8> = (0..20).collect();
        let mut sparse: UnrolledList<i32, 2> = UnrolledList::new();
        for i in (0..20).rev() {
            sparse.push_front(i);
        }
        assert_eq!(packed, sparse);
        assert_ne!(packed.bucket_count(), sparse.bucket_count());

        sparse.pop_back();
        assert_ne!(packed, sparse);
    }

    #[test]
    fn test_ordering_and_hash() {
        let a: UnrolledList<i32, 2> = UnrolledList::from([1, 2, 3]);
        let b: UnrolledList<i32, 2> = UnrolledList::from([1, 2, 4]);
        let c: UnrolledList<i32, 2> = UnrolledList::from([1, 2]);
        assert!(a < b);
        assert!(c < a);

        let mut d: UnrolledList<i32, 2> = UnrolledList::from([2, 3]);
        d.push_front(1);
        assert_eq!(hash_of(&a), hash_of(&d));
    }

    #[test]
    fn test_debug_and_max_size() {
        let list: UnrolledList<i32, 4> = UnrolledList::from([1, 2]);
        assert_eq!(format!("{:?}", list), "[1, 2]");
        assert!(list.max_size() >= 4);
        assert_eq!(list.allocator().allocated_count(), 1);
    }
}
