//! Core types and data structures for UnrolledList.
//!
//! This module contains the list itself, the position type used as the
//! iterator model, and the constants shared throughout the implementation.

use std::marker::PhantomData;

use crate::compact_arena::CompactArena;
use crate::node::Bucket;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bucket capacity used when none is given.
pub const DEFAULT_NODE_CAPACITY: usize = 10;

/// Smallest bucket capacity that can be split into two non-empty halves.
pub const MIN_NODE_CAPACITY: usize = 2;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Link value meaning "no bucket".
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A doubly linked list of fixed-capacity buckets.
///
/// Elements are stored in buckets of up to `K` elements each instead of one
/// element per link, which cuts per-element pointer overhead and keeps
/// neighbouring elements in the same cache lines. Pushing and popping at either
/// end is O(1); inserting or erasing in the middle costs at most O(K) element
/// moves inside one bucket.
///
/// # Type Parameters
///
/// * `T` - Element type. No default constructor is required.
/// * `K` - Bucket capacity (at least 2, checked at compile time).
/// * `A` - Bucket allocator; defaults to a [`CompactArena`].
///
/// # Examples
///
/// ```
/// use unrolled_list::UnrolledList;
///
/// let mut list: UnrolledList<i32, 4> = UnrolledList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// let middle = list.nth_position(1);
/// list.insert(middle, 99).unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 99, 2, 3]);
/// assert_eq!(list.len(), 4);
/// ```
///
/// # Performance Characteristics
///
/// - **push/pop at either end**: O(1) (push_front shifts at most K elements)
/// - **insert/erase at a position**: O(K)
/// - **Locating the n-th element**: O(n), there is no random access
/// - **Iteration**: O(n)
pub struct UnrolledList<T, const K: usize = DEFAULT_NODE_CAPACITY, A = CompactArena<Bucket<T, K>>> {
    /// Bucket storage; owns every bucket in the chain.
    pub(crate) arena: A,
    /// First bucket of the chain, or `NULL_NODE` when empty.
    pub(crate) head: NodeId,
    /// Last bucket of the chain, or `NULL_NODE` when empty.
    pub(crate) tail: NodeId,
    /// Sum of every chained bucket's length.
    pub(crate) len: usize,
    pub(crate) _marker: PhantomData<T>,
}

/// A cursor position: a bucket, a slot index inside it, and the generation
/// of that bucket.
///
/// Positions are plain values and do not borrow the list. They are produced
/// by [`UnrolledList::begin`], [`UnrolledList::end`], `insert`, `erase` and the
/// cursor types. A position goes stale when its bucket is released or when
/// the slots of its bucket are renumbered by a shift or a split. A released
/// bucket's id may be handed out again, but with a new generation, so a
/// position into the old bucket is rejected rather than landing on an
/// unrelated element.
///
/// Two positions are equal when bucket, index and generation match. Every end
/// position is equal to every other end position, including end positions of
/// a different list, so positions from different lists must never be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) node: NodeId,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl Position {
    /// The one-past-the-last position.
    pub const END: Position = Position {
        node: NULL_NODE,
        index: 0,
        generation: 0,
    };

    pub(crate) fn new(node: NodeId, index: usize, generation: u32) -> Self {
        Self {
            node,
            index,
            generation,
        }
    }

    /// Another slot of the same bucket.
    pub(crate) fn at_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Returns true if this is the end position.
    pub fn is_end(&self) -> bool {
        self.node == NULL_NODE
    }

    /// The bucket this position refers to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The slot index inside the bucket.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::END
    }
}
