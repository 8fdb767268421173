//! Unrolled doubly linked list in Rust with a std-collections-like API.
//!
//! This crate provides [`UnrolledList`], a sequence container that stores its
//! elements in a doubly linked chain of fixed-capacity buckets. It supports
//! constant-time pushes and pops at both ends, bounded-cost insertion and
//! erasure at any position, and bidirectional traversal through positions,
//! iterators and cursors.
//!
//! ```
//! use unrolled_list::UnrolledList;
//!
//! let mut list: UnrolledList<&str, 4> = UnrolledList::new();
//! list.push_back("b");
//! list.push_back("c");
//! list.push_front("a");
//!
//! let pos = list.nth_position(2);
//! list.insert(pos, "b2").unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "b2", "c"]);
//! assert_eq!(list.pop_back(), Some("c"));
//! ```

#[macro_use]
mod macros;

mod allocator;
mod compact_arena;
mod error;
mod slots;
mod types;
mod construction;
mod get_operations;
mod insert_operations;
mod delete_operations;
mod list_structure;
mod node;
mod iteration;
mod validation;

#[cfg(test)]
mod proptests;

pub use allocator::BucketAllocator;
pub use compact_arena::{CompactArena, CompactArenaStats};
pub use error::{InitResult, ListResult, ListResultExt, ModifyResult, UnrolledListError};
pub use iteration::{Cursor, CursorMut, IntoIter, Iter, IterMut};
pub use list_structure::swap;
pub use node::Bucket;
pub use types::{
    NodeId, Position, UnrolledList, DEFAULT_NODE_CAPACITY, MIN_NODE_CAPACITY, NULL_NODE,
};
