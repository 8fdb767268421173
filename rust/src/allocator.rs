//! Bucket allocation capability for UnrolledList.
//!
//! The list never allocates buckets directly; it asks its `BucketAllocator`
//! for an empty bucket, addresses it by `NodeId`, and hands it back once the
//! bucket has no live elements. The default allocator is a `CompactArena`.

use crate::compact_arena::CompactArena;
use crate::error::{ListResult, ListResultExt};
use crate::node::Bucket;
use crate::types::NodeId;

/// Storage for the buckets of one list.
///
/// Implementations own every bucket they hand out. Ids must stay stable until
/// the bucket is deallocated and must never equal [`NULL_NODE`](crate::NULL_NODE).
pub trait BucketAllocator<T, const K: usize> {
    /// Obtain storage for one empty, unlinked bucket.
    ///
    /// On failure nothing may have changed.
    fn allocate(&mut self) -> ListResult<NodeId>;

    /// Release a bucket. The list only releases buckets with no live elements.
    /// Returns false if `id` was not allocated.
    fn deallocate(&mut self, id: NodeId) -> bool;

    /// Generation of the live bucket `id`. Must change whenever `id` is
    /// handed out again after a release, so stale positions can be rejected.
    fn generation(&self, id: NodeId) -> Option<u32>;

    fn get(&self, id: NodeId) -> Option<&Bucket<T, K>>;

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Bucket<T, K>>;

    /// Two distinct buckets at once.
    fn get_pair_mut(
        &mut self,
        a: NodeId,
        b: NodeId,
    ) -> Option<(&mut Bucket<T, K>, &mut Bucket<T, K>)>;

    /// Distinct buckets at once, in the order of `ids`.
    fn get_many_mut(&mut self, ids: &[NodeId]) -> Option<Vec<&mut Bucket<T, K>>>;

    /// Number of buckets currently handed out.
    fn allocated_count(&self) -> usize;

    /// Upper bound on the number of buckets this allocator can hand out.
    fn max_buckets(&self) -> usize;

    /// Release every bucket, dropping the elements they still hold.
    fn clear(&mut self);
}

impl<T, const K: usize> BucketAllocator<T, K> for CompactArena<Bucket<T, K>> {
    fn allocate(&mut self) -> ListResult<NodeId> {
        self.try_allocate(Bucket::new()).with_context("bucket")
    }

    fn deallocate(&mut self, id: NodeId) -> bool {
        match CompactArena::deallocate(self, id) {
            Some(bucket) => {
                debug_assert!(bucket.is_empty(), "released bucket {} still holds elements", id);
                true
            }
            None => false,
        }
    }

    fn generation(&self, id: NodeId) -> Option<u32> {
        CompactArena::generation(self, id)
    }

    fn get(&self, id: NodeId) -> Option<&Bucket<T, K>> {
        CompactArena::get(self, id)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Bucket<T, K>> {
        CompactArena::get_mut(self, id)
    }

    fn get_pair_mut(
        &mut self,
        a: NodeId,
        b: NodeId,
    ) -> Option<(&mut Bucket<T, K>, &mut Bucket<T, K>)> {
        CompactArena::get_pair_mut(self, a, b)
    }

    fn get_many_mut(&mut self, ids: &[NodeId]) -> Option<Vec<&mut Bucket<T, K>>> {
        CompactArena::get_many_mut(self, ids)
    }

    fn allocated_count(&self) -> usize {
        CompactArena::allocated_count(self)
    }

    fn max_buckets(&self) -> usize {
        let bucket_size = std::mem::size_of::<Bucket<T, K>>().max(1);
        (crate::types::NULL_NODE as usize).min(isize::MAX as usize / bucket_size)
    }

    fn clear(&mut self) {
        CompactArena::clear(self)
    }
}
