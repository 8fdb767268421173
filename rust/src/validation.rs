//! Validation and debugging utilities for UnrolledList.
//!
//! This module contains the invariant checks, the chain consistency checks
//! against the allocator, and test helpers that expose the bucket layout.

use crate::allocator::BucketAllocator;
use crate::error::{ListResult, UnrolledListError};
use crate::types::{NodeId, UnrolledList, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T, const K: usize, A: BucketAllocator<T, K>> UnrolledList<T, K, A> {
    /// Check if the list maintains its structural invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_ends()?;
        let chained = self.check_chain().map_err(|e| e.to_string())?;
        self.check_arena_chain_consistency(chained)
            .map_err(|e| e.to_string())
    }

    /// head, tail and len must agree on whether the list is empty.
    fn check_ends(&self) -> Result<(), String> {
        let empty_head = self.head == NULL_NODE;
        let empty_tail = self.tail == NULL_NODE;
        if empty_head != empty_tail {
            return Err(format!(
                "head {} and tail {} disagree on emptiness",
                self.head, self.tail
            ));
        }
        if empty_head != (self.len == 0) {
            return Err(format!(
                "len {} but head is {}",
                self.len,
                if empty_head { "null" } else { "set" }
            ));
        }
        Ok(())
    }

    /// Walk the chain from head, checking every bucket and its links.
    /// Returns the number of chained buckets.
    fn check_chain(&self) -> ListResult<usize> {
        let limit = self.arena.allocated_count();
        let mut prev = NULL_NODE;
        let mut id = self.head;
        let mut buckets = 0usize;
        let mut elements = 0usize;

        while id != NULL_NODE {
            if buckets == limit {
                return Err(UnrolledListError::corrupted_chain(
                    "Chain",
                    &format!("more than {} buckets reachable from head (cycle?)", limit),
                ));
            }
            let bucket = self.node(id)?;
            if bucket.is_empty() {
                return Err(UnrolledListError::corrupted_chain(
                    "Bucket",
                    &format!("bucket {} is chained but empty", id),
                ));
            }
            if bucket.len() > bucket.capacity() {
                return Err(UnrolledListError::corrupted_chain(
                    "Bucket",
                    &format!("bucket {} holds {} of {}", id, bucket.len(), bucket.capacity()),
                ));
            }
            if bucket.prev != prev {
                return Err(UnrolledListError::corrupted_chain(
                    "Links",
                    &format!(
                        "bucket {} points back to {} but follows {}",
                        id, bucket.prev, prev
                    ),
                ));
            }
            elements += bucket.len();
            buckets += 1;
            prev = id;
            id = bucket.next;
        }

        if prev != self.tail {
            return Err(UnrolledListError::corrupted_chain(
                "Tail",
                &format!("chain ends at {} but tail is {}", prev, self.tail),
            ));
        }
        if elements != self.len {
            return Err(UnrolledListError::data_integrity(
                "Length check",
                &format!("{} elements in buckets vs len {}", elements, self.len),
            ));
        }
        Ok(buckets)
    }

    /// Every allocated bucket must be on the chain.
    fn check_arena_chain_consistency(&self, chained: usize) -> ListResult<()> {
        let allocated = self.arena.allocated_count();
        if allocated != chained {
            return Err(UnrolledListError::data_integrity(
                "Arena consistency check",
                &format!("{} buckets chained vs {} allocated", chained, allocated),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // DEBUGGING HELPERS
    // ============================================================================

    /// The live elements of every bucket, in chain order.
    pub fn buckets(&self) -> Vec<&[T]> {
        self.chain_ids()
            .into_iter()
            .filter_map(|id| self.arena.get(id))
            .map(|bucket| bucket.as_slice())
            .collect()
    }

    /// Ids of the chained buckets, head to tail.
    pub fn bucket_ids(&self) -> Vec<NodeId> {
        self.chain_ids()
    }

    /// Print the bucket layout to stdout.
    pub fn print_buckets(&self)
    where
        T: std::fmt::Debug,
    {
        println!(
            "UnrolledList: {} elements in {} buckets (capacity {})",
            self.len,
            self.bucket_count(),
            K
        );
        for (id, slice) in self.bucket_ids().into_iter().zip(self.buckets()) {
            println!("  bucket {}: {:?}", id, slice);
        }
    }
}
