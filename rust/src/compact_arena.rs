//! Slot arena that stores buckets by value and addresses them by `NodeId`.
//!
//! Items live directly in a `Vec<T>`; a parallel vector of generation stamps
//! says which slots are handed out (and since when), and a stack of vacant
//! slots is reused before the vector grows.

use std::convert::TryFrom;

use crate::error::{ListResult, UnrolledListError};
use crate::types::{NodeId, NULL_NODE};

/// Occupancy figures for a [`CompactArena`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactArenaStats {
    /// Slots ever created (live plus vacant).
    pub total_slots: usize,
    pub allocated_count: usize,
    /// Slots waiting to be reused.
    pub vacant_count: usize,
    /// `allocated_count / total_slots`, or 0 with no slots.
    pub utilization: f64,
}

/// Vec-backed arena with slot reuse.
///
/// Ids are slot indices, so they stay stable until the slot is released and
/// are recycled afterwards. Every allocation stamps its slot with a fresh
/// generation, so a recycled id can be told apart from the item it replaced.
#[derive(Debug)]
pub struct CompactArena<T> {
    storage: Vec<T>,
    /// Generation of the item in each slot; `VACANT` when released.
    stamps: Vec<u32>,
    vacant: Vec<usize>,
    allocated: usize,
    /// Last generation handed out. Survives `clear`.
    generation: u32,
}

const VACANT: u32 = 0;

impl<T> CompactArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An arena with room for `slots` items before it reallocates.
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            storage: Vec::with_capacity(slots),
            stamps: Vec::with_capacity(slots),
            vacant: Vec::new(),
            allocated: 0,
            generation: VACANT,
        }
    }

    /// Store `item` and return its id.
    ///
    /// Growth goes through `try_reserve`, so running out of memory or out of
    /// ids is reported as an error and leaves the arena unchanged.
    #[inline]
    pub fn try_allocate(&mut self, item: T) -> ListResult<NodeId> {
        let stamp = self.next_generation();
        let slot = match self.vacant.pop() {
            Some(slot) => {
                self.storage[slot] = item;
                self.stamps[slot] = stamp;
                slot
            }
            None => self.grow(item, stamp)?,
        };
        self.generation = stamp;
        self.allocated += 1;
        NodeId::try_from(slot)
            .map_err(|_| UnrolledListError::allocation_error("arena slot", "index overflows NodeId"))
    }

    fn next_generation(&self) -> u32 {
        match self.generation.wrapping_add(1) {
            VACANT => 1,
            next => next,
        }
    }

    fn grow(&mut self, item: T, stamp: u32) -> ListResult<usize> {
        let slot = self.storage.len();
        if slot >= NULL_NODE as usize {
            return Err(UnrolledListError::allocation_error(
                "arena slot",
                "node id space exhausted",
            ));
        }
        self.storage
            .try_reserve(1)
            .and_then(|()| self.stamps.try_reserve(1))
            .map_err(|e| UnrolledListError::allocation_error("arena slot", &e.to_string()))?;
        self.storage.push(item);
        self.stamps.push(stamp);
        Ok(slot)
    }

    /// Release slot `id`, returning its item and leaving `T::default()` behind.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T>
    where
        T: Default,
    {
        let slot = self.slot_of(id)?;
        self.stamps[slot] = VACANT;
        self.vacant.push(slot);
        self.allocated -= 1;
        Some(std::mem::take(&mut self.storage[slot]))
    }

    #[inline]
    fn slot_of(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let slot = usize::try_from(id).ok()?;
        match self.stamps.get(slot) {
            Some(&stamp) if stamp != VACANT => Some(slot),
            _ => None,
        }
    }

    /// Generation stamped on `id` when it was allocated, if it is live.
    #[inline]
    pub fn generation(&self, id: NodeId) -> Option<u32> {
        self.slot_of(id).map(|slot| self.stamps[slot])
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slot_of(id).map(|slot| &self.storage[slot])
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slot_of(id).map(|slot| &mut self.storage[slot])
    }

    /// Mutable references to two distinct live items.
    pub fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        let (i, j) = (self.slot_of(a)?, self.slot_of(b)?);
        if i == j {
            return None;
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let (low, high) = self.storage.split_at_mut(hi);
        let (first, second) = (&mut low[lo], &mut high[0]);
        Some(if i < j { (first, second) } else { (second, first) })
    }

    /// Mutable references to several distinct live items, in the order given.
    ///
    /// Returns `None` if any id is not live or appears twice. Costs one pass
    /// over the whole arena.
    pub fn get_many_mut(&mut self, ids: &[NodeId]) -> Option<Vec<&mut T>> {
        let mut slots: Vec<Option<&mut T>> = self
            .storage
            .iter_mut()
            .zip(self.stamps.iter())
            .map(|(item, &stamp)| (stamp != VACANT).then_some(item))
            .collect();
        ids.iter()
            .map(|&id| slots.get_mut(usize::try_from(id).ok()?)?.take())
            .collect()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot_of(id).is_some()
    }

    pub fn stats(&self) -> CompactArenaStats {
        let total_slots = self.storage.len();
        CompactArenaStats {
            total_slots,
            allocated_count: self.allocated,
            vacant_count: self.vacant.len(),
            utilization: if total_slots == 0 {
                0.0
            } else {
                self.allocated as f64 / total_slots as f64
            },
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.allocated
    }

    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Drop every item, live or vacant, and forget all ids.
    ///
    /// The generation counter keeps running, so ids handed out before the
    /// clear never match items allocated after it.
    pub fn clear(&mut self) {
        self.allocated = 0;
        self.vacant.clear();
        self.stamps.clear();
        self.storage.clear();
    }

    pub fn allocated_count(&self) -> usize {
        self.allocated
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
