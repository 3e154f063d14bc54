//! Fixed-capacity entity pools
//!
//! A pool is a bag of optional slots. Slot indices carry no meaning beyond
//! "occupied" or "free": there is no compaction, and new entities always
//! land in the lowest free slot so runs replay identically.

use super::state::Entity;
use crate::error::SimError;

/// Slot array holding at most `capacity` live entities
#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Option<Entity>>,
}

impl EntityPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when every slot is free
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Lowest free slot index
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Place an entity in the lowest free slot
    ///
    /// On `PoolFull` the entity is dropped and the pool is untouched.
    pub fn add(&mut self, entity: Entity) -> Result<usize, SimError> {
        let slot = self.first_free().ok_or(SimError::PoolFull)?;
        self.slots[slot] = Some(entity);
        Ok(slot)
    }

    /// Take the entity out of `slot`, freeing it for reuse
    ///
    /// The caller owns the returned entity; dropping it releases its polygon.
    pub fn remove(&mut self, slot: usize) -> Result<Entity, SimError> {
        self.slots
            .get_mut(slot)
            .and_then(Option::take)
            .ok_or(SimError::SlotNotFound(slot))
    }

    pub fn get(&self, slot: usize) -> Option<&Entity> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Entity> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (i, e)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Entity)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|e| (i, e)))
    }

    /// Visit occupied slots in index order
    pub fn for_each(&self, mut visitor: impl FnMut(usize, &Entity)) {
        for (slot, entity) in self.iter() {
            visitor(slot, entity);
        }
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}
