use std::collections::HashSet;

use serde::Serialize;
use shared::domain::{ItemId, MapEntry, MapId};
use tracing::{debug, warn};

use crate::{engine, error::ReorderError};

/// Default bound on list length.
pub const DEFAULT_CAPACITY: usize = 500;

/// Payloads that can be flattened to an underlying domain id on save.
pub trait DomainRecord {
    type Id: Clone;

    fn domain_id(&self) -> Self::Id;
}

impl DomainRecord for MapEntry {
    type Id = MapId;

    fn domain_id(&self) -> MapId {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item<T> {
    pub id: ItemId,
    pub payload: T,
}

impl<T> Item<T> {
    pub fn new(payload: T) -> Self {
        Self {
            id: ItemId::new(),
            payload,
        }
    }
}

/// Rank-ordered items with unique synthetic ids. Rank is array position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<Item<T>>,
    capacity: usize,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> OrderedList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Seeds a list from persisted payloads, minting a fresh id per entry.
    pub fn from_payloads(
        payloads: impl IntoIterator<Item = T>,
        capacity: usize,
    ) -> Result<Self, ReorderError> {
        let items: Vec<Item<T>> = payloads.into_iter().map(Item::new).collect();
        Self::from_items(items, capacity)
    }

    pub fn from_items(items: Vec<Item<T>>, capacity: usize) -> Result<Self, ReorderError> {
        if items.len() > capacity {
            return Err(ReorderError::CapacityExceeded { capacity });
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(ReorderError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, capacity })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn payloads(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| &item.payload)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item<T>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn push(&mut self, payload: T) -> Result<ItemId, ReorderError> {
        self.insert(self.items.len(), payload)
    }

    pub fn insert(&mut self, index: usize, payload: T) -> Result<ItemId, ReorderError> {
        if self.items.len() >= self.capacity {
            return Err(ReorderError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if index > self.items.len() {
            return Err(ReorderError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = Item::new(payload);
        let id = item.id;
        self.items.insert(index, item);
        debug!(item_id = %id, index, len = self.items.len(), "list: item inserted");
        Ok(id)
    }

    pub fn remove(&mut self, id: ItemId) -> Result<Item<T>, ReorderError> {
        let Some(index) = self.position_of(id) else {
            warn!(item_id = %id, "list: remove of unknown item ignored");
            return Err(ReorderError::UnknownItem(id));
        };
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> OrderedList<T> {
    /// Applies one reorder. On error the list is unchanged.
    pub fn apply_reorder(&mut self, start: usize, finish: usize) -> Result<(), ReorderError> {
        self.items = engine::reorder(&self.items, start, finish)?;
        Ok(())
    }

    pub fn move_by(&mut self, id: ItemId, offset: isize) -> Result<usize, ReorderError> {
        let start = self.position_of(id).ok_or(ReorderError::UnknownItem(id))?;
        let moved = engine::move_by(&self.items, start, offset)?;
        self.items = moved;
        self.position_of(id).ok_or(ReorderError::UnknownItem(id))
    }
}

impl<T: DomainRecord> OrderedList<T> {
    /// Flat domain ids in rank order; synthetic ids are dropped.
    pub fn domain_ids(&self) -> Vec<T::Id> {
        self.items.iter().map(|item| item.payload.domain_id()).collect()
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
