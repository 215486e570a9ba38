//! Item id to host handle lookup (element refs, animation targets).
//!
//! Only consulted for optional feedback such as a flash on the moved row or
//! a narration hook. Ordering never depends on what is registered here.

use std::collections::HashMap;

use shared::domain::ItemId;

#[derive(Debug)]
struct Slot<H> {
    id: ItemId,
    handle: H,
}

#[derive(Debug)]
pub struct HandleRegistry<H> {
    slots: Vec<Option<Slot<H>>>,
    index: HashMap<ItemId, usize>,
    free: Vec<usize>,
}

impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            free: Vec::new(),
        }
    }
}

impl<H> HandleRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handle` for `id`, returning the handle it replaced.
    pub fn register(&mut self, id: ItemId, handle: H) -> Option<H> {
        if let Some(&slot) = self.index.get(&id) {
            if let Some(existing) = self.slots[slot].as_mut() {
                return Some(std::mem::replace(&mut existing.handle, handle));
            }
        }

        let entry = Slot { id, handle };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };
        self.index.insert(id, slot);
        None
    }

    pub fn unregister(&mut self, id: ItemId) -> Option<H> {
        let slot = self.index.remove(&id)?;
        let entry = self.slots[slot].take()?;
        self.free.push(slot);
        Some(entry.handle)
    }

    pub fn get(&self, id: ItemId) -> Option<&H> {
        let slot = *self.index.get(&id)?;
        self.slots[slot].as_ref().map(|entry| &entry.handle)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Drops every handle whose id fails `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(ItemId) -> bool) {
        let stale: Vec<ItemId> = self
            .slots
            .iter()
            .flatten()
            .map(|entry| entry.id)
            .filter(|id| !keep(*id))
            .collect();
        for id in stale {
            self.unregister(id);
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free.clear();
    }
}
