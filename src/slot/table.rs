//! Byte-keyed slot table.
//!
//! Maps encoded keys to [`Slot`]s. Slots live in a dense `Vec` and the hash
//! index stores their position, so a [`SlotId`] stays valid until the table is
//! cleared and lookups hand out plain copies instead of borrows.

use super::Slot;
use rustc_hash::FxHashMap;

/// Position of a slot in a [`SlotTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// Hash table from key bytes to one slot per distinct key.
#[derive(Debug, Default)]
pub struct SlotTable {
    index: FxHashMap<Box<[u8]>, usize>,
    slots: Vec<Slot>,
    key: Vec<u8>,
}

impl SlotTable {
    /// Creates an empty table sized for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self { index, slots: Vec::with_capacity(capacity), key: Vec::new() }
    }

    /// Returns the scratch buffer keys are encoded into.
    ///
    /// [`get_or_create`](Self::get_or_create) and [`get`](Self::get) look up
    /// whatever this buffer holds.
    pub fn key_buffer(&mut self) -> &mut Vec<u8> {
        &mut self.key
    }

    /// Returns the slot of the buffered key, creating a default one if the
    /// key is new. The flag is `true` when the slot was just created.
    pub fn get_or_create(&mut self) -> (SlotId, bool) {
        if let Some(&pos) = self.index.get(self.key.as_slice()) {
            return (SlotId(pos), false);
        }
        let pos = self.slots.len();
        self.slots.push(Slot::default());
        self.index.insert(self.key.as_slice().into(), pos);
        (SlotId(pos), true)
    }

    /// Returns the slot of the buffered key, if present.
    pub fn get(&self) -> Option<SlotId> {
        self.index.get(self.key.as_slice()).map(|&pos| SlotId(pos))
    }

    /// Reads a slot.
    pub fn slot(&self, id: SlotId) -> Slot {
        self.slots[id.0]
    }

    /// Overwrites a slot.
    pub fn set_slot(&mut self, id: SlotId, slot: Slot) {
        self.slots[id.0] = slot;
    }

    /// Drops the slot [`get_or_create`](Self::get_or_create) just created for
    /// the buffered key.
    pub fn discard(&mut self, id: SlotId) {
        debug_assert_eq!(id.0 + 1, self.slots.len(), "only the newest slot can be discarded");
        self.index.remove(self.key.as_slice());
        self.slots.pop();
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no key has been added.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Removes every key, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
    }

    /// Removes every key and releases the table's memory.
    pub fn release(&mut self) {
        self.index = FxHashMap::default();
        self.slots = Vec::new();
        self.key = Vec::new();
    }
}
