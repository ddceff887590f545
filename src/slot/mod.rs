//! Per-key slot state.
//!
//! Each distinct key owns one 8-byte slot:
//!
//! ```text
//! bit 63      consumed flag
//! bits 0..63  offset of the latest record in the page arena
//! ```
//!
//! A key that has no slot is `Absent`. A slot is either `Latest`, ready to be
//! returned by one probe, or `Consumed`, already returned.

mod table;

pub use table::{SlotId, SlotTable};

/// Bit reserved for the consumed flag.
pub const CONSUMED_BIT: u64 = 1 << 63;

/// Largest offset a slot can hold.
pub const MAX_OFFSET: u64 = CONSUMED_BIT - 1;

/// Packed offset and consumed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot(u64);

/// Decoded view of a [`Slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// The record at this offset has not been probed yet.
    Latest(u64),
    /// The record at this offset was already returned by a probe.
    Consumed(u64),
}

impl Slot {
    /// A slot pointing at `offset`, not yet consumed.
    pub fn latest(offset: u64) -> Self {
        debug_assert!(offset <= MAX_OFFSET, "offset {offset:#x} overlaps the consumed bit");
        Slot(offset)
    }

    /// Rebuilds a slot from its packed representation.
    pub fn from_packed(packed: u64) -> Self {
        Slot(packed)
    }

    /// Returns the packed representation.
    pub fn packed(self) -> u64 {
        self.0
    }

    /// Returns the record offset, ignoring the flag.
    pub fn offset(self) -> u64 {
        self.0 & MAX_OFFSET
    }

    /// Returns `true` if the slot was already consumed.
    pub fn is_consumed(self) -> bool {
        self.0 & CONSUMED_BIT != 0
    }

    /// Returns the same offset with the consumed flag set.
    pub fn consumed(self) -> Self {
        Slot(self.0 | CONSUMED_BIT)
    }

    /// Decodes the slot.
    pub fn state(self) -> SlotState {
        if self.is_consumed() {
            SlotState::Consumed(self.offset())
        } else {
            SlotState::Latest(self.offset())
        }
    }
}

impl From<SlotState> for Slot {
    fn from(state: SlotState) -> Self {
        match state {
            SlotState::Latest(offset) => Slot::latest(offset),
            SlotState::Consumed(offset) => Slot::latest(offset).consumed(),
        }
    }
}
