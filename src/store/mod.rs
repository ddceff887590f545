//! # Paged Record Store
//!
//! Keeps fixed-width copies of slave records in a [`PageArena`]. The slave
//! stream is forward-only, so a record has to be copied to be served later.
//!
//! ## Design
//!
//! - [`RecordLayout`] fixes the byte offset of every column once
//! - [`append`](RecordStore::append) copies a record to the end of the arena
//! - [`overwrite`](RecordStore::overwrite) replaces a stored record in place,
//!   so a key that keeps arriving never costs more than one record of space

mod arena;
mod layout;

pub use arena::{PageArena, MAX_PAGE_SIZE};
pub use layout::{FixedType, RecordLayout, ValueColumn};

use crate::error::{Error, Result};
use crate::record::Record;

/// Fixed-width record copies in power-of-two pages.
#[derive(Debug)]
pub struct RecordStore {
    arena: PageArena,
    layout: RecordLayout,
}

impl RecordStore {
    /// Creates a store for records of `layout`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the page size hint is out of range
    /// - `RecordTooLarge` if one record does not fit in a rounded page
    pub fn new(layout: RecordLayout, page_size_hint: usize) -> Result<Self> {
        let arena = PageArena::new(page_size_hint)?;
        if layout.record_len() > arena.page_size() {
            return Err(Error::RecordTooLarge {
                record_len: layout.record_len(),
                page_size: arena.page_size(),
            });
        }
        Ok(Self { arena, layout })
    }

    /// Returns the record layout.
    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// Returns the page arena.
    pub fn arena(&self) -> &PageArena {
        &self.arena
    }

    /// Copies `record` to the end of the store and returns its offset.
    pub fn append<R: Record + ?Sized>(&mut self, record: &R) -> Result<u64> {
        let len = self.layout.record_len();
        let offset = self.arena.allocate(len)?;
        self.layout.serialize(record, self.arena.bytes_mut(offset, len));
        Ok(offset)
    }

    /// Replaces the record stored at `offset`, which must come from
    /// [`append`](Self::append).
    pub fn overwrite<R: Record + ?Sized>(&mut self, offset: u64, record: &R) {
        let len = self.layout.record_len();
        self.layout.serialize(record, self.arena.bytes_mut(offset, len));
    }

    /// Returns the bytes of the record stored at `offset`.
    pub fn record(&self, offset: u64) -> &[u8] {
        self.arena.bytes(offset, self.layout.record_len())
    }

    /// Forgets every stored record while keeping the pages.
    pub fn reset(&mut self) {
        self.arena.rewind();
    }

    /// Releases every page.
    pub fn free(&mut self) {
        self.arena.free();
    }
}
