//! # Last-Record Map
//!
//! Keeps the most recently `put` slave record per key and hands each one out
//! to at most one master probe.
//!
//! ## Key states
//!
//! ```text
//!            put (append)             get (returns record)
//!  Absent ───────────────▶ Latest ───────────────────────▶ Consumed
//!                          ▲    │ put (overwrite)              │
//!                          │    └──────┘                       │
//!                          └───────────────────────────────────┘
//!                                    put (overwrite)
//! ```
//!
//! `get` on `Absent` or `Consumed` finds nothing. "Latest" means the last
//! `put` in call order; record content is never compared.

use crate::config::Options;
use crate::error::Result;
use crate::key::{KeyEncoder, KeyWriter};
use crate::metadata::RecordMetadata;
use crate::record::{Record, SymbolSource};
use crate::slot::{Slot, SlotId, SlotState, SlotTable};
use crate::store::{RecordLayout, RecordStore};
use crate::view::RecordView;
use std::sync::Arc;

/// Query-scoped store of the latest slave record per key.
///
/// # Example
///
/// ```rust
/// use lastrec::{ColumnMetadata, ColumnType, LastRecordMap, Options, Record, RecordMetadata};
/// use lastrec::record::{Row, Value};
///
/// # fn main() -> Result<(), lastrec::Error> {
/// let slave = RecordMetadata::new(vec![
///     ColumnMetadata::new("id", ColumnType::Int),
///     ColumnMetadata::new("price", ColumnType::Double),
/// ])?;
/// let master = RecordMetadata::new(vec![ColumnMetadata::new("id", ColumnType::Int)])?;
///
/// let mut map = LastRecordMap::new(&master, &slave, &["id"], &["id"], &Options::default())?;
/// map.put(&Row::new(vec![Value::Int(1), Value::Double(10.0)]))?;
/// map.put(&Row::new(vec![Value::Int(1), Value::Double(11.5)]))?;
///
/// let probe = Row::new(vec![Value::Int(1)]);
/// assert_eq!(map.get(&probe)?.map(|r| r.get_double(1)), Some(11.5));
/// assert!(map.get(&probe)?.is_none());
/// map.close();
/// # Ok(())
/// # }
/// ```
pub struct LastRecordMap {
    master_key: KeyEncoder,
    slave_key: KeyEncoder,
    slots: SlotTable,
    store: RecordStore,
    metadata: RecordMetadata,
    symbols: Option<Arc<dyn SymbolSource>>,
}

impl LastRecordMap {
    /// Creates a map for slave records of `slave`, probed by master records
    /// of `master`.
    ///
    /// `master_keys[i]` is matched against `slave_keys[i]`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for bad options or key lists of different length
    /// - `ColumnNotFound` for an unknown key column
    /// - `UnsupportedColumnType` for a key column without key encoding or a
    ///   slave column without fixed width
    /// - `KeyTypeMismatch` for a master/slave key pair that encodes differently
    /// - `RecordTooLarge` if a slave record does not fit in one page
    pub fn new(
        master: &RecordMetadata,
        slave: &RecordMetadata,
        master_keys: &[&str],
        slave_keys: &[&str],
        options: &Options,
    ) -> Result<Self> {
        options.validate()?;

        let (master_key, slave_key) = KeyEncoder::pair(master, slave, master_keys, slave_keys)?;
        let layout = RecordLayout::new(slave)?;
        let store = RecordStore::new(layout, options.page_size)?;

        log::debug!(
            "Created last-record map: {} key columns, record_len={}, page_size={}",
            slave_keys.len(),
            store.layout().record_len(),
            store.arena().page_size()
        );

        Ok(Self {
            master_key,
            slave_key,
            slots: SlotTable::with_capacity(options.key_capacity),
            store,
            metadata: slave.clone(),
            symbols: None,
        })
    }

    /// Stores `record` as the latest record of its key.
    ///
    /// A new key is appended; a known key is overwritten in place and becomes
    /// available to one more [`get`](Self::get), even if it was consumed.
    ///
    /// # Errors
    ///
    /// - `UnresolvedSymbol` if a symbol key column does not decode
    /// - `CapacityExceeded` if the page arena cannot grow any further; the
    ///   key is left as it was before the call
    pub fn put<R: Record + ?Sized>(&mut self, record: &R) -> Result<()> {
        let (id, created) = self.get_by_slave(record)?;
        let offset = if created {
            match self.store.append(record) {
                Ok(offset) => offset,
                Err(err) => {
                    self.slots.discard(id);
                    return Err(err);
                }
            }
        } else {
            let offset = self.slots.slot(id).offset();
            self.store.overwrite(offset, record);
            offset
        };
        self.slots.set_slot(id, Slot::latest(offset));
        Ok(())
    }

    /// Looks up the slave record matching the key of `master` and marks it
    /// consumed.
    ///
    /// Returns `None` if the key was never put or was already consumed.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedSymbol` if a symbol key column of `master` does not
    /// decode. No slot changes state.
    pub fn get<R: Record + ?Sized>(&mut self, master: &R) -> Result<Option<RecordView<'_>>> {
        let Some(id) = self.get_by_master(master)? else {
            return Ok(None);
        };
        let offset = match self.slots.slot(id).state() {
            SlotState::Latest(offset) => offset,
            SlotState::Consumed(_) => return Ok(None),
        };
        self.slots.set_slot(id, Slot::latest(offset).consumed());

        Ok(Some(RecordView::new(
            self.store.record(offset),
            self.store.layout(),
            self.symbols.as_deref(),
        )))
    }

    /// Forgets every key and rewinds the store, keeping allocated pages for
    /// the next build.
    pub fn reset(&mut self) {
        log::debug!(
            "Resetting last-record map: {} keys, {} pages retained",
            self.slots.len(),
            self.store.arena().page_count()
        );
        self.slots.clear();
        self.store.reset();
    }

    /// Releases all pages and slot storage.
    pub fn close(mut self) {
        log::debug!(
            "Closing last-record map: {} keys, {} pages",
            self.slots.len(),
            self.store.arena().page_count()
        );
        self.store.free();
        self.slots.release();
    }

    /// Returns the slave record metadata.
    pub fn metadata(&self) -> &RecordMetadata {
        &self.metadata
    }

    /// Sets the symbol dictionaries of the slave stream.
    ///
    /// Views returned by later [`get`](Self::get) calls decode symbols
    /// through `symbols`. Must be called again whenever the slave stream
    /// is reopened, since codes are only valid for the stream that produced
    /// them.
    pub fn set_slave_cursor(&mut self, symbols: Arc<dyn SymbolSource>) {
        self.symbols = Some(symbols);
    }

    /// Returns the number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the width of one stored record.
    pub fn record_len(&self) -> usize {
        self.store.layout().record_len()
    }

    /// Returns the page size after rounding.
    pub fn page_size(&self) -> usize {
        self.store.arena().page_size()
    }

    /// Returns the number of allocated pages.
    pub fn page_count(&self) -> usize {
        self.store.arena().page_count()
    }

    /// Returns the bytes held by allocated pages.
    pub fn allocated_bytes(&self) -> usize {
        self.store.arena().allocated_bytes()
    }

    fn get_by_slave<R: Record + ?Sized>(&mut self, record: &R) -> Result<(SlotId, bool)> {
        let mut writer = KeyWriter::new(self.slots.key_buffer());
        self.slave_key.encode(record, &mut writer)?;
        Ok(self.slots.get_or_create())
    }

    fn get_by_master<R: Record + ?Sized>(&mut self, record: &R) -> Result<Option<SlotId>> {
        let mut writer = KeyWriter::new(self.slots.key_buffer());
        self.master_key.encode(record, &mut writer)?;
        Ok(self.slots.get())
    }
}

impl std::fmt::Debug for LastRecordMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastRecordMap")
            .field("keys", &self.slots.len())
            .field("record_len", &self.record_len())
            .field("page_size", &self.page_size())
            .field("pages", &self.page_count())
            .finish()
    }
}
