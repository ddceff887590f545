//! Configuration options for a last-record map.

use crate::store::MAX_PAGE_SIZE;

/// Default page size hint (4MB).
pub const DEFAULT_PAGE_SIZE: usize = 4 * 1024 * 1024;

/// Default number of keys the slot table is sized for.
pub const DEFAULT_KEY_CAPACITY: usize = 256;

/// Configuration options for constructing a [`LastRecordMap`](crate::LastRecordMap).
#[derive(Debug, Clone)]
pub struct Options {
    /// Page size hint in bytes, rounded up to the next power of two.
    /// A stored slave record must fit in one page.
    /// Default: 4MB
    pub page_size: usize,

    /// Number of distinct keys to reserve room for up front.
    /// Default: 256
    pub key_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, key_capacity: DEFAULT_KEY_CAPACITY }
    }
}

impl Options {
    /// Creates a new Options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size hint.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the initial key capacity.
    pub fn key_capacity(mut self, capacity: usize) -> Self {
        self.key_capacity = capacity;
        self
    }

    /// Validates the options and returns an error if any are invalid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.page_size == 0 {
            return Err(crate::Error::invalid_argument("page_size must be > 0"));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(crate::Error::invalid_argument(format!(
                "page_size must be <= {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}
