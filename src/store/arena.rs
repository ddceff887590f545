//! Power-of-two page arena.
//!
//! The arena hands out byte ranges from a single logical address space that
//! is split into pages of `page_size` bytes. `page_size` is a power of two so
//! an offset splits into a page index and an in-page offset with a shift and
//! a mask. A range never straddles two pages: when the current page cannot
//! hold the requested length, allocation moves on to the next page boundary.
//!
//! Pages are allocated lazily, one at a time, and kept across
//! [`rewind`](PageArena::rewind) so a rebuilt arena reuses them.

use crate::error::{Error, Result};
use crate::slot::MAX_OFFSET;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 1 << 30;

/// Arena of fixed-size pages addressed by a logical offset.
#[derive(Debug)]
pub struct PageArena {
    pages: Vec<Box<[u8]>>,
    page_size: usize,
    bits: u32,
    mask: u64,
    max_pages: usize,
    append_offset: u64,
}

impl PageArena {
    /// Creates an arena whose page size is `page_size_hint` rounded up to the
    /// next power of two. No page is allocated yet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the hint is zero or the rounded size
    /// exceeds [`MAX_PAGE_SIZE`].
    pub fn new(page_size_hint: usize) -> Result<Self> {
        if page_size_hint == 0 {
            return Err(Error::invalid_argument("page size must be > 0"));
        }
        let page_size = page_size_hint
            .checked_next_power_of_two()
            .filter(|&size| size <= MAX_PAGE_SIZE)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "page size {} exceeds maximum {}",
                    page_size_hint, MAX_PAGE_SIZE
                ))
            })?;
        let bits = page_size.trailing_zeros();
        // Offsets of every page must stay below the slot flag bit.
        let max_pages = usize::try_from((MAX_OFFSET + 1) >> bits).unwrap_or(usize::MAX);

        Ok(Self {
            pages: Vec::new(),
            page_size,
            bits,
            mask: page_size as u64 - 1,
            max_pages,
            append_offset: 0,
        })
    }

    /// Returns the page size in bytes.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of allocated pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the bytes held by allocated pages.
    pub fn allocated_bytes(&self) -> usize {
        self.pages.len() * self.page_size
    }

    /// Returns the offset the next allocation starts from.
    pub fn append_offset(&self) -> u64 {
        self.append_offset
    }

    #[inline]
    fn page_index(&self, offset: u64) -> usize {
        (offset >> self.bits) as usize
    }

    #[inline]
    fn page_offset(&self, offset: u64) -> usize {
        (offset & self.mask) as usize
    }

    /// Reserves `len` contiguous bytes and returns their offset.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if a new page would push offsets into the
    /// slot flag bit.
    pub fn allocate(&mut self, len: usize) -> Result<u64> {
        debug_assert!(len <= self.page_size);

        let mut page = self.page_index(self.append_offset);
        if self.page_offset(self.append_offset) + len > self.page_size {
            page += 1;
            self.append_offset = (page as u64) << self.bits;
        }

        if page == self.pages.len() {
            if page >= self.max_pages {
                return Err(Error::capacity_exceeded(format!(
                    "page arena is limited to {} pages of {} bytes",
                    self.max_pages, self.page_size
                )));
            }
            log::trace!("Allocating page {} ({} bytes)", page, self.page_size);
            self.pages.push(vec![0u8; self.page_size].into_boxed_slice());
        }

        let offset = self.append_offset;
        self.append_offset += len as u64;
        Ok(offset)
    }

    /// Returns `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range was not handed out by [`allocate`](Self::allocate).
    pub fn bytes(&self, offset: u64, len: usize) -> &[u8] {
        let start = self.page_offset(offset);
        &self.pages[self.page_index(offset)][start..start + len]
    }

    /// Returns `len` mutable bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range was not handed out by [`allocate`](Self::allocate).
    pub fn bytes_mut(&mut self, offset: u64, len: usize) -> &mut [u8] {
        let start = self.page_offset(offset);
        let page = self.page_index(offset);
        &mut self.pages[page][start..start + len]
    }

    /// Moves the append offset back to zero, keeping every page.
    pub fn rewind(&mut self) {
        self.append_offset = 0;
    }

    /// Releases every page.
    pub fn free(&mut self) {
        self.pages = Vec::new();
        self.append_offset = 0;
    }
}
