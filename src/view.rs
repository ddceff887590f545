//! Typed reads over a stored record.

use crate::record::{Record, SymbolSource};
use crate::store::{FixedType, RecordLayout};
use crate::types::SYMBOL_NULL;
use bytes::Buf;

/// A stored slave record, read through the slave column layout.
///
/// Symbol columns are stored as codes; [`get_sym`](Record::get_sym) decodes
/// them through the [`SymbolSource`] the view was created with. Without a
/// source only [`get_sym_code`](Record::get_sym_code) is meaningful.
#[derive(Clone, Copy)]
pub struct RecordView<'a> {
    bytes: &'a [u8],
    layout: &'a RecordLayout,
    symbols: Option<&'a dyn SymbolSource>,
}

impl<'a> RecordView<'a> {
    /// Creates a view over `bytes`, which hold one record of `layout`.
    pub fn new(
        bytes: &'a [u8],
        layout: &'a RecordLayout,
        symbols: Option<&'a dyn SymbolSource>,
    ) -> Self {
        debug_assert_eq!(bytes.len(), layout.record_len());
        Self { bytes, layout, symbols }
    }

    /// Returns the raw stored bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.layout.columns().len()
    }

    #[inline]
    fn at(&self, col: usize, expected: &[FixedType]) -> &'a [u8] {
        let column = self.layout.column(col);
        debug_assert!(
            expected.contains(&column.fixed_type),
            "column {} is {:?}, read as {:?}",
            col,
            column.fixed_type,
            expected
        );
        &self.bytes[column.offset..]
    }
}

impl std::fmt::Debug for RecordView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordView").field("bytes", &self.bytes).finish()
    }
}

impl Record for RecordView<'_> {
    fn get_bool(&self, col: usize) -> bool {
        self.at(col, &[FixedType::Boolean])[0] != 0
    }

    fn get_byte(&self, col: usize) -> i8 {
        self.at(col, &[FixedType::Byte, FixedType::Boolean]).get_i8()
    }

    fn get_short(&self, col: usize) -> i16 {
        self.at(col, &[FixedType::Short]).get_i16_le()
    }

    fn get_int(&self, col: usize) -> i32 {
        self.at(col, &[FixedType::Int, FixedType::Symbol]).get_i32_le()
    }

    fn get_long(&self, col: usize) -> i64 {
        self.at(col, &[FixedType::Long, FixedType::Date]).get_i64_le()
    }

    fn get_float(&self, col: usize) -> f32 {
        self.at(col, &[FixedType::Float]).get_f32_le()
    }

    fn get_double(&self, col: usize) -> f64 {
        self.at(col, &[FixedType::Double]).get_f64_le()
    }

    fn get_date(&self, col: usize) -> i64 {
        self.at(col, &[FixedType::Date, FixedType::Long]).get_i64_le()
    }

    fn get_str(&self, _col: usize) -> Option<&str> {
        // Layouts never hold strings.
        None
    }

    fn get_sym_code(&self, col: usize) -> i32 {
        self.at(col, &[FixedType::Symbol]).get_i32_le()
    }

    fn get_sym(&self, col: usize) -> Option<&str> {
        let code = self.get_sym_code(col);
        if code == SYMBOL_NULL {
            return None;
        }
        self.symbols?.symbol_table(col)?.value_of(code)
    }
}
