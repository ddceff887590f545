//! Fixed-width layout of a stored slave record.
//!
//! Every slave column is written at a byte offset computed once from the
//! metadata, in column order, with no padding:
//!
//! ```text
//! (id: INT, ccy: SYMBOL, amount: DOUBLE, inactive: BOOLEAN, ts: LONG)
//!  0..4     4..8         8..16           16..17             17..25
//! ```
//!
//! Symbol columns are stored as their dictionary code.

use crate::error::{Error, Result};
use crate::metadata::RecordMetadata;
use crate::record::Record;
use crate::types::ColumnType;
use bytes::BufMut;

/// A column type that can be stored at a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedType {
    /// 1 byte
    Boolean,
    /// 1 byte
    Byte,
    /// 2 bytes
    Short,
    /// 4 bytes
    Int,
    /// 8 bytes
    Long,
    /// 4 bytes
    Float,
    /// 8 bytes
    Double,
    /// 8 bytes
    Date,
    /// 4 bytes, dictionary code
    Symbol,
}

impl FixedType {
    /// Returns the fixed-width form of `column_type`, if it has one.
    pub const fn of(column_type: ColumnType) -> Option<Self> {
        match column_type {
            ColumnType::Boolean => Some(FixedType::Boolean),
            ColumnType::Byte => Some(FixedType::Byte),
            ColumnType::Short => Some(FixedType::Short),
            ColumnType::Int => Some(FixedType::Int),
            ColumnType::Long => Some(FixedType::Long),
            ColumnType::Float => Some(FixedType::Float),
            ColumnType::Double => Some(FixedType::Double),
            ColumnType::Date => Some(FixedType::Date),
            ColumnType::Symbol => Some(FixedType::Symbol),
            ColumnType::String | ColumnType::Binary => None,
        }
    }

    /// Returns the stored width in bytes.
    pub const fn width(self) -> usize {
        match self {
            FixedType::Boolean | FixedType::Byte => 1,
            FixedType::Short => 2,
            FixedType::Int | FixedType::Float | FixedType::Symbol => 4,
            FixedType::Long | FixedType::Double | FixedType::Date => 8,
        }
    }
}

/// Position and type of one stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueColumn {
    /// Column index in the slave record.
    pub index: usize,
    /// Stored type.
    pub fixed_type: FixedType,
    /// Byte offset within the stored record.
    pub offset: usize,
}

/// Column offsets and total width of a stored record.
#[derive(Debug, Clone)]
pub struct RecordLayout {
    columns: Vec<ValueColumn>,
    record_len: usize,
}

impl RecordLayout {
    /// Computes the layout of all columns of `metadata`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedColumnType` for a column with no fixed width.
    pub fn new(metadata: &RecordMetadata) -> Result<Self> {
        let mut columns = Vec::with_capacity(metadata.column_count());
        let mut offset = 0;

        for (index, column) in metadata.columns().enumerate() {
            let fixed_type =
                FixedType::of(column.column_type).ok_or_else(|| Error::UnsupportedColumnType {
                    column: column.name.clone(),
                    column_type: column.column_type,
                })?;
            columns.push(ValueColumn { index, fixed_type, offset });
            offset += fixed_type.width();
        }

        Ok(Self { columns, record_len: offset })
    }

    /// Returns the stored record width in bytes.
    pub fn record_len(&self) -> usize {
        self.record_len
    }

    /// Returns the stored column at `col`.
    pub fn column(&self, col: usize) -> &ValueColumn {
        &self.columns[col]
    }

    /// Returns all stored columns.
    pub fn columns(&self) -> &[ValueColumn] {
        &self.columns
    }

    /// Writes every column of `record` into `dst`, which must be exactly
    /// [`record_len`](Self::record_len) bytes.
    pub fn serialize<R: Record + ?Sized>(&self, record: &R, dst: &mut [u8]) {
        debug_assert_eq!(dst.len(), self.record_len);

        for column in &self.columns {
            let idx = column.index;
            let mut out = &mut dst[column.offset..];
            match column.fixed_type {
                FixedType::Boolean => out.put_u8(record.get_bool(idx) as u8),
                FixedType::Byte => out.put_i8(record.get_byte(idx)),
                FixedType::Short => out.put_i16_le(record.get_short(idx)),
                FixedType::Int => out.put_i32_le(record.get_int(idx)),
                FixedType::Long => out.put_i64_le(record.get_long(idx)),
                FixedType::Float => out.put_f32_le(record.get_float(idx)),
                FixedType::Double => out.put_f64_le(record.get_double(idx)),
                FixedType::Date => out.put_i64_le(record.get_date(idx)),
                FixedType::Symbol => out.put_i32_le(record.get_sym_code(idx)),
            }
        }
    }
}
