//! Column types and their fixed storage widths.
//!
//! [`ColumnType`] is the closed set of column types a record can carry. Each
//! type has a fixed width in the paged record store (if it can be stored there
//! at all) and a key encoding (if it can be used as a key column). Both are
//! decided here, once, so the call sites never need a fallthrough branch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Null value of an `INT` column.
pub const INT_NULL: i32 = i32::MIN;

/// Null value of a `LONG` or `DATE` column.
pub const LONG_NULL: i64 = i64::MIN;

/// Symbol code that stands for a null symbol.
pub const SYMBOL_NULL: i32 = -1;

/// The type of a record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    /// Single byte, `0` or `1`.
    Boolean,
    /// Signed 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Short,
    /// Signed 32-bit integer.
    Int,
    /// Signed 64-bit integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Milliseconds since epoch, stored as a 64-bit integer.
    Date,
    /// Variable-length character data.
    String,
    /// Dictionary-coded string; the record holds a 32-bit code.
    Symbol,
    /// Variable-length opaque bytes.
    Binary,
}

impl ColumnType {
    /// Returns the width of this type in a fixed-size stored record, or `None`
    /// if it cannot be stored at a fixed width.
    ///
    /// Symbols are stored as their dictionary code.
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            ColumnType::Boolean | ColumnType::Byte => Some(1),
            ColumnType::Short => Some(2),
            ColumnType::Int | ColumnType::Float | ColumnType::Symbol => Some(4),
            ColumnType::Long | ColumnType::Double | ColumnType::Date => Some(8),
            ColumnType::String | ColumnType::Binary => None,
        }
    }

    /// Returns how this type is written into a key, or `None` if it cannot be
    /// a key column.
    pub const fn key_kind(self) -> Option<KeyKind> {
        match self {
            ColumnType::Boolean => Some(KeyKind::Boolean),
            ColumnType::Byte => Some(KeyKind::Byte),
            ColumnType::Short => Some(KeyKind::Short),
            ColumnType::Int => Some(KeyKind::Int),
            ColumnType::Long => Some(KeyKind::Long),
            ColumnType::Float => Some(KeyKind::Float),
            ColumnType::Double => Some(KeyKind::Double),
            ColumnType::Date => Some(KeyKind::Date),
            ColumnType::String => Some(KeyKind::Str),
            ColumnType::Symbol => Some(KeyKind::Sym),
            ColumnType::Binary => None,
        }
    }

    /// Returns the upper-case SQL name of this type.
    pub const fn name(self) -> &'static str {
        match self {
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Byte => "BYTE",
            ColumnType::Short => "SHORT",
            ColumnType::Int => "INT",
            ColumnType::Long => "LONG",
            ColumnType::Float => "FLOAT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Date => "DATE",
            ColumnType::String => "STRING",
            ColumnType::Symbol => "SYMBOL",
            ColumnType::Binary => "BINARY",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column type that has been accepted as a key column.
///
/// Only types with a defined key encoding have a `KeyKind`, so encoding a key
/// is an exhaustive match with no failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// 1 byte.
    Boolean,
    /// 1 byte.
    Byte,
    /// 2 bytes.
    Short,
    /// 4 bytes.
    Int,
    /// 8 bytes.
    Long,
    /// 4 bytes, raw bit pattern.
    Float,
    /// 8 bytes, raw bit pattern.
    Double,
    /// 8 bytes, same as `Long`.
    Date,
    /// Length-prefixed characters.
    Str,
    /// Decoded symbol value, written exactly like `Str`.
    Sym,
}

/// The byte shape a [`KeyKind`] produces.
///
/// Two key columns can be matched against each other only if they produce
/// the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// One byte holding `0` or `1`.
    Bool,
    /// One raw byte.
    I8,
    /// Two bytes.
    I16,
    /// Four bytes.
    I32,
    /// Four bytes of float bits.
    F32,
    /// Eight bytes.
    I64,
    /// Eight bytes of float bits.
    F64,
    /// `i32` length followed by UTF-8 bytes.
    Str,
}

impl KeyKind {
    /// Returns the byte shape of this kind.
    pub const fn encoding(self) -> KeyEncoding {
        match self {
            KeyKind::Boolean => KeyEncoding::Bool,
            KeyKind::Byte => KeyEncoding::I8,
            KeyKind::Short => KeyEncoding::I16,
            KeyKind::Int => KeyEncoding::I32,
            KeyKind::Float => KeyEncoding::F32,
            KeyKind::Long | KeyKind::Date => KeyEncoding::I64,
            KeyKind::Double => KeyEncoding::F64,
            KeyKind::Str | KeyKind::Sym => KeyEncoding::Str,
        }
    }
}
