//! Record access and symbol resolution.
//!
//! A [`Record`] exposes typed column reads by column index. Symbol columns
//! carry a dictionary code that is only meaningful relative to the
//! [`SymbolSource`] of the stream that produced it; [`Record::get_sym`]
//! resolves it to the string value.

mod row;
mod symbol;

pub use row::{Row, Value};
pub use symbol::{SymbolDictionary, Symbols};

/// Typed read access to the columns of a record.
///
/// Callers are expected to read each column with the getter matching its
/// declared [`ColumnType`](crate::types::ColumnType).
pub trait Record {
    /// Reads a `BOOLEAN` column.
    fn get_bool(&self, col: usize) -> bool;

    /// Reads a `BYTE` column.
    fn get_byte(&self, col: usize) -> i8;

    /// Reads a `SHORT` column.
    fn get_short(&self, col: usize) -> i16;

    /// Reads an `INT` column.
    fn get_int(&self, col: usize) -> i32;

    /// Reads a `LONG` column.
    fn get_long(&self, col: usize) -> i64;

    /// Reads a `FLOAT` column.
    fn get_float(&self, col: usize) -> f32;

    /// Reads a `DOUBLE` column.
    fn get_double(&self, col: usize) -> f64;

    /// Reads a `DATE` column as milliseconds since epoch.
    fn get_date(&self, col: usize) -> i64 {
        self.get_long(col)
    }

    /// Reads a `STRING` column. `None` is a null string.
    fn get_str(&self, col: usize) -> Option<&str>;

    /// Reads the dictionary code of a `SYMBOL` column.
    fn get_sym_code(&self, col: usize) -> i32;

    /// Reads a `SYMBOL` column and resolves it to its string value.
    ///
    /// Returns `None` for a null symbol or when the code cannot be resolved;
    /// [`get_sym_code`](Self::get_sym_code) tells the two apart.
    fn get_sym(&self, col: usize) -> Option<&str>;
}

/// Dictionary of a single symbol column: code to string.
pub trait SymbolTable {
    /// Returns the string value of `code`, if known.
    fn value_of(&self, code: i32) -> Option<&str>;
}

/// Per-column symbol dictionaries of one record stream.
pub trait SymbolSource: Send + Sync {
    /// Returns the dictionary of column `col`, if it is a symbol column.
    fn symbol_table(&self, col: usize) -> Option<&dyn SymbolTable>;
}
