//! Owned in-memory records.

use super::{Record, SymbolSource};
use crate::types::{INT_NULL, LONG_NULL, SYMBOL_NULL};
use std::sync::Arc;

/// A single column value of a [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL; reads as the null sentinel of the requested type.
    Null,
    /// `BOOLEAN`
    Boolean(bool),
    /// `BYTE`
    Byte(i8),
    /// `SHORT`
    Short(i16),
    /// `INT`
    Int(i32),
    /// `LONG`
    Long(i64),
    /// `FLOAT`
    Float(f32),
    /// `DOUBLE`
    Double(f64),
    /// `DATE`, milliseconds since epoch.
    Date(i64),
    /// `STRING`
    Str(String),
    /// `SYMBOL`, as a dictionary code.
    Symbol(i32),
}

/// A record whose values live in a `Vec`.
///
/// Symbol columns hold codes that resolve through the attached [`SymbolSource`].
///
/// # Panics
///
/// The typed getters panic when the stored value does not match the requested
/// type, the same way slice indexing panics on a bad index.
#[derive(Clone)]
pub struct Row {
    values: Vec<Value>,
    symbols: Option<Arc<dyn SymbolSource>>,
}

impl Row {
    /// Creates a row without symbol dictionaries.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values, symbols: None }
    }

    /// Creates a row whose symbol codes resolve through `symbols`.
    pub fn with_symbols(values: Vec<Value>, symbols: Arc<dyn SymbolSource>) -> Self {
        Self { values, symbols: Some(symbols) }
    }

    /// Returns the raw value of column `col`.
    pub fn value(&self, col: usize) -> &Value {
        &self.values[col]
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn mismatch(&self, col: usize, expected: &str) -> ! {
        panic!("column {} is {:?}, not {}", col, self.values[col], expected)
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Row").field("values", &self.values).finish()
    }
}

impl Record for Row {
    fn get_bool(&self, col: usize) -> bool {
        match self.values[col] {
            Value::Boolean(v) => v,
            Value::Null => false,
            _ => self.mismatch(col, "BOOLEAN"),
        }
    }

    fn get_byte(&self, col: usize) -> i8 {
        match self.values[col] {
            Value::Byte(v) => v,
            Value::Null => 0,
            _ => self.mismatch(col, "BYTE"),
        }
    }

    fn get_short(&self, col: usize) -> i16 {
        match self.values[col] {
            Value::Short(v) => v,
            Value::Null => 0,
            _ => self.mismatch(col, "SHORT"),
        }
    }

    fn get_int(&self, col: usize) -> i32 {
        match self.values[col] {
            Value::Int(v) => v,
            Value::Null => INT_NULL,
            _ => self.mismatch(col, "INT"),
        }
    }

    fn get_long(&self, col: usize) -> i64 {
        match self.values[col] {
            Value::Long(v) | Value::Date(v) => v,
            Value::Null => LONG_NULL,
            _ => self.mismatch(col, "LONG"),
        }
    }

    fn get_float(&self, col: usize) -> f32 {
        match self.values[col] {
            Value::Float(v) => v,
            Value::Null => f32::NAN,
            _ => self.mismatch(col, "FLOAT"),
        }
    }

    fn get_double(&self, col: usize) -> f64 {
        match self.values[col] {
            Value::Double(v) => v,
            Value::Null => f64::NAN,
            _ => self.mismatch(col, "DOUBLE"),
        }
    }

    fn get_str(&self, col: usize) -> Option<&str> {
        match &self.values[col] {
            Value::Str(v) => Some(v.as_str()),
            Value::Null => None,
            _ => self.mismatch(col, "STRING"),
        }
    }

    fn get_sym_code(&self, col: usize) -> i32 {
        match self.values[col] {
            Value::Symbol(code) => code,
            Value::Null => SYMBOL_NULL,
            _ => self.mismatch(col, "SYMBOL"),
        }
    }

    fn get_sym(&self, col: usize) -> Option<&str> {
        let code = self.get_sym_code(col);
        if code == SYMBOL_NULL {
            return None;
        }
        self.symbols.as_ref()?.symbol_table(col)?.value_of(code)
    }
}
