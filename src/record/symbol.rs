//! In-memory symbol dictionaries.

use super::{SymbolSource, SymbolTable};
use rustc_hash::FxHashMap;

/// Dictionary mapping dense `i32` codes to strings, in interning order.
#[derive(Debug, Clone, Default)]
pub struct SymbolDictionary {
    values: Vec<String>,
    codes: FxHashMap<String, i32>,
}

impl SymbolDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code of `value`, assigning the next free code if it is new.
    pub fn intern(&mut self, value: &str) -> i32 {
        if let Some(&code) = self.codes.get(value) {
            return code;
        }
        let code = self.values.len() as i32;
        self.values.push(value.to_string());
        self.codes.insert(value.to_string(), code);
        code
    }

    /// Returns the code of `value` without interning it.
    pub fn code_of(&self, value: &str) -> Option<i32> {
        self.codes.get(value).copied()
    }

    /// Returns the number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SymbolTable for SymbolDictionary {
    fn value_of(&self, code: i32) -> Option<&str> {
        if code < 0 {
            return None;
        }
        self.values.get(code as usize).map(String::as_str)
    }
}

/// Symbol dictionaries of a record stream, keyed by column index.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    columns: FxHashMap<usize, SymbolDictionary>,
}

impl Symbols {
    /// Creates an empty set of dictionaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `value` in the dictionary of column `col`.
    pub fn intern(&mut self, col: usize, value: &str) -> i32 {
        self.columns.entry(col).or_default().intern(value)
    }

    /// Returns the dictionary of column `col`.
    pub fn dictionary(&self, col: usize) -> Option<&SymbolDictionary> {
        self.columns.get(&col)
    }
}

impl SymbolSource for Symbols {
    fn symbol_table(&self, col: usize) -> Option<&dyn SymbolTable> {
        self.columns.get(&col).map(|d| d as &dyn SymbolTable)
    }
}
