//! Record metadata: column names and types.
//!
//! Metadata is only consulted when a [`LastRecordMap`](crate::LastRecordMap)
//! is constructed. It can be built in code or loaded from a JSON column list:
//!
//! ```text
//! [{"name": "id", "type": "INT"}, {"name": "ccy", "type": "SYMBOL"}]
//! ```
//!
//! Column names are matched case-insensitively.

use crate::error::{Error, Result};
use crate::types::ColumnType;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Name and type of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name.
    pub name: String,
    /// Column type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnMetadata {
    /// Creates a new column description.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self { name: name.into(), column_type }
    }
}

/// Ordered column descriptions of a record shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColumnMetadata>", into = "Vec<ColumnMetadata>")]
pub struct RecordMetadata {
    columns: Vec<ColumnMetadata>,
    index: FxHashMap<String, usize>,
}

impl RecordMetadata {
    /// Builds metadata from an ordered column list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if two columns share a name.
    pub fn new(columns: Vec<ColumnMetadata>) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if index.insert(column.name.to_ascii_lowercase(), i).is_some() {
                return Err(Error::invalid_argument(format!(
                    "duplicate column name: {}",
                    column.name
                )));
            }
        }
        Ok(Self { columns, index })
    }

    /// Loads metadata from a JSON array of `{"name", "type"}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the column list to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.columns)?)
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_ascii_lowercase()).copied()
    }

    /// Returns the index of the named column.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` if there is no such column.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| Error::column_not_found(name))
    }

    /// Returns the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column(&self, index: usize) -> &ColumnMetadata {
        &self.columns[index]
    }

    /// Returns the name of the column at `index`.
    pub fn column_name(&self, index: usize) -> &str {
        &self.columns[index].name
    }

    /// Returns the type of the column at `index`.
    pub fn column_type(&self, index: usize) -> ColumnType {
        self.columns[index].column_type
    }

    /// Iterates the columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnMetadata> {
        self.columns.iter()
    }
}

impl TryFrom<Vec<ColumnMetadata>> for RecordMetadata {
    type Error = Error;

    fn try_from(columns: Vec<ColumnMetadata>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<RecordMetadata> for Vec<ColumnMetadata> {
    fn from(metadata: RecordMetadata) -> Self {
        metadata.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances() -> RecordMetadata {
        RecordMetadata::new(vec![
            ColumnMetadata::new("cust_id", ColumnType::Int),
            ColumnMetadata::new("balance_ccy", ColumnType::Symbol),
            ColumnMetadata::new("balance", ColumnType::Double),
        ])
        .unwrap()
    }

    #[test]
    fn test_column_lookup() {
        let metadata = balances();
        assert_eq!(metadata.column_count(), 3);
        assert_eq!(metadata.column_index("balance_ccy"), Some(1));
        assert_eq!(metadata.column_index("BALANCE"), Some(2));
        assert_eq!(metadata.column_index("missing"), None);
        assert_eq!(metadata.column_type(0), ColumnType::Int);
        assert_eq!(metadata.column_name(2), "balance");
        assert!(matches!(metadata.require_column("nope"), Err(Error::ColumnNotFound(_))));
    }

    #[test]
    fn test_duplicate_column() {
        let result = RecordMetadata::new(vec![
            ColumnMetadata::new("a", ColumnType::Int),
            ColumnMetadata::new("A", ColumnType::Long),
        ]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_json() {
        let metadata = RecordMetadata::from_json(
            r#"[{"name": "id", "type": "INT"}, {"name": "ccy", "type": "SYMBOL"}]"#,
        )
        .unwrap();
        assert_eq!(metadata.column_count(), 2);
        assert_eq!(metadata.column_index("ccy"), Some(1));
        assert_eq!(metadata.column_type(1), ColumnType::Symbol);

        let json = metadata.to_json().unwrap();
        let again = RecordMetadata::from_json(&json).unwrap();
        assert_eq!(again.column_name(0), "id");

        let dup = RecordMetadata::from_json(
            r#"[{"name": "id", "type": "INT"}, {"name": "id", "type": "LONG"}]"#,
        );
        assert!(dup.is_err());
    }
}
