//! Error types for the last-record store.

use crate::types::ColumnType;

/// The result type used throughout lastrec.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for lastrec operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fixed serialized width of the slave record does not fit in one page.
    #[error("Record too large: {record_len} bytes does not fit in a {page_size} byte page")]
    RecordTooLarge {
        /// Sum of the fixed column widths.
        record_len: usize,
        /// Page size after rounding to a power of two.
        page_size: usize,
    },

    /// A column type cannot be used in the position it was requested for.
    #[error("Unsupported column type: {column} is {column_type}")]
    UnsupportedColumnType {
        /// Name of the offending column.
        column: String,
        /// Its declared type.
        column_type: ColumnType,
    },

    /// Master and slave key columns at the same position encode differently.
    #[error("Key type mismatch at position {position}: master {master} vs slave {slave}")]
    KeyTypeMismatch {
        /// Position within the key column lists.
        position: usize,
        /// Master column type.
        master: ColumnType,
        /// Slave column type.
        slave: ColumnType,
    },

    /// A non-null symbol code has no value in the dictionary of its stream.
    #[error("Unresolved symbol: code {code} in column {column}")]
    UnresolvedSymbol {
        /// Column index of the symbol column.
        column: usize,
        /// The code that could not be decoded.
        code: i32,
    },

    /// A named column does not exist in the metadata.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The page arena cannot address any more records.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Metadata could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Creates a new column not found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Error::ColumnNotFound(name.into())
    }

    /// Creates a new capacity exceeded error.
    pub fn capacity_exceeded(msg: impl Into<String>) -> Self {
        Error::CapacityExceeded(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
