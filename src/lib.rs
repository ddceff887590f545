//! # lastrec - Query-Scoped Last-Record Store
//!
//! lastrec keeps, per distinct key, the most recently arrived record of a
//! forward-only *slave* stream, and serves each of them at most once to
//! lookups from a *master* stream. A query engine uses it to evaluate
//! `LATEST BY` combined with anti-join style filtering, for example hiding
//! rows that a later soft-delete record has superseded.
//!
//! ## Architecture
//!
//! - **Key Encoder** ([`key`]): projects typed key columns into canonical bytes;
//!   symbol columns are encoded by value so both streams agree
//! - **Paged Record Store** ([`store`]): fixed-width record copies in lazily
//!   allocated power-of-two pages, overwritten in place per key
//! - **Slot State** ([`slot`]): one packed offset + consumed flag per key
//! - **Record View** ([`view`]): typed reads over a stored record
//! - **Last-Record Map** ([`LastRecordMap`]): build (`put`) and probe (`get`)
//!
//! ## Example Usage
//!
//! ```rust
//! use lastrec::{ColumnMetadata, ColumnType, LastRecordMap, Options, Record, RecordMetadata};
//! use lastrec::record::{Row, Symbols, Value};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), lastrec::Error> {
//! let balances = RecordMetadata::from_json(
//!     r#"[{"name": "cust_id", "type": "INT"},
//!         {"name": "ccy", "type": "SYMBOL"},
//!         {"name": "inactive", "type": "BOOLEAN"}]"#,
//! )?;
//! let options = Options::default();
//! let mut map = LastRecordMap::new(&balances, &balances, &["ccy"], &["ccy"], &options)?;
//!
//! let mut symbols = Symbols::new();
//! let usd = symbols.intern(1, "USD");
//! let symbols = Arc::new(symbols);
//! map.set_slave_cursor(symbols.clone());
//!
//! let row = |inactive| {
//!     Row::with_symbols(
//!         vec![Value::Int(1), Value::Symbol(usd), Value::Boolean(inactive)],
//!         symbols.clone(),
//!     )
//! };
//! map.put(&row(false))?;
//! map.put(&row(true))?;
//!
//! let latest = map.get(&row(false))?.expect("USD was put");
//! assert!(latest.get_bool(2));
//! assert_eq!(latest.get_sym(1), Some("USD"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Module declarations
pub mod config;
pub mod error;
pub mod key;
pub mod map;
pub mod metadata;
pub mod record;
pub mod slot;
pub mod store;
pub mod types;
pub mod view;

// Re-exports
pub use config::Options;
pub use error::{Error, Result};
pub use map::LastRecordMap;
pub use metadata::{ColumnMetadata, RecordMetadata};
pub use record::{Record, SymbolSource, SymbolTable};
pub use types::ColumnType;
pub use view::RecordView;
