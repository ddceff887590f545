//! Canonical byte keys for record projections.
//!
//! A key is the concatenation of one encoded value per key column:
//!
//! ```text
//! BOOLEAN, BYTE      1 byte
//! SHORT              2 bytes LE
//! INT, FLOAT         4 bytes LE (float as raw bits)
//! LONG, DOUBLE, DATE 8 bytes LE (double as raw bits)
//! STRING, SYMBOL     [len: i32 LE][UTF-8 bytes], null as len = -1
//! ```
//!
//! Symbols are written as their decoded value. Codes are only meaningful
//! within the stream that produced them, so a master and a slave symbol
//! column with the same value must produce the same bytes. A non-null code
//! that does not decode is an error; it is never written as null.

use crate::error::{Error, Result};
use crate::metadata::RecordMetadata;
use crate::record::Record;
use crate::types::{KeyKind, SYMBOL_NULL};
use bytes::BufMut;

/// Accumulates the encoded key columns of one record.
pub struct KeyWriter<'a> {
    buf: &'a mut Vec<u8>,
}

impl<'a> KeyWriter<'a> {
    /// Starts a new key in `buf`, discarding its previous content.
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        buf.clear();
        Self { buf }
    }

    /// Appends a boolean.
    pub fn put_bool(&mut self, value: bool) {
        self.buf.put_u8(value as u8);
    }

    /// Appends a byte.
    pub fn put_byte(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    /// Appends a short.
    pub fn put_short(&mut self, value: i16) {
        self.buf.put_i16_le(value);
    }

    /// Appends an int.
    pub fn put_int(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Appends a long.
    pub fn put_long(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    /// Appends the bit pattern of a float.
    pub fn put_float(&mut self, value: f32) {
        self.buf.put_u32_le(value.to_bits());
    }

    /// Appends the bit pattern of a double.
    pub fn put_double(&mut self, value: f64) {
        self.buf.put_u64_le(value.to_bits());
    }

    /// Appends a length-prefixed string; `None` writes a `-1` length.
    pub fn put_str(&mut self, value: Option<&str>) {
        match value {
            Some(s) => {
                self.buf.put_i32_le(s.len() as i32);
                self.buf.put_slice(s.as_bytes());
            }
            None => self.buf.put_i32_le(-1),
        }
    }

    /// Returns the key bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf
    }
}

/// A validated key column: source index and how to encode it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyColumn {
    /// Column index in the source record.
    pub index: usize,
    /// Encoding of the column.
    pub kind: KeyKind,
}

/// Projects a fixed list of record columns into a key.
#[derive(Debug, Clone)]
pub struct KeyEncoder {
    columns: Vec<KeyColumn>,
}

impl KeyEncoder {
    /// Creates an encoder over already validated key columns.
    pub fn new(columns: Vec<KeyColumn>) -> Self {
        Self { columns }
    }

    /// Resolves positionally aligned master and slave key column names into
    /// a pair of encoders `(master, slave)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the name lists differ in length
    /// - `ColumnNotFound` if a name is missing from its metadata
    /// - `UnsupportedColumnType` if a column type has no key encoding
    /// - `KeyTypeMismatch` if a master/slave pair encodes differently
    pub fn pair(
        master: &RecordMetadata,
        slave: &RecordMetadata,
        master_keys: &[&str],
        slave_keys: &[&str],
    ) -> Result<(KeyEncoder, KeyEncoder)> {
        if master_keys.len() != slave_keys.len() {
            return Err(Error::invalid_argument(format!(
                "master has {} key columns, slave has {}",
                master_keys.len(),
                slave_keys.len()
            )));
        }

        let mut master_columns = Vec::with_capacity(master_keys.len());
        let mut slave_columns = Vec::with_capacity(slave_keys.len());

        for (position, (m, s)) in master_keys.iter().zip(slave_keys).enumerate() {
            let m = Self::resolve(master, m)?;
            let s = Self::resolve(slave, s)?;
            if m.kind.encoding() != s.kind.encoding() {
                return Err(Error::KeyTypeMismatch {
                    position,
                    master: master.column_type(m.index),
                    slave: slave.column_type(s.index),
                });
            }
            master_columns.push(m);
            slave_columns.push(s);
        }

        Ok((KeyEncoder::new(master_columns), KeyEncoder::new(slave_columns)))
    }

    fn resolve(metadata: &RecordMetadata, name: &str) -> Result<KeyColumn> {
        let index = metadata.require_column(name)?;
        let column_type = metadata.column_type(index);
        let kind = column_type.key_kind().ok_or_else(|| Error::UnsupportedColumnType {
            column: metadata.column_name(index).to_string(),
            column_type,
        })?;
        Ok(KeyColumn { index, kind })
    }

    /// Returns the key columns.
    pub fn columns(&self) -> &[KeyColumn] {
        &self.columns
    }

    /// Writes the key of `record` into `writer`.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedSymbol` if a non-null symbol code has no value in
    /// the record's dictionary.
    pub fn encode<R: Record + ?Sized>(
        &self,
        record: &R,
        writer: &mut KeyWriter<'_>,
    ) -> Result<()> {
        for column in &self.columns {
            let idx = column.index;
            match column.kind {
                KeyKind::Boolean => writer.put_bool(record.get_bool(idx)),
                KeyKind::Byte => writer.put_byte(record.get_byte(idx)),
                KeyKind::Short => writer.put_short(record.get_short(idx)),
                KeyKind::Int => writer.put_int(record.get_int(idx)),
                KeyKind::Long => writer.put_long(record.get_long(idx)),
                KeyKind::Float => writer.put_float(record.get_float(idx)),
                KeyKind::Double => writer.put_double(record.get_double(idx)),
                KeyKind::Date => writer.put_long(record.get_date(idx)),
                KeyKind::Str => writer.put_str(record.get_str(idx)),
                KeyKind::Sym => {
                    let code = record.get_sym_code(idx);
                    if code == SYMBOL_NULL {
                        writer.put_str(None);
                    } else {
                        let value = record
                            .get_sym(idx)
                            .ok_or(Error::UnresolvedSymbol { column: idx, code })?;
                        writer.put_str(Some(value));
                    }
                }
            }
        }
        Ok(())
    }
}
