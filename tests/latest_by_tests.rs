// LATEST BY Integration Tests for lastrec
// These tests drive the map the way a query plan does: build from a slave
// stream, then probe from a master stream with its own symbol dictionaries

use lastrec::record::{Row, Symbols, Value};
use lastrec::{ColumnMetadata, ColumnType, LastRecordMap, Options, Record, RecordMetadata};
use std::sync::Arc;

const CUST_ID: usize = 0;
const CCY: usize = 1;
const BALANCE: usize = 2;
const INACTIVE: usize = 3;
const TIMESTAMP: usize = 4;

fn balances_metadata() -> RecordMetadata {
    RecordMetadata::new(vec![
        ColumnMetadata::new("cust_id", ColumnType::Int),
        ColumnMetadata::new("balance_ccy", ColumnType::Symbol),
        ColumnMetadata::new("balance", ColumnType::Double),
        ColumnMetadata::new("inactive", ColumnType::Boolean),
        ColumnMetadata::new("timestamp", ColumnType::Long),
    ])
    .unwrap()
}

/// The five `balances` rows, in insertion order.
fn balances() -> (Vec<Row>, Arc<Symbols>) {
    let mut symbols = Symbols::new();
    let usd = symbols.intern(CCY, "USD");
    let eur = symbols.intern(CCY, "EUR");
    let symbols = Arc::new(symbols);

    let row = |cust: i32, ccy: i32, balance: Value, inactive: bool, ts: i64| {
        Row::with_symbols(
            vec![
                Value::Int(cust),
                Value::Symbol(ccy),
                balance,
                Value::Boolean(inactive),
                Value::Long(ts),
            ],
            symbols.clone(),
        )
    };

    let rows = vec![
        row(1, usd, Value::Double(1500.00), false, 6_000_000_001),
        row(1, eur, Value::Double(650.50), false, 6_000_000_002),
        row(2, usd, Value::Double(900.75), false, 6_000_000_003),
        row(2, eur, Value::Double(880.20), false, 6_000_000_004),
        row(1, usd, Value::Null, true, 6_000_000_006),
    ];
    (rows, symbols)
}

/// A master stream with one symbol column whose codes differ from the slave's.
fn currencies() -> (RecordMetadata, Vec<Row>) {
    let metadata =
        RecordMetadata::new(vec![ColumnMetadata::new("ccy", ColumnType::Symbol)]).unwrap();
    let mut symbols = Symbols::new();
    let gbp = symbols.intern(0, "GBP");
    let eur = symbols.intern(0, "EUR");
    let usd = symbols.intern(0, "USD");
    let symbols: Arc<Symbols> = Arc::new(symbols);
    let rows = [usd, eur, gbp]
        .into_iter()
        .map(|code| Row::with_symbols(vec![Value::Symbol(code)], symbols.clone()))
        .collect();
    (metadata, rows)
}

fn build(
    rows: &[Row],
    symbols: Arc<Symbols>,
    master: &RecordMetadata,
    master_key: &str,
) -> LastRecordMap {
    let mut map = LastRecordMap::new(
        master,
        &balances_metadata(),
        &[master_key],
        &["balance_ccy"],
        &Options::new().page_size(4096),
    )
    .unwrap();
    map.set_slave_cursor(symbols);
    for row in rows {
        map.put(row).unwrap();
    }
    map
}

/// Latest by currency over all five rows: the inactive USD row wins
#[test]
fn test_latest_by_arrival_order() {
    env_logger::try_init().ok();

    let (rows, symbols) = balances();
    let (master, probes) = currencies();
    let mut map = build(&rows, symbols, &master, "ccy");
    assert_eq!(map.len(), 2);

    let usd = map.get(&probes[0]).unwrap().expect("USD is present");
    assert_eq!(usd.get_int(CUST_ID), 1);
    assert_eq!(usd.get_sym(CCY), Some("USD"));
    assert!(usd.get_bool(INACTIVE));
    assert!(usd.get_double(BALANCE).is_nan());
    assert_eq!(usd.get_long(TIMESTAMP), 6_000_000_006);

    let eur = map.get(&probes[1]).unwrap().expect("EUR is present");
    assert_eq!(eur.get_int(CUST_ID), 2);
    assert_eq!(eur.get_double(BALANCE), 880.20);
    assert!(!eur.get_bool(INACTIVE));

    assert!(map.get(&probes[2]).unwrap().is_none(), "GBP was never put");
    map.close();
}

/// (select * from balances latest by balance_ccy where cust_id = 1) where not inactive
#[test]
fn test_simulated_delete() {
    env_logger::try_init().ok();

    let (rows, symbols) = balances();
    let customer_1: Vec<Row> = rows.into_iter().filter(|r| r.get_int(CUST_ID) == 1).collect();
    let (master, probes) = currencies();
    let mut map = build(&customer_1, symbols, &master, "ccy");

    let mut visible = Vec::new();
    for probe in &probes {
        if let Some(record) = map.get(probe).unwrap() {
            if !record.get_bool(INACTIVE) {
                visible.push((
                    record.get_int(CUST_ID),
                    record.get_sym(CCY).map(str::to_string),
                    record.get_double(BALANCE),
                    record.get_long(TIMESTAMP),
                ));
            }
        }
    }

    assert_eq!(visible, vec![(1, Some("EUR".to_string()), 650.50, 6_000_000_002)]);
}

/// The put order decides, not the timestamp column
#[test]
fn test_no_timestamp_comparison() {
    let (rows, symbols) = balances();
    // Newest USD row first, oldest last.
    let reordered = vec![rows[4].clone(), rows[0].clone()];
    let (master, probes) = currencies();
    let mut map = build(&reordered, symbols, &master, "ccy");

    let usd = map.get(&probes[0]).unwrap().unwrap();
    assert_eq!(usd.get_long(TIMESTAMP), 6_000_000_001);
    assert!(!usd.get_bool(INACTIVE));
}

/// Duplicate master keys join at most once
#[test]
fn test_duplicate_masters_match_once() {
    let (rows, symbols) = balances();
    let (master, probes) = currencies();
    let mut map = build(&rows, symbols, &master, "ccy");

    let duplicated = [&probes[0], &probes[0], &probes[1], &probes[0]];
    let matches: Vec<bool> = duplicated.iter().map(|p| map.get(*p).unwrap().is_some()).collect();
    assert_eq!(matches, vec![true, false, true, false]);
}

/// A string master column matches a symbol slave column by value
#[test]
fn test_string_master_key() {
    let (rows, symbols) = balances();
    let master = RecordMetadata::new(vec![
        ColumnMetadata::new("id", ColumnType::Long),
        ColumnMetadata::new("currency_name", ColumnType::String),
    ])
    .unwrap();
    let mut map = build(&rows, symbols, &master, "currency_name");

    let probe = |name: &str| Row::new(vec![Value::Long(0), Value::Str(name.to_string())]);
    assert_eq!(map.get(&probe("EUR")).unwrap().map(|r| r.get_int(CUST_ID)), Some(2));
    assert!(map.get(&probe("usd")).unwrap().is_none(), "keys are case sensitive");
    assert!(map.get(&probe("USD")).unwrap().is_some());
}

/// Rebuilding after reset with a new slave stream and dictionary
#[test]
fn test_repeated_execution() {
    env_logger::try_init().ok();

    let (rows, symbols) = balances();
    let (master, probes) = currencies();
    let mut map = build(&rows, symbols, &master, "ccy");
    assert!(map.get(&probes[0]).unwrap().is_some());
    let pages = map.page_count();

    map.reset();
    assert!(map.get(&probes[1]).unwrap().is_none(), "reset forgets every key");

    // Second execution: the slave stream is reopened with different codes.
    let mut symbols = Symbols::new();
    symbols.intern(CCY, "CHF");
    let eur = symbols.intern(CCY, "EUR");
    let symbols = Arc::new(symbols);
    map.set_slave_cursor(symbols.clone());
    map.put(&Row::with_symbols(
        vec![
            Value::Int(9),
            Value::Symbol(eur),
            Value::Double(1.0),
            Value::Boolean(false),
            Value::Long(7),
        ],
        symbols,
    ))
    .unwrap();

    let eur_row = map.get(&probes[1]).unwrap().expect("EUR rebuilt");
    assert_eq!(eur_row.get_int(CUST_ID), 9);
    assert_eq!(eur_row.get_sym(CCY), Some("EUR"));
    assert!(map.get(&probes[0]).unwrap().is_none());
    assert_eq!(map.page_count(), pages);
}

/// Metadata is passed through unchanged
#[test]
fn test_metadata_passthrough() {
    let (rows, symbols) = balances();
    let (master, _) = currencies();
    let map = build(&rows, symbols, &master, "ccy");
    assert_eq!(map.metadata().column_count(), 5);
    assert_eq!(map.metadata().column_index("inactive"), Some(INACTIVE));
    assert_eq!(map.record_len(), 4 + 4 + 8 + 1 + 8);
}
