// Property Tests for lastrec
// Random put/get/reset sequences are checked against a HashMap model

use lastrec::record::{Row, Value};
use lastrec::{ColumnMetadata, ColumnType, LastRecordMap, Options, Record, RecordMetadata};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Put { key: i16, value: i64 },
    Get { key: i16 },
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0i16..32, any::<i64>()).prop_map(|(key, value)| Op::Put { key, value }),
        4 => (0i16..40).prop_map(|key| Op::Get { key }),
        1 => Just(Op::Reset),
    ]
}

/// (key: SHORT, value: LONG, flag: BOOLEAN) = 11 bytes
fn metadata() -> RecordMetadata {
    RecordMetadata::new(vec![
        ColumnMetadata::new("key", ColumnType::Short),
        ColumnMetadata::new("value", ColumnType::Long),
        ColumnMetadata::new("flag", ColumnType::Boolean),
    ])
    .unwrap()
}

fn row(key: i16, value: i64) -> Row {
    Row::new(vec![Value::Short(key), Value::Long(value), Value::Boolean(value % 2 == 0)])
}

proptest! {
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(op(), 1..300), page_size in 11usize..200) {
        let metadata = metadata();
        let mut map = LastRecordMap::new(
            &metadata,
            &metadata,
            &["key"],
            &["key"],
            &Options::new().page_size(page_size),
        )
        .unwrap();

        // key -> (latest value, consumed)
        let mut model: HashMap<i16, (i64, bool)> = HashMap::new();

        for op in ops {
            match op {
                Op::Put { key, value } => {
                    map.put(&row(key, value)).unwrap();
                    model.insert(key, (value, false));
                }
                Op::Get { key } => {
                    let actual = map
                        .get(&row(key, 0))
                        .unwrap()
                        .map(|r| (r.get_short(0), r.get_long(1), r.get_bool(2)));
                    let expected = match model.get_mut(&key) {
                        Some((value, consumed)) if !*consumed => {
                            *consumed = true;
                            Some((key, *value, *value % 2 == 0))
                        }
                        _ => None,
                    };
                    prop_assert_eq!(actual, expected);
                }
                Op::Reset => {
                    map.reset();
                    model.clear();
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }
    }

    #[test]
    fn prop_pages_bounded_by_distinct_keys(keys in prop::collection::vec(0i16..64, 1..500)) {
        let metadata = metadata();
        let mut map = LastRecordMap::new(
            &metadata,
            &metadata,
            &["key"],
            &["key"],
            &Options::new().page_size(32),
        )
        .unwrap();

        for (i, key) in keys.iter().enumerate() {
            map.put(&row(*key, i as i64)).unwrap();
        }

        // Two 11-byte records per 32-byte page, one record per distinct key.
        let distinct = map.len();
        prop_assert_eq!(map.page_count(), distinct.div_ceil(2));

        // Every key returns its last put, exactly once.
        let mut last = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            last.insert(*key, i as i64);
        }
        for (key, value) in last {
            prop_assert_eq!(map.get(&row(key, 0)).unwrap().map(|r| r.get_long(1)), Some(value));
            prop_assert!(map.get(&row(key, 0)).unwrap().is_none());
        }
    }
}
