//! The three-line walkthrough: a two-bucket table overfilled, resized, and still intact.

use chaintable::{
    HashTable, KeyHasher, ResizePolicy, TableConfig, TableError, logger::initialize_logger,
};

const LINES: [(&str, &str); 3] = [
    ("line_1", "Tiny hash table"),
    ("line_2", "Filled beyond capacity"),
    ("line_3", "Linked list saves the day!"),
];

fn assert_all_lines(table: &HashTable<&str>) {
    for (key, value) in LINES {
        assert_eq!(table.retrieve(key), Some(&value), "{key} lost");
    }
}

#[test]
fn overfilled_table_keeps_every_line() {
    initialize_logger();
    let mut table = HashTable::new(2).unwrap();
    for (key, value) in LINES {
        table.insert(key, value);
    }

    assert_eq!(table.len(), 3);
    assert_all_lines(&table);

    let old_capacity = table.capacity();
    table.resize();
    assert_eq!(table.capacity(), old_capacity * 2);
    assert_all_lines(&table);
}

#[test]
fn manual_table_doubles_from_two_to_four() {
    for hasher in [KeyHasher::Builtin, KeyHasher::Djb2] {
        let mut table = TableConfig::new()
            .with_capacity(2)
            .with_hasher(hasher)
            .with_policy(ResizePolicy::manual())
            .build()
            .unwrap();
        for (key, value) in LINES {
            table.insert(key, value);
        }
        assert_eq!(table.capacity(), 2);
        assert_all_lines(&table);

        table.resize();
        assert_eq!(table.capacity(), 4);
        assert_all_lines(&table);
    }
}

#[test]
fn removing_twice_reports_missing_key() {
    initialize_logger();
    let mut table = HashTable::new(2).unwrap();
    table.insert("a", 1);

    assert_eq!(table.remove("a"), Ok(1));
    assert_eq!(table.retrieve("a"), None);
    assert_eq!(table.remove("a"), Err(TableError::KeyNotFound("a".to_string())));
    assert!(table.is_empty());
}
