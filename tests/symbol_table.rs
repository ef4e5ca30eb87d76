use mao::memory::symbol_table::{DEFAULT_BUCKET_COUNT, SymbolTable, hash};
use pretty_assertions::assert_eq;

#[test]
fn hash_is_deterministic_and_bounded() {
    assert_eq!(hash("", 512), 0);
    assert_eq!(hash("a", 512), 97);
    assert_eq!(hash("ab", 512), 5);
    for key in ["alpha", "beta", "a_very_long_identifier_name_that_wraps"] {
        assert_eq!(hash(key, 512), hash(key, 512));
        assert!(hash(key, 7) < 7);
    }
}

#[test]
fn insert_then_lookup() {
    let mut table = SymbolTable::new();
    assert_eq!(table.bucket_count(), DEFAULT_BUCKET_COUNT);

    table.insert("x", 1);
    table.insert("y", 2);

    assert_eq!(table.lookup("x"), Some(&1));
    assert_eq!(table.lookup("y"), Some(&2));
    assert_eq!(table.lookup("z"), None);
    assert!(table.exists("x"));
    assert!(!table.exists("z"));
    assert_eq!(table.len(), 2);
}

#[test]
fn colliding_keys_share_a_bucket() {
    let mut table = SymbolTable::with_bucket_count(1);
    for (value, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
        table.insert(key, value);
    }

    assert_eq!(table.occupied_buckets(), 1);
    assert_eq!(table.lookup("c"), Some(&2));

    assert_eq!(table.delete("b"), Some(1));
    assert_eq!(table.lookup("b"), None);
    assert_eq!(table.lookup("a"), Some(&0));
    assert_eq!(table.lookup("d"), Some(&3));
    assert_eq!(table.len(), 3);
}

#[test]
fn delete_releases_empty_buckets() {
    let mut table = SymbolTable::new();
    table.insert("only", "value");
    assert_eq!(table.occupied_buckets(), 1);

    assert_eq!(table.delete("only"), Some("value"));
    assert_eq!(table.occupied_buckets(), 0);
    assert!(table.is_empty());
    assert_eq!(table.lookup("only"), None);
}

#[test]
fn deleting_absent_key_changes_nothing() {
    let mut table = SymbolTable::new();
    table.insert("kept", 1);
    assert_eq!(table.delete("missing"), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("kept"), Some(&1));
}

#[test]
fn duplicate_keys_resolve_to_the_first_entry() {
    let mut table = SymbolTable::new();
    table.insert("dup", 1);
    table.insert("dup", 2);

    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("dup"), Some(&1));
    assert_eq!(table.delete("dup"), Some(1));
    assert_eq!(table.lookup("dup"), Some(&2));
}

#[test]
fn lookup_mut_updates_value() {
    let mut table = SymbolTable::new();
    table.insert("counter", 10);
    if let Some(value) = table.lookup_mut("counter") {
        *value += 5;
    }
    assert_eq!(table.lookup("counter"), Some(&15));
    assert!(table.lookup_mut("absent").is_none());
}

#[test]
fn iter_visits_every_entry() {
    let mut table = SymbolTable::with_bucket_count(3);
    for (value, key) in ["p", "q", "r", "s", "t"].into_iter().enumerate() {
        table.insert(key, value);
    }
    let mut keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["p", "q", "r", "s", "t"]);
}
