use std::fs;

use shortener_store::{ensure_dir, AtomicFileWriter, FileStore, KeyValueStore};
use tempfile::TempDir;

#[test]
fn creates_missing_storage_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("store");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("slot.json", "[]").unwrap();
    assert_eq!(first.file_name().unwrap(), "slot.json");
    assert_eq!(fs::read_to_string(&first).unwrap(), "[]");

    let second = writer.write("slot.json", "[1]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[1]");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("slot.json", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("slot.json").exists());
}

#[test]
fn file_store_reports_absent_keys() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("missing"));
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn file_store_overwrites_value_per_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    store.set("a", "one").unwrap();
    store.set("b", "two").unwrap();
    store.set("a", "three").unwrap();

    assert_eq!(store.get("a").unwrap().as_deref(), Some("three"));
    assert_eq!(store.get("b").unwrap().as_deref(), Some("two"));
    assert!(temp.path().join("a.json").is_file());
}
