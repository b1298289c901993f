use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::default();
    assert!(storage.read("k").is_none());

    storage.write("k", "v").expect("write");
    assert_eq!(storage.read("k").as_deref(), Some("v"));

    storage.write("k", "v2").expect("overwrite");
    assert_eq!(storage.read("k").as_deref(), Some("v2"));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::default();
    storage.write("k", "v").expect("write");

    storage.remove("k");
    storage.remove("k");
    assert!(storage.read("k").is_none());
}
