#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use universe::libs::data_storage::DataStorage;
    use universe::libs::storage::{MemoryBackend, Persisted, Storage, StorageKey};

    struct StorageTestContext {
        _temp_dir: TempDir,
        data_storage: DataStorage,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data_storage = DataStorage::at(temp_dir.path().join("universe"));
            StorageTestContext {
                _temp_dir: temp_dir,
                data_storage,
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_read_after_write(ctx: &mut StorageTestContext) {
        let storage = Storage::open_in(&ctx.data_storage).unwrap();
        let mut cell = storage.cell(StorageKey::new("counter"), 0u32);
        assert_eq!(*cell.get(), 0);

        assert_eq!(cell.set(5), Persisted::Yes);
        assert_eq!(*cell.get(), 5);

        cell.update(|n| n + 1);
        assert_eq!(*cell.get(), 6);
        assert_eq!(storage.get(&StorageKey::new("counter"), 0u32), 6);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_value_survives_reopen(ctx: &mut StorageTestContext) {
        {
            let storage = Storage::open_in(&ctx.data_storage).unwrap();
            let mut cell = storage.cell(StorageKey::new("names"), Vec::<String>::new());
            cell.set(vec!["Ada".to_string(), "Grace".to_string()]);
        }

        let storage = Storage::open_in(&ctx.data_storage).unwrap();
        let cell = storage.cell(StorageKey::new("names"), Vec::<String>::new());
        assert_eq!(cell.get(), &vec!["Ada".to_string(), "Grace".to_string()]);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_values_are_stored_as_json(ctx: &mut StorageTestContext) {
        let storage = Storage::open_in(&ctx.data_storage).unwrap();
        storage.set(&StorageKey::GPA_WEIGHTED, &false);
        assert_eq!(storage.read_raw(&StorageKey::GPA_WEIGHTED).as_deref(), Some("false"));

        storage.remove(&StorageKey::GPA_WEIGHTED);
        assert_eq!(storage.read_raw(&StorageKey::GPA_WEIGHTED), None);
        assert!(storage.get(&StorageKey::GPA_WEIGHTED, true));
    }

    #[test]
    fn test_malformed_value_reads_as_default() {
        let storage = Storage::in_memory();
        let key = StorageKey::new("broken");
        storage.set(&key, "not a list");

        let cell = storage.cell(key, vec![1, 2, 3]);
        assert_eq!(cell.get(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_write_keeps_memory_value_and_skips_notification() {
        let storage = Storage::new(MemoryBackend::with_quota(8));
        let key = StorageKey::new("notes");
        let seen = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&seen);
        let _subscription = storage.bus().subscribe(key.clone(), move |_| *counter.lock() += 1);

        let mut cell = storage.cell(key.clone(), String::new());
        assert_eq!(cell.set("ok".to_string()), Persisted::Yes);
        assert_eq!(*seen.lock(), 1);

        assert_eq!(cell.set("far too long to fit".to_string()), Persisted::No);
        assert_eq!(cell.get(), "far too long to fit");
        assert_eq!(*seen.lock(), 1);
        assert_eq!(storage.get(&key, String::new()), "ok");
    }

    #[test]
    fn test_write_notifies_before_returning() {
        let storage = Storage::in_memory();
        let observed = Arc::new(Mutex::new(Vec::new()));

        let reader = storage.clone();
        let sink = Arc::clone(&observed);
        let _subscription = storage.bus().subscribe(StorageKey::TODOS, move |_| {
            sink.lock().push(reader.get(&StorageKey::TODOS, 0u8));
        });

        storage.set(&StorageKey::TODOS, &7u8);
        storage.set(&StorageKey::HABITS, &9u8);
        assert_eq!(*observed.lock(), vec![7]);
    }

    #[test]
    fn test_dropped_subscription_stops_listening() {
        let storage = Storage::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let subscription = storage.bus().subscribe_all(move |key| sink.lock().push(key.to_string()));
        storage.set(&StorageKey::LISTINGS, &1);
        drop(subscription);
        storage.set(&StorageKey::LISTINGS, &2);

        assert_eq!(*seen.lock(), vec!["marketplace-listings".to_string()]);
        assert_eq!(storage.bus().subscriber_count(), 0);
    }
}
