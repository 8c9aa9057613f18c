mod tests {
    use cct_dimmer::storage::{ColorStore, ERASED_BYTE, NvStorage, RamStorage, StorageLayout};
    use cct_dimmer::WhiteColor;

    #[test]
    fn test_erased_storage_loads_full_white() {
        let mut store = ColorStore::new(RamStorage::<4>::new(), StorageLayout::default());
        assert_eq!(store.load(), WhiteColor::new(255, 255));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = ColorStore::new(RamStorage::<4>::new(), StorageLayout::default());
        store.save(WhiteColor::new(200, 100));
        assert_eq!(store.load(), WhiteColor::new(200, 100));
        assert_eq!(store.storage().bytes(), &[200, 100, ERASED_BYTE, ERASED_BYTE]);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut store = ColorStore::new(RamStorage::<4>::new(), StorageLayout::default());
        store.save(WhiteColor::new(200, 100));
        assert_eq!(store.storage().writes(), 2);
        store.save(WhiteColor::new(200, 100));
        assert_eq!(store.storage().writes(), 2);
        assert_eq!(store.load(), WhiteColor::new(200, 100));
    }

    #[test]
    fn test_save_only_writes_changed_bytes() {
        let mut store = ColorStore::new(
            RamStorage::with_contents([200, 100, 0, 0]),
            StorageLayout::default(),
        );
        store.save(WhiteColor::new(200, 96));
        assert_eq!(store.storage().writes(), 1);
        assert_eq!(store.load(), WhiteColor::new(200, 96));
    }

    #[test]
    fn test_custom_layout() {
        let layout = StorageLayout {
            cold_addr: 3,
            warm_addr: 2,
        };
        let mut store = ColorStore::new(RamStorage::<4>::new(), layout);
        store.save(WhiteColor::new(10, 20));
        assert_eq!(store.storage().bytes(), &[ERASED_BYTE, ERASED_BYTE, 20, 10]);
        assert_eq!(store.layout(), layout);
    }

    #[test]
    fn test_load_accepts_any_bytes() {
        let mut store = ColorStore::new(
            RamStorage::with_contents([0, 0]),
            StorageLayout::default(),
        );
        assert_eq!(store.load(), WhiteColor::OFF);
    }

    #[test]
    fn test_ram_storage_out_of_range() {
        let mut storage = RamStorage::<2>::new();
        storage.write(5, 42);
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.read(5), ERASED_BYTE);
    }
}
