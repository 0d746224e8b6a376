use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::StoreError;
use crate::state::price::Dollars;

/// Internal HashMap type.
type InnerMap = HashMap<String, Dollars>;

/// Shared item → price map used across the app.
///
/// Clones are cheap handles onto the same map and lock. Reads (`list`,
/// `get`, `len`) take the lock in shared mode; writes (`create`, `update`,
/// `delete`) take it exclusively for the whole check-then-act span, so two
/// concurrent creates of one name can never both succeed.
///
/// The map never leaves a critical section; callers only get owned copies.
#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    items: Arc<RwLock<InnerMap>>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `seed`. Later duplicates of a name win.
    pub fn with_items<I, K>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, Dollars)>,
        K: Into<String>,
    {
        let items = seed
            .into_iter()
            .map(|(name, price)| (name.into(), price))
            .collect::<InnerMap>();
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    // Every critical section is a single map operation, so a panicking
    // holder cannot leave the map half-written; poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, InnerMap> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InnerMap> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All entries, sorted by name.
    pub fn list(&self) -> Vec<(String, Dollars)> {
        let map = self.read();
        let mut entries: Vec<_> = map
            .iter()
            .map(|(name, price)| (name.clone(), *price))
            .collect();
        drop(map);

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Price of `name`.
    pub fn get(&self, name: &str) -> Result<Dollars, StoreError> {
        let map = self.read();
        map.get(name)
            .copied()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Insert a new item. An existing entry is left untouched.
    pub fn create(&self, name: String, price: Dollars) -> Result<(String, Dollars), StoreError> {
        let mut map = self.write();
        if map.contains_key(&name) {
            return Err(StoreError::AlreadyExists(name));
        }
        map.insert(name.clone(), price);
        Ok((name, price))
    }

    /// Overwrite the price of an existing item.
    pub fn update(&self, name: String, price: Dollars) -> Result<(String, Dollars), StoreError> {
        let mut map = self.write();
        match map.get_mut(&name) {
            Some(slot) => {
                *slot = price;
                Ok((name, price))
            }
            None => Err(StoreError::NotFound(name)),
        }
    }

    /// Remove an item, returning its name.
    pub fn delete(&self, name: &str) -> Result<String, StoreError> {
        let mut map = self.write();
        match map.remove_entry(name) {
            Some((name, _)) => Ok(name),
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use super::*;

    fn seeded() -> ItemStore {
        ItemStore::with_items([
            ("shoes", Dollars::new(50.0)),
            ("socks", Dollars::new(5.0)),
        ])
    }

    #[test]
    fn list_returns_every_entry_sorted() {
        let store = seeded();
        assert_eq!(
            store.list(),
            vec![
                ("shoes".to_string(), Dollars::new(50.0)),
                ("socks".to_string(), Dollars::new(5.0)),
            ]
        );
        assert!(ItemStore::new().list().is_empty());
    }

    #[test]
    fn create_then_get() {
        let store = seeded();
        let created = store.create("widget".into(), Dollars::new(9.5)).unwrap();
        assert_eq!(created, ("widget".to_string(), Dollars::new(9.5)));
        assert_eq!(store.get("widget").unwrap().to_string(), "$9.50");
    }

    #[test]
    fn second_create_is_rejected_and_keeps_first_value() {
        let store = seeded();
        store.create("boots".into(), Dollars::new(40.0)).unwrap();
        assert_eq!(
            store.create("boots".into(), Dollars::new(99.0)),
            Err(StoreError::AlreadyExists("boots".into()))
        );
        assert_eq!(store.get("boots"), Ok(Dollars::new(40.0)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_absent_item_does_not_insert() {
        let store = seeded();
        assert_eq!(
            store.update("boots".into(), Dollars::new(45.0)),
            Err(StoreError::NotFound("boots".into()))
        );
        assert_eq!(store.get("boots"), Err(StoreError::NotFound("boots".into())));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_overwrites() {
        let store = seeded();
        assert_eq!(
            store.update("shoes".into(), Dollars::new(55.0)),
            Ok(("shoes".to_string(), Dollars::new(55.0)))
        );
        assert_eq!(store.get("shoes"), Ok(Dollars::new(55.0)));
    }

    #[test]
    fn delete_absent_item_leaves_map_unchanged() {
        let store = seeded();
        let before = store.list();
        assert_eq!(store.delete("boots"), Err(StoreError::NotFound("boots".into())));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn seeded_scenario() {
        let store = seeded();
        assert_eq!(store.get("shoes").unwrap().to_string(), "$50.00");
        assert_eq!(store.get("boots"), Err(StoreError::NotFound("boots".into())));

        let (_, price) = store.create("boots".into(), Dollars::new(40.0)).unwrap();
        assert_eq!(price.to_string(), "$40.00");
        let (_, price) = store.update("boots".into(), Dollars::new(45.0)).unwrap();
        assert_eq!(price.to_string(), "$45.00");

        assert_eq!(store.delete("socks"), Ok("socks".to_string()));
        assert_eq!(store.get("socks"), Err(StoreError::NotFound("socks".into())));
    }

    #[test]
    fn concurrent_creates_of_one_name_succeed_once() {
        const WORKERS: usize = 32;
        let store = ItemStore::new();
        let barrier = Arc::new(Barrier::new(WORKERS));

        let handles: Vec<_> = (0..WORKERS)
            .map(|i| {
                let store = store.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.create("gadget".into(), Dollars::new(i as f64))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let wins = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::AlreadyExists(name)) if name == "gadget"))
            .count();

        assert_eq!(wins, 1);
        assert_eq!(conflicts, WORKERS - 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn readers_never_see_a_missing_entry_during_updates() {
        let store = seeded();
        let writer = {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..1000 {
                    store.update("shoes".into(), Dollars::new(i as f64)).unwrap();
                }
            })
        };
        for _ in 0..1000 {
            assert!(store.get("shoes").is_ok());
            assert_eq!(store.list().len(), 2);
        }
        writer.join().unwrap();
        assert_eq!(store.get("shoes"), Ok(Dollars::new(999.0)));
    }
}
