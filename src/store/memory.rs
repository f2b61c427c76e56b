use std::cell::{Cell, RefCell};

use super::{Store, StoreError, Table};

/// Keeps the persisted table in memory and counts writes.
pub struct MemoryStore<K, V> {
    entries: RefCell<Option<Table<K, V>>>,
    writes: Cell<usize>,
}

impl<K, V> MemoryStore<K, V> {
    pub fn empty() -> Self {
        Self {
            entries: RefCell::new(None),
            writes: Cell::new(0),
        }
    }

    pub fn with(entries: Table<K, V>) -> Self {
        Self {
            entries: RefCell::new(Some(entries)),
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl<K: Clone, V: Clone> MemoryStore<K, V> {
    pub fn snapshot(&self) -> Option<Table<K, V>> {
        self.entries.borrow().clone()
    }
}

impl<K: Clone, V: Clone> Store<K, V> for MemoryStore<K, V> {
    fn load_all(&self) -> Result<Option<Table<K, V>>, StoreError> {
        Ok(self.entries.borrow().clone())
    }

    fn persist_all(&self, entries: &Table<K, V>) -> Result<(), StoreError> {
        *self.entries.borrow_mut() = Some(entries.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
