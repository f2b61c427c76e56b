mod json_file;
#[cfg(test)]
mod memory;
mod store_error;

pub use json_file::JsonFileStore;
#[cfg(test)]
pub use memory::MemoryStore;
pub use store_error::StoreError;

use indexmap::IndexMap;

/// An insertion-ordered keyed table. `get`/`insert` are the per-key operations;
/// a `Store` moves whole tables to and from persistence.
pub type Table<K, V> = IndexMap<K, V>;

/// Whole-table persistence for one cache. Encoding is up to the implementor.
pub trait Store<K, V> {
    /// `Ok(None)` means nothing has been persisted yet.
    fn load_all(&self) -> Result<Option<Table<K, V>>, StoreError>;

    fn persist_all(&self, entries: &Table<K, V>) -> Result<(), StoreError>;
}
