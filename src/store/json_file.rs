// store/json_file.rs
use std::fs::{self, File};
use std::hash::Hash;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Store, StoreError, Table};

/// A cache kept as one pretty-printed JSON object: `{ "<key>": { ...record } }`.
pub struct JsonFileStore<K, V> {
    path: PathBuf,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> JsonFileStore<K, V> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_err(&self, source: serde_json::Error) -> StoreError {
        StoreError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl<K, V> Store<K, V> for JsonFileStore<K, V>
where
    K: Serialize + DeserializeOwned + Hash + Eq,
    V: Serialize + DeserializeOwned,
{
    fn load_all(&self) -> Result<Option<Table<K, V>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };

        let entries = serde_json::from_reader(BufReader::new(file)).map_err(|e| self.json_err(e))?;
        Ok(Some(entries))
    }

    fn persist_all(&self, entries: &Table<K, V>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        let file = File::create(&self.path).map_err(|e| self.io_err(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries).map_err(|e| self.json_err(e))?;
        writer.flush().map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        lat: f64,
        lng: f64,
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<String, Point> = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.load_all().unwrap().is_none());
    }

    #[test]
    fn persist_creates_parent_dirs_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<String, Point> = JsonFileStore::new(dir.path().join("data/coords.json"));

        let mut table = Table::new();
        table.insert("Zeta Tower".to_string(), Point { lat: 22.3, lng: 114.1 });
        table.insert("Alpha Court".to_string(), Point { lat: 22.4, lng: 114.2 });
        store.persist_all(&table).unwrap();

        let loaded = store.load_all().unwrap().unwrap();
        let keys: Vec<_> = loaded.keys().cloned().collect();
        assert_eq!(keys, vec!["Zeta Tower", "Alpha Court"]);
        assert_eq!(loaded["Alpha Court"], Point { lat: 22.4, lng: 114.2 });
    }

    #[test]
    fn row_indexed_keys_round_trip_as_integers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, r#"{"0": {"lat": 1.0, "lng": 2.0}, "10": {"lat": 3.0, "lng": 4.0}, "2": {"lat": 5.0, "lng": 6.0}}"#).unwrap();

        let store: JsonFileStore<usize, Point> = JsonFileStore::new(&path);
        let loaded = store.load_all().unwrap().unwrap();
        let keys: Vec<_> = loaded.keys().copied().collect();
        assert_eq!(keys, vec![0, 10, 2]);
    }

    #[test]
    fn garbage_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let store: JsonFileStore<String, Point> = JsonFileStore::new(&path);
        assert!(matches!(store.load_all(), Err(StoreError::Json { .. })));
    }
}
