//! Durable key-value store backing the repositories.
//!
//! One JSON file holds a map of collection key -> value. Reads that fail for
//! any reason (missing file, malformed JSON, shape mismatch) degrade to the
//! caller-supplied default; write failures are logged and swallowed so no
//! repository operation is ever fatal.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    path: PathBuf,
    cache: HashMap<String, Value>,
}

impl Store {
    /// Opens the store at `path`, loading whatever is currently on disk.
    /// An unreadable or malformed file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = read_map(&path).unwrap_or_default();

        Self {
            inner: Arc::new(Mutex::new(Inner { path, cache })),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let inner = self.inner.lock();

        match inner.cache.get(key) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or(default),
            None => default,
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let mut inner = self.inner.lock();

        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("store: could not serialize value for {key}: {e}");
                return;
            }
        };

        inner.cache.insert(key.to_string(), value);

        if let Err(e) = write_map(&inner.path, &inner.cache) {
            tracing::warn!("store: could not persist {key}: {e}");
        }
    }

    /// Reads a collection stored under `key`; absent or unreadable data is
    /// an empty collection.
    pub fn collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.get(key, Vec::new())
    }

    /// Replaces the collection stored under `key` in a single write.
    pub fn put_collection<T: Serialize>(&self, key: &str, items: &[T]) {
        self.set(key, &items);
    }
}

fn read_map(path: &Path) -> Option<HashMap<String, Value>> {
    let bytes = fs::read(path).ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn write_map(path: &Path, map: &HashMap<String, Value>) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let json = serde_json::to_vec_pretty(map).map_err(std::io::Error::other)?;
    fs::write(path, json)
}
