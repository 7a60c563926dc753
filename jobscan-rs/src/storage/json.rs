//! JSON file stores
//!
//! Files are rewritten whole: the new content goes to a sibling temp file
//! which is then renamed over the target. Temp names are unique per write,
//! and each store serializes its own writers.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::Result;

async fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
    let tmp_path = path.with_file_name(tmp_name);

    let written = match fs::write(&tmp_path, data).await {
        Ok(()) => fs::rename(&tmp_path, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(e.into());
    }
    Ok(())
}

/// Read and parse a JSON file; None when missing or unreadable
async fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match fs::read(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No stored data at {}", path.display());
            return None;
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_slice(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring corrupt data in {}: {}", path.display(), e);
            None
        }
    }
}

/// Append-only list persisted as a JSON array
pub struct JsonListStore<T> {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonListStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            lock: Arc::clone(&self.lock),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> JsonListStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored items in insertion order; empty when missing or corrupt
    pub async fn load(&self) -> Vec<T> {
        read_json(&self.path).await.unwrap_or_default()
    }

    /// Append an item and rewrite the file
    pub async fn append(&self, item: T) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await;
        items.push(item);
        let data = serde_json::to_vec_pretty(&items)?;
        write_atomic(&self.path, &data).await?;
        debug!("Stored {} items in {}", items.len(), self.path.display());
        Ok(())
    }
}

/// Single record, overwritten on every save
pub struct JsonSnapshotStore<T> {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonSnapshotStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            lock: Arc::clone(&self.lock),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> JsonSnapshotStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Option<T> {
        read_json(&self.path).await
    }

    pub async fn save(&self, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)?;
        let _guard = self.lock.lock().await;
        write_atomic(&self.path, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn leftover_temp_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "tmp"))
            .collect()
    }

    #[tokio::test]
    async fn test_list_append_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store: JsonListStore<u32> = JsonListStore::new(dir.path().join("nested/items.json"));

        assert!(store.load().await.is_empty());
        store.append(3).await.unwrap();
        store.append(1).await.unwrap();
        store.append(2).await.unwrap();

        assert_eq!(store.load().await, vec![3, 1, 2]);
        assert!(leftover_temp_files(&dir.path().join("nested")).is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_list_recovers_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store: JsonListStore<String> = JsonListStore::new(&path);
        assert!(store.load().await.is_empty());

        store.append("fresh".to_string()).await.unwrap();
        assert_eq!(store.load().await, vec!["fresh".to_string()]);
    }

    #[tokio::test]
    async fn test_snapshot_overwrites() {
        let dir = TempDir::new().unwrap();
        let store: JsonSnapshotStore<String> = JsonSnapshotStore::new(dir.path().join("last.json"));

        assert_eq!(store.load().await, None);
        store.save(&"first".to_string()).await.unwrap();
        store.save(&"second".to_string()).await.unwrap();
        assert_eq!(store.load().await, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_concurrent_snapshot_saves() {
        let dir = TempDir::new().unwrap();
        let store: JsonSnapshotStore<Vec<u32>> =
            JsonSnapshotStore::new(dir.path().join("last.json"));
        let payload: Vec<u32> = (0..2_000).collect();

        for _ in 0..10 {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let store = store.clone();
                    let payload = payload.clone();
                    tokio::spawn(async move { store.save(&payload).await })
                })
                .collect();

            for handle in handles {
                handle.await.unwrap().unwrap();
            }
            assert_eq!(store.load().await, Some(payload.clone()));
        }

        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_separate_handles_do_not_share_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("last.json");
        let payload: Vec<u32> = (0..2_000).collect();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store: JsonSnapshotStore<Vec<u32>> = JsonSnapshotStore::new(&path);
                let payload = payload.clone();
                tokio::spawn(async move { store.save(&payload).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        let store: JsonSnapshotStore<Vec<u32>> = JsonSnapshotStore::new(&path);
        assert_eq!(store.load().await, Some(payload));
    }
}
