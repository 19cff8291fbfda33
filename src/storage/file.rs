use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CartBackend, StorageError};
use crate::cart::CartItem;

/// On-disk layout: `{ "items": [ {id, name, price, quantity}, ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CartDocument {
    #[serde(default)]
    items: Vec<CartItem>,
}

/// JSON file store.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place,
/// so a crash mid-write leaves the previous snapshot intact.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl CartBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<Vec<CartItem>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        let document: CartDocument = serde_json::from_str(&content)?;
        Ok(document.items)
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let document = CartDocument {
            items: items.to_vec(),
        };
        let body = serde_json::to_string_pretty(&document)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn line(id: &str, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("Item {id}"),
            price: 25_000,
            quantity,
        }
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("cart.json"));
        assert!(backend.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_creates_parent_dirs_and_reloads() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("nested").join("cart.json"));
        backend.save(&[line("a", 2), line("b", 1)]).await.unwrap();

        let loaded = backend.load().await.unwrap();
        assert_eq!(loaded, vec![line("a", 2), line("b", 1)]);
        assert!(!backend.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn clear_removes_file_and_tolerates_missing() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("cart.json"));
        backend.save(&[line("a", 1)]).await.unwrap();
        backend.clear().await.unwrap();
        assert!(!backend.path().exists());
        backend.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_is_serialize_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{ not json").unwrap();
        let backend = FileBackend::new(path);
        assert!(matches!(
            backend.load().await,
            Err(StorageError::Serialize(_))
        ));
    }
}
