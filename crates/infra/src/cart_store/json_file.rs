use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shopfront_catalog::{CartStore, CartStoreError};
use shopfront_core::ProductId;

/// Cart persisted as a JSON array of product ids (e.g. `[7,7,3]`).
///
/// A missing file is an empty cart. The parent directory is created on the
/// first write.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, err: std::io::Error) -> CartStoreError {
        CartStoreError::Unavailable(format!("{}: {err}", self.path.display()))
    }
}

impl CartStore for JsonFileCartStore {
    fn read(&self) -> Result<Vec<ProductId>, CartStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.unavailable(err)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw)
            .map_err(|e| CartStoreError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn write(&self, items: &[ProductId]) -> Result<(), CartStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let json = serde_json::to_string(items)
            .map_err(|e| CartStoreError::Unavailable(format!("failed to encode cart: {e}")))?;
        std::fs::write(&self.path, json).map_err(|e| self.unavailable(e))
    }
}
