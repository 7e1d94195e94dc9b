use chrono::Utc;
use log::error;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::twins::types::{DigitalTwin, TwinCreate, TwinPage, TwinUpdate};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Twin not found: {0}")]
    NotFound(String),
}

/// File-backed twin store: one pretty-printed JSON document per twin.
pub struct Storage {
    base: PathBuf,
}

impl Storage {
    pub fn new(base: PathBuf) -> Self {
        Storage { base }
    }

    /// Ids are reduced to `[A-Za-z0-9_-]` so they cannot escape the store directory.
    fn twin_path(&self, id: &str) -> PathBuf {
        let safe: String = id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        self.base.join(format!("{}.json", safe))
    }

    fn load(path: &Path) -> Result<DigitalTwin, StorageError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, twin: &DigitalTwin) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        let content = serde_json::to_string_pretty(twin)?;
        std::fs::write(self.twin_path(&twin.id), content)?;
        Ok(())
    }

    pub fn create(&self, payload: TwinCreate) -> Result<DigitalTwin, StorageError> {
        let now = Utc::now();
        let twin = DigitalTwin {
            id: uuid::Uuid::new_v4().to_string(),
            name: payload.name,
            vehicle: payload.vehicle,
            created_at: now,
            updated_at: now,
        };
        self.save(&twin)?;
        Ok(twin)
    }

    pub fn get(&self, id: &str) -> Result<DigitalTwin, StorageError> {
        let path = self.twin_path(id);

        if !path.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }

        Self::load(&path)
    }

    pub fn list(&self, offset: usize, limit: usize) -> Result<TwinPage, StorageError> {
        if !self.base.exists() {
            return Ok(TwinPage {
                items: Vec::new(),
                total: 0,
                offset,
                limit,
            });
        }

        let mut files = Vec::new();
        for entry in self.base.read_dir()? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();

        let total = files.len();
        let mut items = Vec::new();
        for path in files.iter().skip(offset).take(limit) {
            match Self::load(path) {
                Ok(twin) => items.push(twin),
                Err(e) => {
                    error!("Failed to load twin file {}: {}", path.display(), e);
                    continue;
                }
            }
        }

        Ok(TwinPage {
            items,
            total,
            offset,
            limit,
        })
    }

    pub fn update(&self, id: &str, update: TwinUpdate) -> Result<DigitalTwin, StorageError> {
        let mut twin = self.get(id)?;

        if let Some(name) = update.name {
            twin.name = name;
        }
        if let Some(vehicle) = update.vehicle {
            twin.vehicle = vehicle;
        }
        twin.updated_at = Utc::now();

        self.save(&twin)?;
        Ok(twin)
    }

    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        let path = self.twin_path(id);

        if !path.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }

        std::fs::remove_file(path)?;
        Ok(())
    }
}
