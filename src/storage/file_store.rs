//! JSON file key-value store
//!
//! The whole map lives in one JSON object on disk
//! (`{"income": "...", "transactions": "..."}`) and is rewritten atomically
//! on every `set`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{BudgetError, BudgetResult};

/// Key-value store persisted to a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that is not a JSON object of strings is a storage error.
    pub fn open(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let path = path.into();
        let values = load_map(&path)?;
        Ok(Self { path, values })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> BudgetResult<()> {
        let previous = self.values.insert(key.to_string(), value);

        if let Err(e) = save_map(&self.path, &self.values) {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }

        Ok(())
    }
}

fn load_map(path: &Path) -> BudgetResult<BTreeMap<String, String>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => {
            return Err(BudgetError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&raw)
        .map_err(|e| BudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace the file with the serialized map. The bytes go to a sibling
/// `.tmp` file first, so a crash leaves either the old or the new map.
fn save_map(path: &Path, values: &BTreeMap<String, String>) -> BudgetResult<()> {
    let bytes = serde_json::to_vec_pretty(values)
        .map_err(|e| BudgetError::Storage(format!("Failed to encode storage: {}", e)))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            BudgetError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    let written = File::create(&tmp).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(BudgetError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
