//! Preference persistence seam and ready-made stores

use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Result;

/// Key/value preference storage scoped to the coordinator's namespace
///
/// The embedder decides where values live (host preference system, file,
/// nothing). Writes carry no error contract toward the caller: a store that
/// can fail should report the failure itself and keep serving reads.
pub trait PreferenceStore {
    /// Read a stored value
    fn get_value(&self, key: &str) -> Option<Value>;

    /// Store a value
    fn set_value(&self, key: &str, value: Value);
}

/// Volatile in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
    }
}

/// Write-through store backed by one JSON file
///
/// The whole file is one JSON object. A missing file reads as empty; every
/// write rewrites the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RefCell<HashMap<String, Value>>,
}

impl JsonFileStore {
    /// Open a store, loading existing values if the file exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            values: RefCell::new(values),
        })
    }

    fn write_back(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&*self.values.borrow())?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn set_value(&self, key: &str, value: Value) {
        self.values.borrow_mut().insert(key.to_string(), value);
        if let Err(e) = self.write_back() {
            log::warn!(
                "failed to persist preferences to {}: {e}",
                self.path.display()
            );
        }
    }
}
