//! JSON snapshot stores.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load/save port for a single persisted value.
pub trait SnapshotStore<T> {
    /// Read the persisted snapshot; `None` when nothing was saved yet.
    fn load(&self) -> anyhow::Result<Option<T>>;

    /// Persist the value, replacing any previous snapshot.
    fn save(&self, value: &T) -> anyhow::Result<()>;
}

impl<T, S: SnapshotStore<T>> SnapshotStore<T> for &S {
    fn load(&self) -> anyhow::Result<Option<T>> {
        (**self).load()
    }

    fn save(&self, value: &T) -> anyhow::Result<()> {
        (**self).save(value)
    }
}

/// File-backed store: one JSON document per snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> SnapshotStore<T> for JsonFileStore<T> {
    fn load(&self) -> anyhow::Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read snapshot at {:?}", self.path))?;
        let value = serde_json::from_str(&data)
            .with_context(|| format!("corrupt snapshot at {:?}", self.path))?;
        Ok(Some(value))
    }

    fn save(&self, value: &T) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create snapshot directory {parent:?}"))?;
        }
        let data = serde_json::to_string_pretty(value).context("failed to encode snapshot")?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("failed to write snapshot at {:?}", self.path))?;
        Ok(())
    }
}

/// In-memory store for tests. Holds the encoded JSON so the serialization
/// path is exercised the same way the file store exercises it.
#[derive(Debug, Default)]
pub struct InMemoryStore<T> {
    slot: Mutex<Option<String>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            _marker: PhantomData,
        }
    }

    /// Whether anything has been saved yet.
    pub fn is_persisted(&self) -> bool {
        self.slot.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl<T: Serialize + DeserializeOwned> SnapshotStore<T> for InMemoryStore<T> {
    fn load(&self) -> anyhow::Result<Option<T>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot slot poisoned"))?;
        match slot.as_deref() {
            Some(data) => Ok(Some(
                serde_json::from_str(data).context("corrupt in-memory snapshot")?,
            )),
            None => Ok(None),
        }
    }

    fn save(&self, value: &T) -> anyhow::Result<()> {
        let data = serde_json::to_string(value).context("failed to encode snapshot")?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot slot poisoned"))?;
        *slot = Some(data);
        Ok(())
    }
}
