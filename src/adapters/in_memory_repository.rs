//! In-memory policy repository for testing.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{Result, error::Error, ports::PolicyRepository, solver::PolicyTables};

/// In-memory repository keyed by path.
///
/// Tables are stored encoded with rmp_serde so that a load always returns an
/// independent copy. All clones share the same underlying storage.
///
/// # Examples
///
/// ```
/// use ttt_solver::adapters::InMemoryRepository;
/// use ttt_solver::ports::PolicyRepository;
/// use ttt_solver::solver::PolicyTables;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&PolicyTables::new(), Path::new("empty"))?;
/// assert!(repo.load(Path::new("empty"))?.x.is_empty());
/// # Ok::<(), ttt_solver::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of saved entries
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if tables exist at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&path.to_string_lossy().to_string())
    }

    pub fn clear(&self) {
        self.storage().clear();
    }
}

impl PolicyRepository for InMemoryRepository {
    fn save(&self, tables: &PolicyTables, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(tables).map_err(|e| Error::SerializationContext {
            operation: "serialize policy tables for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<PolicyTables> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load policy tables from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize policy tables from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}
