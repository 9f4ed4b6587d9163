//! MessagePack implementation of the policy repository.
//!
//! Both tables go into a single compact file via rmp_serde.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, error::Error, ports::PolicyRepository, solver::PolicyTables};

/// MessagePack-based policy repository.
///
/// `path` names the output file itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl PolicyRepository for MsgPackRepository {
    fn save(&self, tables: &PolicyTables, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create directory {parent:?}"),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, tables).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize policy tables to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<PolicyTables> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let tables = rmp_serde::decode::from_read(BufReader::new(file)).map_err(|e| {
            Error::SerializationContext {
                operation: "deserialize policy tables from MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{identifiers::HistoryKey, solver::ActionDistribution};

    #[test]
    fn test_msgpack_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("policies.msgpack");

        let mut tables = PolicyTables::new();
        tables
            .x
            .record(HistoryKey::from_moves(&[0, 4]), ActionDistribution::one_hot(8));

        let repo = MsgPackRepository::new();
        repo.save(&tables, &file_path).expect("Failed to save");
        let loaded = repo.load(&file_path).expect("Failed to load");

        assert_eq!(loaded, tables);
        assert!(loaded.o.is_empty());
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("out").join("policies").join("policies.msgpack");

        let mut tables = PolicyTables::new();
        tables
            .o
            .record(HistoryKey::from_moves(&[0]), ActionDistribution::one_hot(4));

        let repo = MsgPackRepository::new();
        repo.save(&tables, &file_path).expect("Failed to save");
        assert!(file_path.exists());
        assert_eq!(repo.load(&file_path).unwrap(), tables);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = MsgPackRepository::new();
        let result = repo.load(Path::new("/tmp/nonexistent_12345.msgpack"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_garbage_returns_serialization_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let file_path = temp_dir.path().join("garbage.msgpack");
        std::fs::write(&file_path, b"not messagepack").unwrap();

        let result = MsgPackRepository::new().load(&file_path);
        assert!(matches!(result, Err(Error::SerializationContext { .. })));
    }
}
