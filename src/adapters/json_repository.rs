//! JSON implementation of the policy repository.
//!
//! Writes one file per player into a directory: `policy_x.json` and
//! `policy_o.json`. Each file is an object keyed by move-digit history whose
//! values map the cell digits `"0"`..`"8"` to 0 or 1.
//!
//! Both tables are first written to `.tmp` siblings and only renamed into
//! place once both writes succeed, so a failed save leaves any earlier pair
//! untouched.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Result,
    error::Error,
    ports::PolicyRepository,
    solver::{PolicyTable, PolicyTables},
};

/// File holding the first player's table
pub const POLICY_X_FILE: &str = "policy_x.json";
/// File holding the second player's table
pub const POLICY_O_FILE: &str = "policy_o.json";

const TEMP_SUFFIX: &str = ".tmp";

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Directory-of-JSON-files policy repository.
///
/// # Examples
///
/// ```no_run
/// use ttt_solver::adapters::JsonRepository;
/// use ttt_solver::ports::PolicyRepository;
/// use std::path::Path;
///
/// let solution = ttt_solver::solve()?;
/// JsonRepository::new().save(&solution.tables, Path::new("policies"))?;
/// # Ok::<(), ttt_solver::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository {
    pretty: bool,
}

impl JsonRepository {
    /// Create a repository writing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a repository writing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn write_table<T: Serialize>(&self, value: &T, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    fn read_table<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        let value = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("read {}", path.display());
        Ok(value)
    }
}

impl PolicyRepository for JsonRepository {
    fn save(&self, tables: &PolicyTables, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|source| Error::Io {
            operation: format!("create directory {path:?}"),
            source,
        })?;

        let targets = [path.join(POLICY_X_FILE), path.join(POLICY_O_FILE)];
        let staged = [temp_path(&targets[0]), temp_path(&targets[1])];

        let written = self
            .write_table(&tables.x, &staged[0])
            .and_then(|()| self.write_table(&tables.o, &staged[1]));
        if let Err(e) = written {
            for tmp in &staged {
                let _ = fs::remove_file(tmp);
            }
            return Err(e);
        }

        for (tmp, target) in staged.iter().zip(&targets) {
            fs::rename(tmp, target).map_err(|source| Error::Io {
                operation: format!("rename {tmp:?} to {target:?}"),
                source,
            })?;
        }
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<PolicyTables> {
        let x: PolicyTable = Self::read_table(&path.join(POLICY_X_FILE))?;
        let o: PolicyTable = Self::read_table(&path.join(POLICY_O_FILE))?;
        Ok(PolicyTables { x, o })
    }
}
