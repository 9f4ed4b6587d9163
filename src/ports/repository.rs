//! Repository port for policy-table persistence.

use std::path::Path;

use crate::{Result, solver::PolicyTables};

/// Port for persisting and loading solved policy tables.
///
/// The meaning of `path` is up to the adapter: a directory holding one file
/// per player, a single file, or an opaque in-memory key.
///
/// # Examples
///
/// ```no_run
/// use ttt_solver::ports::PolicyRepository;
/// use ttt_solver::solver::PolicyTables;
/// use std::path::Path;
///
/// fn persist<R: PolicyRepository>(
///     repo: &R,
///     tables: &PolicyTables,
///     path: &Path,
/// ) -> ttt_solver::Result<()> {
///     repo.save(tables, path)
/// }
/// ```
pub trait PolicyRepository {
    /// Save both policy tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written or serialization
    /// fails.
    fn save(&self, tables: &PolicyTables, path: &Path) -> Result<()>;

    /// Load both policy tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or its contents cannot be
    /// decoded.
    fn load(&self, path: &Path) -> Result<PolicyTables>;
}
