//! Ports (trait boundaries) for external dependencies.
//!
//! The solver itself performs no I/O. Persisting its policy tables is the job
//! of an adapter implementing the traits defined here.

pub mod repository;

pub use repository::PolicyRepository;
