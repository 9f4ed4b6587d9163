//! Adapters implementing domain ports.
//!
//! These are the external collaborators that persist a finished solve;
//! the solver never calls them itself.

pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::{JsonRepository, POLICY_O_FILE, POLICY_X_FILE};
pub use msgpack_repository::MsgPackRepository;
