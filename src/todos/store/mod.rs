//! # Storage Layer
//!
//! The todo list lives in a key-value store as one serialized blob. This module splits that
//! into two parts:
//!
//! - [`backend::KeyValueBackend`]: the raw store. It knows nothing about todos, only how to
//!   get and set strings by key.
//! - [`gateway::PersistenceGateway`]: binds a backend to the fixed [`STORAGE_KEY`] and owns the
//!   JSON encoding of the list.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production storage
//!   - One file per key (`TodoApp.json`) in the data directory
//!   - Atomic writes (temp file, then rename)
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures and hold arbitrary raw values
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── TodoApp.json   # [{"id":3,"title":"...","completed":false}, ...]
//! └── config.json    # TodoConfig
//! ```

pub mod backend;
pub mod fs_backend;
pub mod gateway;
pub mod mem_backend;

pub use backend::KeyValueBackend;
pub use gateway::PersistenceGateway;

/// The single key the todo list is stored under.
pub const STORAGE_KEY: &str = "TodoApp";
