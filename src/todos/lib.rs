//! # Todos Architecture
//!
//! Todos is a **UI-agnostic todo list library**. The `todos` binary is one client of it; the
//! list view and the detail view it drives could just as well be a mobile or desktop screen.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints lists and messages              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View State (api.rs, detail.rs, theme.rs)                   │
//! │  - TodoStore: the list view's in-memory list                │
//! │  - TodoDetail: the detail view's draft of one item          │
//! │  - ThemeState: the shared color scheme with subscribers     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure list operations: add, toggle, delete                │
//! │  - Storage round trips: load, edit                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueBackend trait: get/set of opaque strings         │
//! │  - PersistenceGateway: the "TodoApp" key + JSON codec       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The whole list is stored as one JSON array under a single key. Every mutation of the list
//! view rewrites the whole array. Storage failures never reach the caller: reads that fail fall
//! back to the built-in seed list, writes that fail are logged with `tracing` and dropped, and
//! the in-memory list stays authoritative until the next successful write.
//!
//! ## Two Views, One Key
//!
//! The list view ([`api::TodoStore`]) and the detail view ([`detail::TodoDetail`]) do not share
//! memory. The detail view re-reads the stored list, changes one title and writes the list back.
//! A list view that was opened before that edit still holds the old title and will write it
//! back on its next mutation: the last write wins. Call [`api::TodoStore::reload`] after a
//! detail save, or rename through [`api::TodoStore::rename`], to avoid losing the edit.
//!
//! ## Module Overview
//!
//! - [`api`]: `TodoStore`, the list view's facade
//! - [`commands`]: Business logic for each operation
//! - [`detail`]: Detail view state and `/todos/{id}` routes
//! - [`store`]: Storage abstraction, gateway and backends
//! - [`model`]: `TodoItem` and the seed list
//! - [`theme`]: Color schemes, palettes and the observable theme state
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod store;
pub mod theme;
