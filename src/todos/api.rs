//! # API Facade
//!
//! [`TodoStore`] is the list view's model: it owns the in-memory list, dispatches to the
//! command layer and writes the whole list back after every mutation.
//!
//! ## Persistence
//!
//! The in-memory list is the source of truth while the store is alive. A mutation updates it
//! first and then rewrites storage. If that write fails the failure is logged and dropped; the
//! next successful write catches storage up.
//!
//! ## Generic Over KeyValueBackend
//!
//! `TodoStore<B: KeyValueBackend>` is generic over the storage backend:
//! - Production: `TodoStore<FsBackend>`
//! - Testing: `TodoStore<MemBackend>` or `TodoStore<&MemBackend>` when a test needs a second
//!   view of the same storage

use crate::commands;
use crate::model::TodoItem;
use crate::store::{KeyValueBackend, PersistenceGateway};
use tracing::warn;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The list view's todo store.
pub struct TodoStore<B: KeyValueBackend> {
    gateway: PersistenceGateway<B>,
    todos: Vec<TodoItem>,
}

impl<B: KeyValueBackend> TodoStore<B> {
    /// Load the list from `gateway` (or the seed list) and write it back.
    pub fn open(gateway: PersistenceGateway<B>) -> Self {
        let todos = commands::load::run(&gateway);
        let store = Self { gateway, todos };
        store.persist();
        store
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn gateway(&self) -> &PersistenceGateway<B> {
        &self.gateway
    }

    pub fn list(&self) -> CmdResult {
        CmdResult::default().with_listed_todos(self.todos.clone())
    }

    pub fn add(&mut self, title: &str) -> CmdResult {
        let result = commands::add::run(&mut self.todos, title);
        if !result.is_noop() {
            self.persist();
        }
        result
    }

    pub fn toggle(&mut self, id: u64) -> CmdResult {
        let result = commands::toggle::run(&mut self.todos, id);
        self.persist();
        result
    }

    pub fn delete(&mut self, id: u64) -> CmdResult {
        let result = commands::delete::run(&mut self.todos, id);
        self.persist();
        result
    }

    /// Edit a title the way the detail view does: straight against storage.
    ///
    /// The in-memory list is NOT updated. Until [`TodoStore::reload`] is called it still holds
    /// the old title, and the next add/toggle/delete writes that old title back.
    pub fn edit(&self, id: u64, title: &str) -> CmdResult {
        commands::edit::run(&self.gateway, id, title)
    }

    /// Edit a title through the in-memory list, then write the list back.
    pub fn rename(&mut self, id: u64, title: &str) -> CmdResult {
        let result = commands::edit::apply(&mut self.todos, id, title);
        if !result.is_noop() {
            self.persist();
        }
        result
    }

    /// Drop the in-memory list and load it again from storage.
    pub fn reload(&mut self) {
        self.todos = commands::load::run(&self.gateway);
    }

    fn persist(&self) {
        if let Err(e) = self.gateway.write_list(&self.todos) {
            warn!("Could not save todos: {}", e);
        }
    }
}
