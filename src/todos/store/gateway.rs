use super::backend::KeyValueBackend;
use super::STORAGE_KEY;
use crate::error::{Result, TodoError};
use crate::model::TodoItem;
use tracing::debug;

/// The todo list's view of a key-value backend.
///
/// Reads and writes the whole list as one JSON array under [`STORAGE_KEY`].
pub struct PersistenceGateway<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> PersistenceGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the stored list.
    ///
    /// Returns Ok(None) when nothing is stored, the stored value is blank, or it is JSON `null`.
    /// Returns Err when the backend fails or the value does not parse.
    pub fn read_list(&self) -> Result<Option<Vec<TodoItem>>> {
        let raw = match self.backend.get(STORAGE_KEY)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };
        let todos = decode_list(&raw)?;
        debug!(
            count = todos.as_ref().map_or(0, Vec::len),
            "read todo list"
        );
        Ok(todos)
    }

    /// Replace the stored list with `todos`.
    pub fn write_list(&self, todos: &[TodoItem]) -> Result<()> {
        let raw = encode_list(todos)?;
        self.backend.set(STORAGE_KEY, &raw)?;
        debug!(count = todos.len(), "wrote todo list");
        Ok(())
    }
}

pub fn encode_list(todos: &[TodoItem]) -> Result<String> {
    serde_json::to_string(todos).map_err(TodoError::Serialization)
}

pub fn decode_list(raw: &str) -> Result<Option<Vec<TodoItem>>> {
    serde_json::from_str(raw).map_err(TodoError::Serialization)
}
