use super::backend::KeyValueBackend;
use crate::error::{Result, TodoError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory key-value backend for testing.
///
/// Uses `RefCell` for interior mutability since todos is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Raw value under `key`, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(TodoError::Store("Simulated read error".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.get("TodoApp").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let backend = MemBackend::new();
        backend.set("TodoApp", "[]").unwrap();
        assert_eq!(backend.get("TodoApp").unwrap(), Some("[]".to_string()));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_old_value() {
        let backend = MemBackend::with_value("TodoApp", "old");
        backend.set_simulate_write_error(true);
        assert!(backend.set("TodoApp", "new").is_err());
        assert_eq!(backend.raw("TodoApp"), Some("old".to_string()));
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn simulated_read_error() {
        let backend = MemBackend::with_value("TodoApp", "[]");
        backend.set_simulate_read_error(true);
        assert!(matches!(backend.get("TodoApp"), Err(TodoError::Store(_))));
    }

    #[test]
    fn shared_reference_is_a_backend() {
        let backend = MemBackend::new();
        let by_ref = &backend;
        by_ref.set("k", "v").unwrap();
        assert_eq!(backend.raw("k"), Some("v".to_string()));
    }
}
