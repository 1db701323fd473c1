use crate::model::{seed_todos, TodoItem};
use crate::store::{KeyValueBackend, PersistenceGateway};
use tracing::{debug, warn};

/// Produce the initial list: the stored one sorted newest first, or the seed list.
///
/// Never fails. A backend or parse error is logged and treated like an empty store.
pub fn run<B: KeyValueBackend>(gateway: &PersistenceGateway<B>) -> Vec<TodoItem> {
    let stored = match gateway.read_list() {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Could not read stored todos, using defaults: {}", e);
            None
        }
    };

    match stored {
        Some(mut todos) if !todos.is_empty() => {
            todos.sort_by(|a, b| b.id.cmp(&a.id));
            todos
        }
        _ => {
            debug!("no stored todos, seeding");
            seed_todos()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::STORAGE_KEY;

    fn gateway_with(raw: &str) -> PersistenceGateway<MemBackend> {
        PersistenceGateway::new(MemBackend::with_value(STORAGE_KEY, raw))
    }

    #[test]
    fn empty_store_loads_seed() {
        let gateway = PersistenceGateway::new(MemBackend::new());
        assert_eq!(run(&gateway), seed_todos());
    }

    #[test]
    fn empty_array_loads_seed() {
        assert_eq!(run(&gateway_with("[]")), seed_todos());
    }

    #[test]
    fn corrupt_blob_loads_seed() {
        assert_eq!(run(&gateway_with("this is not json")), seed_todos());
    }

    #[test]
    fn wrong_shape_loads_seed() {
        assert_eq!(run(&gateway_with(r#"{"id":1}"#)), seed_todos());
    }

    #[test]
    fn read_error_loads_seed() {
        let backend =
            MemBackend::with_value(STORAGE_KEY, r#"[{"id":9,"title":"x","completed":false}]"#);
        backend.set_simulate_read_error(true);
        assert_eq!(run(&PersistenceGateway::new(backend)), seed_todos());
    }

    #[test]
    fn stored_list_is_sorted_descending_by_id() {
        let raw = r#"[
            {"id":2,"title":"two","completed":false},
            {"id":7,"title":"seven","completed":true},
            {"id":4,"title":"four","completed":false}
        ]"#;
        let todos = run(&gateway_with(raw));
        let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 4, 2]);
        assert!(todos[0].completed);
        assert_eq!(todos[0].title, "seven");
    }
}
