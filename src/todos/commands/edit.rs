use crate::commands::{CmdMessage, CmdResult};
use crate::model::TodoItem;
use crate::store::{KeyValueBackend, PersistenceGateway};
use tracing::warn;

/// Overwrite the title of the stored todo with `id`.
///
/// Works directly against storage: the stored list is read fresh, the title is replaced and
/// the whole list is written back. Nothing is written when the store is empty or no todo
/// matches. The title is taken as given. Storage failures are logged and reported as a
/// warning message, never as an error.
pub fn run<B: KeyValueBackend>(
    gateway: &PersistenceGateway<B>,
    id: u64,
    title: &str,
) -> CmdResult {
    let mut result = CmdResult::default();

    let mut todos = match gateway.read_list() {
        Ok(Some(todos)) if !todos.is_empty() => todos,
        Ok(_) => {
            result.add_message(CmdMessage::info("No stored todos, nothing to edit"));
            return result;
        }
        Err(e) => {
            warn!("Could not read stored todos for edit: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Could not read stored todos: {}",
                e
            )));
            return result;
        }
    };

    let result = apply(&mut todos, id, title);
    if result.is_noop() {
        return result;
    }

    if let Err(e) = gateway.write_list(&todos) {
        warn!("Could not save edited todo {}: {}", id, e);
        let mut failed = CmdResult::default();
        failed.add_message(CmdMessage::warning(format!(
            "Could not save todo {}: {}",
            id, e
        )));
        return failed;
    }

    result
}

/// Overwrite the title of the todo with `id` in `todos`. Unknown ids are ignored.
pub fn apply(todos: &mut [TodoItem], id: u64, title: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
        result.add_message(CmdMessage::info(format!("No todo with id {}", id)));
        return result;
    };
    todo.title = title.to_string();

    result.add_message(CmdMessage::success(format!(
        "Todo updated ({}): {}",
        todo.id, todo.title
    )));
    result.with_affected_todos(vec![todo.clone()])
}
