use crate::commands::{CmdMessage, CmdResult};
use crate::model::{next_id, TodoItem};

/// Insert a new todo at the front of `todos`.
///
/// Blank titles are ignored, and so is an add once the highest id is `u64::MAX`. The title
/// is stored as typed, surrounding whitespace included.
pub fn run(todos: &mut Vec<TodoItem>, title: &str) -> CmdResult {
    let mut result = CmdResult::default();

    if title.trim().is_empty() {
        return result;
    }

    let Some(id) = next_id(todos) else {
        result.add_message(CmdMessage::info("No ids left, todo not added"));
        return result;
    };

    let todo = TodoItem::new(id, title);
    todos.insert(0, todo.clone());

    result.add_message(CmdMessage::success(format!(
        "Todo added ({}): {}",
        todo.id, todo.title
    )));
    result.affected_todos.push(todo);
    result
}
