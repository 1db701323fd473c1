use crate::commands::{CmdMessage, CmdResult};
use crate::model::TodoItem;

/// Flip the completed flag of the todo with `id`. Unknown ids leave the list untouched.
pub fn run(todos: &mut [TodoItem], id: u64) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
        result.add_message(CmdMessage::info(format!("No todo with id {}", id)));
        return result;
    };

    todo.completed = !todo.completed;
    let state = if todo.completed { "done" } else { "open" };
    result.add_message(CmdMessage::success(format!(
        "Todo marked {} ({}): {}",
        state, todo.id, todo.title
    )));
    result.affected_todos.push(todo.clone());
    result
}
