use crate::commands::{CmdMessage, CmdResult};
use crate::model::TodoItem;

/// Remove the todo with `id`, keeping the rest in order. Unknown ids are ignored.
pub fn run(todos: &mut Vec<TodoItem>, id: u64) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(position) = todos.iter().position(|t| t.id == id) else {
        result.add_message(CmdMessage::info(format!("No todo with id {}", id)));
        return result;
    };

    let removed = todos.remove(position);
    result.add_message(CmdMessage::success(format!(
        "Todo deleted ({}): {}",
        removed.id, removed.title
    )));
    result.affected_todos.push(removed);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TodoItem> {
        vec![
            TodoItem::new(4, "four"),
            TodoItem::new(3, "three"),
            TodoItem::new(2, "two"),
            TodoItem::new(1, "one"),
        ]
    }

    #[test]
    fn removes_exactly_one_and_keeps_order() {
        let mut todos = sample();
        let result = run(&mut todos, 3);

        let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 2, 1]);
        assert_eq!(result.affected_todos, vec![TodoItem::new(3, "three")]);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut todos = sample();
        let result = run(&mut todos, 99);

        assert!(result.is_noop());
        assert_eq!(todos, sample());
    }

    #[test]
    fn deleting_the_last_todo_leaves_an_empty_list() {
        let mut todos = vec![TodoItem::new(1, "only")];
        run(&mut todos, 1);
        assert!(todos.is_empty());
    }
}
