use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Longest title the detail view accepts, in characters.
pub const MAX_TITLE_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Built-in list shown on first launch, newest first.
static SEED_TODOS: Lazy<Vec<TodoItem>> = Lazy::new(|| {
    vec![
        seed(5, "Plan the weekend trip", false),
        seed(4, "Call the dentist", false),
        seed(3, "Water the plants", false),
        seed(2, "Pay the electricity bill", true),
        seed(1, "Buy groceries", true),
    ]
});

fn seed(id: u64, title: &str, completed: bool) -> TodoItem {
    TodoItem {
        id,
        title: title.to_string(),
        completed,
    }
}

pub fn seed_todos() -> Vec<TodoItem> {
    SEED_TODOS.clone()
}

/// Next id to allocate: one past the highest id, or 1 for an empty list.
///
/// The list is kept newest first, so that is the first item's id plus one. Returns `None`
/// once the highest id is `u64::MAX` and no larger id exists.
pub fn next_id(todos: &[TodoItem]) -> Option<u64> {
    match todos.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Cuts `title` down to [`MAX_TITLE_LEN`] characters.
pub fn clamp_title(title: &str) -> String {
    title.chars().take(MAX_TITLE_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_not_completed() {
        let item = TodoItem::new(7, "Walk the dog");
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Walk the dog");
        assert!(!item.completed);
    }

    #[test]
    fn seed_is_sorted_newest_first() {
        let seeds = seed_todos();
        assert_eq!(seeds.len(), 5);
        let ids: Vec<u64> = seeds.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn next_id_on_empty_list_is_one() {
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn next_id_follows_first_item() {
        let todos = vec![TodoItem::new(5, "a"), TodoItem::new(3, "b")];
        assert_eq!(next_id(&todos), Some(6));
    }

    #[test]
    fn next_id_uses_the_highest_id() {
        let todos = vec![TodoItem::new(2, "a"), TodoItem::new(9, "b")];
        assert_eq!(next_id(&todos), Some(10));
    }

    #[test]
    fn next_id_is_none_past_the_last_id() {
        let todos = vec![TodoItem::new(1, "a"), TodoItem::new(u64::MAX, "b")];
        assert_eq!(next_id(&todos), None);
    }

    #[test]
    fn clamp_title_counts_characters() {
        let long = "é".repeat(40);
        assert_eq!(clamp_title(&long).chars().count(), MAX_TITLE_LEN);
        assert_eq!(clamp_title("short"), "short");
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let item = TodoItem::new(1, "Buy milk");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"title":"Buy milk","completed":false}"#);
    }
}
