//! # Command Layer
//!
//! The business logic of todos. Each operation lives in its own submodule as a plain function
//! over the domain types.
//!
//! ## Two Kinds of Commands
//!
//! - **List commands** (`add`, `toggle`, `delete`): take the in-memory list by `&mut` and
//!   change it. They never touch storage; [`crate::api::TodoStore`] writes the list back.
//! - **Storage commands** (`load`, `edit`): take a [`PersistenceGateway`] and do their own
//!   round trip. `load` never fails and falls back to the seed list. `edit` re-reads the
//!   stored list, so it sees writes made by other views.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O on a terminal**: no stdout, stderr or exit codes
//! - **Raise on missing ids**: an unknown id is a no-op with an info message
//! - **Raise on storage failures**: those are logged and reported as warning messages
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_todos`: todos that were created or modified (empty for a no-op)
//! - `listed_todos`: todos to display
//! - `messages`: messages with a level (info, success, warning)
//!
//! [`PersistenceGateway`]: crate::store::PersistenceGateway

use crate::model::TodoItem;

pub mod add;
pub mod delete;
pub mod edit;
pub mod load;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command: the items it touched plus messages for the user.
///
/// An empty `affected_todos` means the command was a no-op.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<TodoItem>,
    pub listed_todos: Vec<TodoItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<TodoItem>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<TodoItem>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn is_noop(&self) -> bool {
        self.affected_todos.is_empty()
    }
}
