//! # Detail View
//!
//! The detail view edits one todo, addressed by the route `/todos/{id}`.
//!
//! It never looks at a list view's memory. Opening reads the stored list fresh, and saving
//! goes through [`commands::edit`], which reads the stored list again, replaces the title and
//! writes it back. See the crate docs for what that means for an open list view.

use crate::commands::{self, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::{clamp_title, TodoItem};
use crate::store::{KeyValueBackend, PersistenceGateway};
use tracing::warn;

const ROUTE_PREFIX: &str = "/todos/";

/// Route of the detail view for `id`.
pub fn route_for(id: u64) -> String {
    format!("{}{}", ROUTE_PREFIX, id)
}

/// Parse a `/todos/{id}` route. A single trailing slash is accepted.
pub fn parse_route(route: &str) -> Result<u64> {
    let trimmed = route.strip_suffix('/').unwrap_or(route);
    trimmed
        .strip_prefix(ROUTE_PREFIX)
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| TodoError::InvalidRoute(route.to_string()))
}

/// Resolve either a bare id (`"5"`) or a route (`"/todos/5"`).
pub fn resolve_target(target: &str) -> Result<u64> {
    if target.starts_with('/') {
        return parse_route(target);
    }
    target
        .parse()
        .map_err(|_| TodoError::InvalidRoute(target.to_string()))
}

/// Draft state of the detail view.
pub struct TodoDetail<B: KeyValueBackend> {
    gateway: PersistenceGateway<B>,
    id: u64,
    item: Option<TodoItem>,
    draft: String,
}

impl<B: KeyValueBackend> TodoDetail<B> {
    /// Fetch the todo with `id` from storage and start a draft of its title.
    ///
    /// A missing todo or an unreadable store gives an empty draft.
    pub fn open(gateway: PersistenceGateway<B>, id: u64) -> Self {
        let item = match gateway.read_list() {
            Ok(todos) => todos.unwrap_or_default().into_iter().find(|t| t.id == id),
            Err(e) => {
                warn!("Could not read stored todos for todo {}: {}", id, e);
                None
            }
        };
        let draft = item.as_ref().map(|t| t.title.clone()).unwrap_or_default();
        Self {
            gateway,
            id,
            item,
            draft,
        }
    }

    /// Open the detail view for a `/todos/{id}` route.
    pub fn open_route(gateway: PersistenceGateway<B>, route: &str) -> Result<Self> {
        let id = parse_route(route)?;
        Ok(Self::open(gateway, id))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The todo as it was stored when the view opened.
    pub fn item(&self) -> Option<&TodoItem> {
        self.item.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.draft
    }

    /// Replace the draft title, cut to the maximum title length.
    pub fn set_title(&mut self, title: &str) {
        self.draft = clamp_title(title);
    }

    pub fn can_save(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Write the draft title to storage.
    pub fn save(self) -> Result<CmdResult> {
        if !self.can_save() {
            return Err(TodoError::Api("Title cannot be empty".into()));
        }
        Ok(commands::edit::run(&self.gateway, self.id, &self.draft))
    }

    /// Leave without writing.
    pub fn cancel(self) {}
}
