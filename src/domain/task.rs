use super::fields::Fields;
use chrono::{DateTime, Local};
use std::fmt;

/// A single entry on a list
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Slot id, stable once assigned
    pub id: usize,
    /// Id of the owning list
    pub list_id: usize,
    pub name: String,
    pub created_at: DateTime<Local>,
    /// Refreshed whenever completion toggles
    pub modified_at: DateTime<Local>,
    /// When the task was completed (None while open)
    pub completed_at: Option<DateTime<Local>>,
    /// Menu selection (not persisted)
    pub selected: bool,
}

impl Task {
    pub fn new(id: usize, list_id: usize, name: String) -> Self {
        let now = Local::now();
        Self {
            id,
            list_id,
            name,
            created_at: now,
            modified_at: now,
            completed_at: None,
            selected: false,
        }
    }

    /// Build a task from a persisted row. Missing timestamps default to now,
    /// malformed ids coerce to 0.
    pub fn from_fields(fields: &Fields) -> Self {
        let now = Local::now();
        Self {
            id: fields.id("id"),
            list_id: fields.id("list_id"),
            name: fields.text("name"),
            created_at: fields.timestamp("created_at").unwrap_or(now),
            modified_at: fields.timestamp("modified_at").unwrap_or(now),
            completed_at: fields.timestamp("completed_at"),
            selected: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Flip between open and completed
    pub fn toggle_complete(&mut self) {
        let now = Local::now();
        self.completed_at = match self.completed_at {
            Some(_) => None,
            None => Some(now),
        };
        self.modified_at = now;
    }

    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
