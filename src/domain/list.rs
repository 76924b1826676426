use super::fields::Fields;
use chrono::{DateTime, Local};
use std::fmt;

/// A named collection of tasks
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub id: usize,
    pub name: String,
    pub created_at: DateTime<Local>,
    pub modified_at: DateTime<Local>,
    /// Menu selection (not persisted)
    pub selected: bool,
}

impl List {
    pub fn new(id: usize, name: String) -> Self {
        let now = Local::now();
        Self {
            id,
            name,
            created_at: now,
            modified_at: now,
            selected: false,
        }
    }

    pub fn from_fields(fields: &Fields) -> Self {
        let now = Local::now();
        Self {
            id: fields.id("id"),
            name: fields.text("name"),
            created_at: fields.timestamp("created_at").unwrap_or(now),
            modified_at: fields.timestamp("modified_at").unwrap_or(now),
            selected: false,
        }
    }

    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_new() {
        let list = List::new(3, "Home".to_string());
        assert_eq!(list.id, 3);
        assert_eq!(list.name, "Home");
        assert!(!list.selected);
    }

    #[test]
    fn test_list_toggle_selected() {
        let mut list = List::new(1, "Home".to_string());
        list.toggle_selected();
        assert!(list.selected);
        list.toggle_selected();
        assert!(!list.selected);
    }

    #[test]
    fn test_list_from_fields_ignores_unknown_columns() {
        let headers: Vec<String> = ["id", "name", "colour"].iter().map(|s| s.to_string()).collect();
        let row: Vec<String> = ["2", "Work", "blue"].iter().map(|s| s.to_string()).collect();

        let list = List::from_fields(&Fields::from_row(&headers, &row));
        assert_eq!(list.id, 2);
        assert_eq!(list.name, "Work");
    }
}
