use crate::domain::{format_timestamp, Fields, List, Task};

/// An entity that can be stored as one row of a comma-separated file
pub trait Record: Sized {
    /// Column names, in the order `to_row` emits them
    const HEADERS: &'static [&'static str];

    fn id(&self) -> usize;

    fn from_fields(fields: &Fields) -> Self;

    fn to_row(&self) -> Vec<String>;
}

impl Record for Task {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "list_id",
        "name",
        "completed_at",
        "created_at",
        "modified_at",
    ];

    fn id(&self) -> usize {
        self.id
    }

    fn from_fields(fields: &Fields) -> Self {
        Task::from_fields(fields)
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.list_id.to_string(),
            self.name.clone(),
            self.completed_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
            format_timestamp(&self.created_at),
            format_timestamp(&self.modified_at),
        ]
    }
}

impl Record for List {
    const HEADERS: &'static [&'static str] = &["id", "name", "created_at", "modified_at"];

    fn id(&self) -> usize {
        self.id
    }

    fn from_fields(fields: &Fields) -> Self {
        List::from_fields(fields)
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            format_timestamp(&self.created_at),
            format_timestamp(&self.modified_at),
        ]
    }
}
