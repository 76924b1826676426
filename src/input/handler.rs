use crate::domain::coerce_id;

/// A command typed at the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    Quit,
    Add,
    Select,
    Delete,
    /// Anything else is read as a list id (0 when not numeric)
    Open(usize),
}

impl MainCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" => Self::Quit,
            "add" | "a" => Self::Add,
            "select" | "s" => Self::Select,
            "delete" | "d" => Self::Delete,
            other => Self::Open(coerce_id(other)),
        }
    }
}

/// A command typed inside a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    Back,
    Add,
    Select,
    Complete,
    Delete,
    Unknown,
}

impl ListCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "back" | "b" => Self::Back,
            "add" | "a" => Self::Add,
            "select" | "s" => Self::Select,
            "completed" | "c" => Self::Complete,
            "delete" | "d" => Self::Delete,
            _ => Self::Unknown,
        }
    }
}
