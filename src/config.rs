use std::path::{Path, PathBuf};

/// Database used when no name is given on the command line
pub const DEFAULT_DATABASE: &str = "example_todo";

/// The pair of files backing one database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePaths {
    pub tasks: PathBuf,
    pub lists: PathBuf,
}

impl DatabasePaths {
    /// `<name>_tasks.csv` and `<name>_lists.csv`, next to each other
    pub fn from_name(name: &str) -> Self {
        Self {
            tasks: PathBuf::from(format!("{}_tasks.csv", name)),
            lists: PathBuf::from(format!("{}_lists.csv", name)),
        }
    }
}

/// Runtime configuration resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub paths: DatabasePaths,
    /// Where the log file goes (the database's directory)
    pub log_dir: PathBuf,
}

impl Config {
    pub fn new(name: Option<String>) -> Self {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let paths = DatabasePaths::from_name(&name);
        let log_dir = match Path::new(&name).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Self {
            name,
            paths,
            log_dir,
        }
    }
}
