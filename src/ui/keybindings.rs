use crate::ui::styles::hint_style;
use std::io::{self, Write};

/// Which help text to show under the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    MainMenu,
    ListMenu,
    AddList,
    SelectList,
    AddTask,
    SelectTask,
}

const MAIN_MENU_COMMANDS: &[&str] = &[
    "a => add list",
    "s => toggle-select list",
    "d => delete selected lists",
    "<number> => open list",
    "q => quit",
];

const LIST_MENU_COMMANDS: &[&str] = &[
    "a => add task",
    "s => toggle-select task",
    "c => complete selected tasks",
    "d => delete selected tasks",
    "b => back to main menu",
];

const NO_ENTRIES: &[&str] = &[];

impl Hint {
    /// Heading line and the entries that follow it
    pub fn text(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Hint::MainMenu => ("Commands:", MAIN_MENU_COMMANDS),
            Hint::ListMenu => ("Commands:", LIST_MENU_COMMANDS),
            Hint::AddList => ("Enter name for your list:", NO_ENTRIES),
            Hint::SelectList => ("Enter a list number:", NO_ENTRIES),
            Hint::AddTask => ("Enter a name for your task:", NO_ENTRIES),
            Hint::SelectTask => ("Enter a task number:", NO_ENTRIES),
        }
    }
}

/// Render the help block for a menu or prompt
pub fn render_hint<W: Write>(out: &mut W, hint: Hint) -> io::Result<()> {
    let (heading, entries) = hint.text();
    writeln!(out)?;
    writeln!(out, "{}", hint_style().apply(heading))?;
    if !entries.is_empty() {
        writeln!(out, "{}", hint_style().apply(entries.join(", ")))?;
    }
    Ok(())
}
