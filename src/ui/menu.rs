use crate::domain::{List, Task};
use crate::ui::styles::{
    completed_selected_style, completed_style, error_style, hint_style, list_heading_style,
    lists_heading_style, selected_style, title_style,
};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Clear the terminal and move the cursor home
pub fn reset_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

fn render_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", title_style().apply("ToDo List"))?;
    writeln!(out)
}

/// Main menu: every live list with its id
pub fn render_main_menu<'a, W, I>(out: &mut W, lists: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a List>,
{
    reset_screen(out)?;
    render_header(out)?;
    writeln!(out, "{}", lists_heading_style().apply("All Lists:"))?;
    writeln!(out)?;

    let mut shown = 0;
    for list in lists {
        let line = format!("{}. {}", list.id, list.name);
        if list.selected {
            writeln!(out, "{}", selected_style().apply(line))?;
        } else {
            writeln!(out, "{}", line)?;
        }
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "It looks like you don't have any lists yet!")?;
    }
    Ok(())
}

/// List view: the list's tasks numbered from 1
pub fn render_list_menu<W: Write>(out: &mut W, list: &List, tasks: &[&Task]) -> io::Result<()> {
    reset_screen(out)?;
    render_header(out)?;
    let heading = format!("List: {}:", list.name);
    writeln!(out, "{}", list_heading_style().apply(heading))?;
    writeln!(out)?;

    if tasks.is_empty() {
        writeln!(out, "It looks like you don't have anything on your list yet!")?;
    }
    for (index, task) in tasks.iter().enumerate() {
        let line = task_line(index + 1, task);
        match (task.is_completed(), task.selected) {
            (true, true) => writeln!(out, "{}", completed_selected_style().apply(line))?,
            (true, false) => writeln!(out, "{}", completed_style().apply(line))?,
            (false, true) => writeln!(out, "{}", selected_style().apply(line))?,
            (false, false) => writeln!(out, "{}", line)?,
        }
    }
    Ok(())
}

/// Plain text of a task row, e.g. "1. [X] Buy milk". Single-digit positions
/// get an extra space so the checkboxes line up with "10.".
pub fn task_line(position: usize, task: &Task) -> String {
    let pad = if position < 10 { " " } else { "" };
    let mark = if task.is_completed() { 'X' } else { ' ' };
    format!("{}.{}[{}] {}", position, pad, mark, task.name)
}

/// Error or notice shown above the command help
pub fn render_status<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", error_style().apply(message))
}

/// Input prompt, e.g. "add> "
pub fn render_prompt<W: Write>(out: &mut W, command: Option<&str>) -> io::Result<()> {
    write!(out, "{}", hint_style().apply(format!("{}> ", command.unwrap_or_default())))?;
    out.flush()
}
