use crate::domain::coerce_id;
use crate::input::{ListCommand, MainCommand};
use crate::store::Store;
use crate::ui::{self, Hint};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Stay in the current menu
    Stay,
    /// Leave a list and go back to the main menu
    Leave,
    /// End the session (quit command or end of input)
    Quit,
}

/// Which menu is drawn behind a prompt
#[derive(Debug, Clone, Copy)]
enum Screen {
    Main,
    List(usize),
}

/// Interactive menu session over a line-based input and a terminal output
pub struct App<R, W> {
    store: Store,
    input: R,
    output: W,
    /// Message shown once on the next render
    status: Option<String>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            status: None,
        }
    }

    #[cfg(test)]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Run the main menu until the user quits or input ends. Both files are
    /// rewritten after every command.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(line) = self.ask(Screen::Main, Hint::MainMenu, None)? else {
                break;
            };
            let flow = self.evaluate_main(&line)?;
            self.save();
            if flow == Flow::Quit {
                break;
            }
        }

        self.store.unselect_all();
        ui::reset_screen(&mut self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn evaluate_main(&mut self, line: &str) -> Result<Flow> {
        match MainCommand::parse(line) {
            MainCommand::Quit => Ok(Flow::Quit),
            MainCommand::Add => self.add_list(),
            MainCommand::Select => self.select_list(),
            MainCommand::Delete => {
                if self.store.delete_selected_lists() == 0 {
                    self.status = Some("No lists selected".to_string());
                }
                Ok(Flow::Stay)
            }
            MainCommand::Open(id) => {
                if self.valid_list(id) {
                    return self.list_menu(id);
                }
                if !line.trim().is_empty() {
                    self.status = Some(format!("No list numbered {}", line.trim()));
                }
                Ok(Flow::Stay)
            }
        }
    }

    /// Inside one list. Selections are cleared on the way in and out so they
    /// never leak between views.
    fn list_menu(&mut self, list_id: usize) -> Result<Flow> {
        self.store.unselect_all();

        let flow = loop {
            if self.store.list(list_id).is_none() {
                break Flow::Stay;
            }
            let Some(line) = self.ask(Screen::List(list_id), Hint::ListMenu, None)? else {
                break Flow::Quit;
            };
            let flow = self.evaluate_list(list_id, &line)?;
            self.save();
            match flow {
                Flow::Stay => continue,
                Flow::Leave => break Flow::Stay,
                Flow::Quit => break Flow::Quit,
            }
        };

        self.store.unselect_all();
        Ok(flow)
    }

    fn evaluate_list(&mut self, list_id: usize, line: &str) -> Result<Flow> {
        match ListCommand::parse(line) {
            ListCommand::Back => return Ok(Flow::Leave),
            ListCommand::Add => return self.add_task(list_id),
            ListCommand::Select => return self.select_task(list_id),
            ListCommand::Complete => {
                self.store.complete_selected_tasks();
            }
            ListCommand::Delete => {
                self.store.delete_selected_tasks();
            }
            ListCommand::Unknown => {
                if !line.trim().is_empty() {
                    self.status = Some(format!("Unknown command: {}", line.trim()));
                }
            }
        }
        Ok(Flow::Stay)
    }

    fn add_list(&mut self) -> Result<Flow> {
        let Some(name) = self.ask(Screen::Main, Hint::AddList, Some("add"))? else {
            return Ok(Flow::Quit);
        };
        let name = name.trim();
        if name.is_empty() {
            self.status = Some("A list needs a name".to_string());
        } else {
            self.store.add_list(name);
        }
        Ok(Flow::Stay)
    }

    fn select_list(&mut self) -> Result<Flow> {
        let Some(answer) = self.ask(Screen::Main, Hint::SelectList, Some("select"))? else {
            return Ok(Flow::Quit);
        };
        let id = coerce_id(&answer);
        if !self.valid_list(id) {
            self.status = Some(format!("No list numbered {}", answer.trim()));
        } else if let Err(e) = self.store.select_list(id) {
            self.status = Some(e.to_string());
        }
        Ok(Flow::Stay)
    }

    fn add_task(&mut self, list_id: usize) -> Result<Flow> {
        let Some(name) = self.ask(Screen::List(list_id), Hint::AddTask, Some("add"))? else {
            return Ok(Flow::Quit);
        };
        let name = name.trim();
        if name.is_empty() {
            self.status = Some("A task needs a name".to_string());
        } else if let Err(e) = self.store.add_task(list_id, name) {
            self.status = Some(e.to_string());
        }
        Ok(Flow::Stay)
    }

    /// Positions are 1-based into the tasks currently shown, translated to
    /// the task id before reaching the store
    fn select_task(&mut self, list_id: usize) -> Result<Flow> {
        let Some(answer) = self.ask(Screen::List(list_id), Hint::SelectTask, Some("select"))? else {
            return Ok(Flow::Quit);
        };
        let position = coerce_id(&answer);
        let task_id = {
            let tasks = self.store.pull_list_tasks(list_id);
            valid_task(position, tasks.len()).then(|| tasks[position - 1].id)
        };

        match task_id {
            Some(id) => {
                if let Err(e) = self.store.select_task(id) {
                    self.status = Some(e.to_string());
                }
            }
            None => self.status = Some(format!("No task numbered {}", answer.trim())),
        }
        Ok(Flow::Stay)
    }

    fn valid_list(&self, id: usize) -> bool {
        self.store.is_live_list(id)
    }

    /// Draw a menu with its help text, show a prompt and read one line.
    /// `None` means input has ended.
    fn ask(&mut self, screen: Screen, hint: Hint, command: Option<&str>) -> Result<Option<String>> {
        match screen {
            Screen::Main => {
                ui::render_main_menu(&mut self.output, self.store.lists())?;
            }
            Screen::List(list_id) => {
                if let Some(list) = self.store.list(list_id) {
                    let tasks = self.store.pull_list_tasks(list_id);
                    ui::render_list_menu(&mut self.output, list, &tasks)?;
                }
            }
        }
        if let Some(status) = self.status.take() {
            ui::render_status(&mut self.output, &status)?;
        }
        ui::render_hint(&mut self.output, hint)?;
        ui::render_prompt(&mut self.output, command)?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn save(&mut self) {
        if let Err(e) = self.store.save_files() {
            log::error!("failed to save database: {}", e);
            self.status = Some(format!("Could not save: {}", e));
        }
    }
}

fn valid_task(position: usize, visible: usize) -> bool {
    (1..=visible).contains(&position)
}
