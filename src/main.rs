mod app;
mod config;
mod domain;
mod input;
mod logging;
mod persistence;
mod store;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Config;
use std::io;
use store::Store;

#[derive(Parser)]
#[command(name = "todo", version)]
#[command(about = "A terminal to-do manager that keeps named lists of tasks in CSV files", long_about = None)]
struct Cli {
    /// Database name; data lives in <NAME>_tasks.csv and <NAME>_lists.csv
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.name);

    // Keep the handle alive so the log file stays open
    let _logger = match logging::init_logging(&config.log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let store = Store::open(config.paths.clone())
        .with_context(|| format!("Failed to open database '{}'", config.name))?;
    log::info!("opened database '{}'", config.name);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(store, stdin.lock(), stdout.lock());

    if let Err(err) = app.run() {
        log::error!("session ended with error: {:#}", err);
        return Err(err);
    }

    log::info!("session ended");
    Ok(())
}
