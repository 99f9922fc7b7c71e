//! todo CLI - menu-driven to-do list application
//!
//! Registers and logs in users against a local JSON user store.

mod output;
mod shell;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use todo_core::{config, AuthService, JsonUserStore};

use crate::shell::Shell;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Menu-driven to-do list CLI", long_about = None)]
pub struct Cli {
    /// Override user store path (or set TODO_USERS_PATH env var)
    #[arg(long)]
    users: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(log_env).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let users_path = config::resolve_users_path(cli.users)?;

    let store = JsonUserStore::open(&users_path)
        .with_context(|| format!("Failed to open user store: {}", users_path.display()))?;
    log::debug!("Using user store: {}", store.path().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(AuthService::new(store), stdin.lock(), stdout.lock());
    shell.run()?;

    if let Some(user) = shell.current_user() {
        log::debug!("Session ended for {}", user);
    }

    Ok(())
}
