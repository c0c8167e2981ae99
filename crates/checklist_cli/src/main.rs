//! Terminal front end for the checklist.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the item database.
//! - Hand stdin/stdout to the interactive shell.

mod shell;

use anyhow::Context;
use checklist_core::db::open_db;
use checklist_core::{
    init_logging, logging_status, AppConfig, ConfigOverrides, ListController, SqliteItemStore,
};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checklist", version, about = "Single-screen to-do list")]
struct Args {
    /// Directory holding the item database (default: ~/.checklist).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Directory for rolling log files (default: <data-dir>/logs).
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = AppConfig::resolve(ConfigOverrides {
        data_dir: args.data_dir,
        log_dir: args.log_dir,
        log_level: args.log_level,
    })
    .context("failed to resolve configuration")?;

    init_logging(config.log_level, &config.log_dir)
        .map_err(anyhow::Error::msg)
        .context("failed to start logging")?;

    let db_path = config.db_path();
    if let Some((level, log_dir)) = logging_status() {
        info!(
            "event=cli_start module=cli status=ok core_ping={} level={} log_dir={} db_path={}",
            checklist_core::ping(),
            level,
            log_dir.display(),
            db_path.display()
        );
    }

    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open item database `{}`", db_path.display()))?;
    let controller = ListController::load(SqliteItemStore::new(&conn));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::Shell::new(controller, stdin.lock(), stdout.lock())
        .run()
        .context("terminal I/O failed")
}
