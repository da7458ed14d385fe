//! cinelog CLI
//!
//! Interactive, menu-driven manager for a movie catalog stored in a local
//! SQLite file.

use std::path::PathBuf;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cinelog_cli::menu;
use cinelog_cli::observer::LogObserver;

#[derive(Parser)]
#[command(name = "cinelog")]
#[command(about = "Manage a movie catalog from the terminal", long_about = None)]
struct Cli {
    /// Path to the catalog database file
    #[arg(long, default_value = "movies.db")]
    db: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Surface storage problems before entering the menu loop
    if let Err(e) = cinelog_db::open_database(&cli.db) {
        log::error!("startup: {e}");
        eprintln!(
            "{} Failed to open database {}: {e}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            cli.db.display(),
        );
        std::process::exit(1);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = menu::run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &cli.db,
        &LogObserver,
    ) {
        eprintln!(
            "{} {e}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
        );
        std::process::exit(1);
    }
}
