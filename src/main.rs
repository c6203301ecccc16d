mod app;
mod catalog;
mod cli;
mod config;
mod data;
mod runtime;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use catalog::Catalog;
use clap::Parser;
use cli::Commands;
use config::GalleryConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = GalleryConfig::load()?;
    let catalog = load_catalog(&config)?;

    match cli.command {
        Commands::Run { location } => run_tui(catalog, location),
        Commands::Export => {
            println!("{}", serde_json::to_string_pretty(catalog.list_all())?);
            Ok(())
        }
        Commands::ConfigPath => {
            println!("{}", GalleryConfig::config_path()?.display());
            Ok(())
        }
    }
}

/// The built-in catalog unless the config points at a JSON override.
fn load_catalog(config: &GalleryConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn run_tui(catalog: Catalog, location: Option<String>) -> Result<()> {
    let mut app = App::new(catalog);
    if let Some(location) = location {
        app.navigate_to_location(&location);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
