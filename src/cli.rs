use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "diy-tui")]
#[command(about = "Terminal catalog browser for the DIY Project Gallery")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the catalog in the terminal UI
    Run {
        /// Initial navigation location, e.g. "/project/3"
        #[arg(long)]
        location: Option<String>,
    },
    /// Print the active catalog as JSON
    Export,
    /// Print the config file path
    ConfigPath,
}
