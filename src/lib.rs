// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Metrics backend base URL (defaults to the local dev backend)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
