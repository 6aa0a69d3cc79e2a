//! Command-line tool that turns chess puzzle files into flashcards.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Template(args) => commands::template::run(args),
        Commands::Duplicates(args) => commands::duplicates::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Colortest(args) => commands::render::run_colortest(args),
    }
}
