use crate::config::Config;
use crate::loader::Loader;
use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod export;
mod loader;
mod model;
mod stats;
mod view;

#[derive(Parser)]
#[command(version, about = "Render portfolio content from the database to the terminal")]
struct Args {
    /// Use FILE instead of folio.toml
    #[arg(short, long, value_name = "FILE", default_value = "folio.toml")]
    config: String,
    /// Export project cards to FILE in CSV format
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(format!("folio={level}"))?)
        .init();
    let config = Config::load(&args.config)?;
    let mut loader = Loader::new(&config.database.url).await?;
    let (projects, skills) = loader.load().await?;
    display::display_projects(&projects);
    display::display_skills(&skills);
    display::display_timeline(&config.timeline);
    display::display_stats(&projects, &skills);
    if let Some(path) = &args.csv {
        export::export_csv(path, &projects)?;
    }
    Ok(())
}
