use anyhow::{Context, Result};
use clap::Parser;
use flashcards::cli::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    log::debug!("{args:?}");
    flashcards::repl(args).context("flashcards session failed")?;
    Ok(())
}
