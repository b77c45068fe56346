//! CLI entry point for the all-colour image generator

use allrgb::io::cli::{Cli, Generator};
use clap::Parser;

fn main() -> allrgb::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    Generator::new(cli).run()?;
    Ok(())
}
