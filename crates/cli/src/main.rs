// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_analyze;
mod cmd_ingest;
mod cmd_recommend;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use retest::cli::{Cli, Command};
use retest::config::Config;
use retest::discovery;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "RETEST_LOG";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Analyze(args) => cmd_analyze::run(&cli, args),
        Command::Recommend(args) => cmd_recommend::run(&cli, args),
        Command::Ingest(args) => cmd_ingest::run(args),
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the explicit config, or discover one from the working directory.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let Some(path) = discovery::resolve_config(cli.config.as_deref(), &cwd) else {
        return Ok(Config::default());
    };
    tracing::debug!("loading config from {}", path.display());
    Config::load(&path).with_context(|| format!("failed to load config {}", path.display()))
}

/// Write a rendered report to stdout, ending with a newline.
fn emit(output: &str) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(handle)?;
    }
    handle.flush()?;
    Ok(())
}
