// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::recommend::ImpactLevel;

/// Recommends which existing test cases to re-run for a set of source changes
#[derive(Parser)]
#[command(name = "retest")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "RETEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the code changes between two references
    Analyze(AnalyzeArgs),
    /// Rank known test cases against the code changes
    Recommend(RecommendArgs),
    /// Parse test-case sources and print them as JSON
    Ingest(IngestArgs),
}

/// Where the change set comes from: a commit range or a patch file.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Repository to read commits from
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub repo: PathBuf,

    /// Base commit or revision
    #[arg(long, value_name = "REF", required_unless_present = "patch")]
    pub from: Option<String>,

    /// Target commit or revision
    #[arg(long, value_name = "REF", required_unless_present = "patch")]
    pub to: Option<String>,

    /// Read changes from a unified diff instead ('-' for stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["from", "to"])]
    pub patch: Option<PathBuf>,

    /// Repository id recorded on each change (default: repository directory name)
    #[arg(long, value_name = "ID")]
    pub repository_id: Option<String>,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub diff: DiffArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub diff: DiffArgs,

    /// Test-case sources (.json, .java, .csv, .xmind)
    #[arg(long = "tests", value_name = "FILE", required = true, num_args = 1..)]
    pub tests: Vec<PathBuf>,

    /// Only show recommendations at or above this impact level
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<ImpactLevel>,

    /// Maximum recommendations to display
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct IngestArgs {
    /// Test-case sources (.json, .java, .csv, .xmind)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Repository id stamped onto every test case
    #[arg(long, value_name = "ID")]
    pub repository_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
