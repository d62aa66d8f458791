// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analyze command implementation.

use std::path::Path;

use anyhow::Context;

use retest::changeset::{ChangeSet, PatchDiffSource, build_change_set};
use retest::cli::{AnalyzeArgs, Cli, DiffArgs};
use retest::config::Config;
use retest::git::GitDiffSource;
use retest::report;

/// Repository id used when none can be derived.
const FALLBACK_REPOSITORY_ID: &str = "local";

/// Run the analyze command.
pub fn run(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let config = crate::load_config(cli)?;
    let changes = change_set(&args.diff, &config)?;
    let output = report::formatter(args.output).format_changes(&changes)?;
    crate::emit(&output)
}

/// Build the change set selected by the diff arguments.
pub fn change_set(args: &DiffArgs, config: &Config) -> anyhow::Result<ChangeSet> {
    let filter = config.change_set_filter()?;

    if let Some(patch) = &args.patch {
        let source = PatchDiffSource::from_path(patch)?;
        let repository_id = args
            .repository_id
            .clone()
            .or_else(|| directory_name(&args.repo))
            .unwrap_or_else(|| FALLBACK_REPOSITORY_ID.to_string());
        let label = patch.display().to_string();
        return Ok(build_change_set(&source, &filter, "", &label, &repository_id)?);
    }

    let (Some(from), Some(to)) = (&args.from, &args.to) else {
        anyhow::bail!("either --from and --to, or --patch, is required");
    };
    let source = GitDiffSource::open(&args.repo)
        .with_context(|| format!("failed to open repository at {}", args.repo.display()))?;
    let repository_id = args
        .repository_id
        .clone()
        .or_else(|| source.repository_name())
        .unwrap_or_else(|| FALLBACK_REPOSITORY_ID.to_string());

    let changes = build_change_set(&source, &filter, from, to, &repository_id)?;
    if changes.is_empty() {
        tracing::warn!("no code changes between {} and {}", from, to);
    }
    Ok(changes)
}

fn directory_name(path: &Path) -> Option<String> {
    let path = std::fs::canonicalize(path).ok()?;
    Some(path.file_name()?.to_string_lossy().into_owned())
}
