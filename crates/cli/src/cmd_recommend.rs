// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recommend command implementation.

use retest::cli::{Cli, RecommendArgs};
use retest::ingest;
use retest::recommend::RecommendationEngine;
use retest::report;

use crate::cmd_analyze;

/// Run the recommend command.
pub fn run(cli: &Cli, args: &RecommendArgs) -> anyhow::Result<()> {
    let config = crate::load_config(cli)?;
    let tests = ingest::load_all(&args.tests, None)?;
    if tests.is_empty() {
        tracing::warn!("no test cases loaded");
    }

    let changes = cmd_analyze::change_set(&args.diff, &config)?;
    let engine = RecommendationEngine::from_config(&config);
    let mut recommendations = engine.recommend(&changes.changes, &tests);

    if let Some(min_level) = args.min_level {
        recommendations.retain(|rec| rec.impact_level >= min_level);
    }
    if let Some(limit) = args.limit {
        recommendations.truncate(limit);
    }

    let output =
        report::formatter(args.output).format_recommendations(&changes, &recommendations)?;
    crate::emit(&output)
}
