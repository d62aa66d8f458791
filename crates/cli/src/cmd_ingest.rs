// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ingest command implementation.

use retest::cli::IngestArgs;
use retest::ingest;

/// Run the ingest command.
pub fn run(args: &IngestArgs) -> anyhow::Result<()> {
    let cases = ingest::load_all(&args.files, args.repository_id.as_deref())?;
    let output = serde_json::to_string_pretty(&cases)?;
    crate::emit(&output)
}
