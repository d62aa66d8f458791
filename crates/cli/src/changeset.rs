// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change-set building.
//!
//! A [`DiffSource`] lists the files changed between two references and
//! renders each one's unified diff. [`build_change_set`] filters, analyzes
//! and collects the results, skipping files whose diff could not be
//! rendered instead of failing the batch.

use rayon::prelude::*;

use crate::diff::{self, ChangeOrigin, ChangeSetFilter, ChangeType, CodeChange, split_patch};
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "changeset_tests.rs"]
mod tests;

/// Threshold for switching to parallel diff analysis.
/// Below this, sequential iteration is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 50;

/// Unified diff of one changed file, as rendered by a source.
#[derive(Debug)]
pub struct FileDiff {
    pub path: String,
    pub change_type: ChangeType,
    /// Diff text, or the reason it could not be rendered.
    pub text: Result<String>,
}

/// Supplies per-file diffs between two references.
pub trait DiffSource {
    /// Diffs of the files changed between `from` and `to`.
    ///
    /// Paths rejected by `filter` should not be rendered. An unresolvable
    /// reference is [`Error::InvalidReference`]; "nothing changed" is an
    /// empty list.
    fn file_diffs(&self, from: &str, to: &str, filter: &ChangeSetFilter) -> Result<Vec<FileDiff>>;
}

/// A file left out of the change set because its diff was unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Analyzed changes between two references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub changes: Vec<CodeChange>,
    pub skipped: Vec<SkippedFile>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn lines_added(&self) -> usize {
        self.changes.iter().map(|c| c.lines_added).sum()
    }

    pub fn lines_deleted(&self) -> usize {
        self.changes.iter().map(|c| c.lines_deleted).sum()
    }
}

/// Build the change set between `from` and `to`.
///
/// Reference errors abort the build. Per-file rendering failures are
/// logged and recorded in [`ChangeSet::skipped`]. Output keeps the
/// source's file order.
pub fn build_change_set(
    source: &dyn DiffSource,
    filter: &ChangeSetFilter,
    from: &str,
    to: &str,
    repository_id: &str,
) -> Result<ChangeSet> {
    let diffs = source.file_diffs(from, to, filter)?;
    tracing::debug!("{} changed files between {} and {}", diffs.len(), from, to);

    let origin = ChangeOrigin { repository_id, commit_id: to };
    let mut ready = Vec::with_capacity(diffs.len());
    let mut skipped = Vec::new();

    for file in diffs {
        if !filter.accepts(&file.path) {
            tracing::debug!("skipping non-code file {}", file.path);
            continue;
        }
        match file.text {
            Ok(text) => ready.push((file.path, file.change_type, text)),
            Err(e) => {
                tracing::warn!("failed to read diff for {}: {}", file.path, e);
                skipped.push(SkippedFile { path: file.path, reason: e.to_string() });
            }
        }
    }

    let analyze = |(path, change_type, text): &(String, ChangeType, String)| {
        diff::analyze_unfiltered(origin, path, *change_type, text)
    };
    let changes: Vec<CodeChange> = if ready.len() >= PARALLEL_THRESHOLD {
        ready.par_iter().map(analyze).collect()
    } else {
        ready.iter().map(analyze).collect()
    };

    tracing::debug!("analyzed {} files, skipped {}", changes.len(), skipped.len());
    Ok(ChangeSet { changes, skipped })
}

/// Diff source backed by a multi-file unified diff (`git diff` output).
///
/// The patch already describes one range, so the references are only
/// used as labels.
#[derive(Debug, Clone)]
pub struct PatchDiffSource {
    patch: String,
}

impl PatchDiffSource {
    pub fn new(patch: impl Into<String>) -> Self {
        Self { patch: patch.into() }
    }

    /// Read a patch file, or stdin when `path` is `-`.
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        use std::io::Read;

        if path.as_os_str() == "-" {
            let mut patch = String::new();
            std::io::stdin().read_to_string(&mut patch).map_err(|e| Error::io(path, e))?;
            return Ok(Self::new(patch));
        }
        let patch = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(patch))
    }
}

impl DiffSource for PatchDiffSource {
    fn file_diffs(
        &self,
        _from: &str,
        _to: &str,
        filter: &ChangeSetFilter,
    ) -> Result<Vec<FileDiff>> {
        Ok(split_patch(&self.patch)
            .into_iter()
            .filter(|raw| filter.accepts(&raw.path))
            .map(|raw| FileDiff { path: raw.path, change_type: raw.change_type, text: Ok(raw.text) })
            .collect())
    }
}
