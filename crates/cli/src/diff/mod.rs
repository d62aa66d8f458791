// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file diff analysis.
//!
//! Turns the unified diff of one file into a [`CodeChange`]: line counts,
//! touched method and type names, and a coarse module path.

pub mod classify;
pub mod filter;
pub mod patch;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use classify::{LineDeclarations, classify};
pub use filter::{ChangeSetFilter, is_code_file};
pub use patch::{RawFileDiff, split_patch};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Kind of change a file underwent between two revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Modified => "Modified",
            Self::Deleted => "Deleted",
            Self::Renamed => "Renamed",
            Self::Copied => "Copied",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One modified file within one commit range.
///
/// Name sets are ordered so that first-match scanning in the matchers
/// is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeChange {
    pub repository_id: String,
    pub commit_id: String,
    pub file_path: String,
    pub change_type: ChangeType,
    pub changed_methods: BTreeSet<String>,
    pub changed_classes: BTreeSet<String>,
    pub module_path: String,
    pub lines_added: usize,
    pub lines_deleted: usize,
}

/// Where a change came from: repository and target revision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeOrigin<'a> {
    pub repository_id: &'a str,
    pub commit_id: &'a str,
}

/// Analyze the unified diff of a single file.
///
/// Returns `None` when the path is not a code file. Lines starting with
/// `+`/`-` (but not `+++`/`---`) are counted and classified; added and
/// deleted lines feed the same name sets.
pub fn analyze(
    origin: ChangeOrigin<'_>,
    file_path: &str,
    change_type: ChangeType,
    diff_text: &str,
) -> Option<CodeChange> {
    if !is_code_file(file_path) {
        return None;
    }
    Some(analyze_unfiltered(origin, file_path, change_type, diff_text))
}

/// [`analyze`] without the code-file check, for callers that filtered already.
pub fn analyze_unfiltered(
    origin: ChangeOrigin<'_>,
    file_path: &str,
    change_type: ChangeType,
    diff_text: &str,
) -> CodeChange {
    let mut changed_methods = BTreeSet::new();
    let mut changed_classes = BTreeSet::new();
    let mut lines_added = 0;
    let mut lines_deleted = 0;

    for line in diff_text.lines() {
        let content = if let Some(rest) = line.strip_prefix('+') {
            if rest.starts_with("++") {
                continue;
            }
            lines_added += 1;
            rest
        } else if let Some(rest) = line.strip_prefix('-') {
            if rest.starts_with("--") {
                continue;
            }
            lines_deleted += 1;
            rest
        } else {
            continue;
        };

        let decls = classify(content);
        if let Some(name) = decls.method_name {
            changed_methods.insert(name.to_string());
        }
        if let Some(name) = decls.type_name {
            changed_classes.insert(name.to_string());
        }
    }

    CodeChange {
        repository_id: origin.repository_id.to_string(),
        commit_id: origin.commit_id.to_string(),
        file_path: file_path.to_string(),
        change_type,
        changed_methods,
        changed_classes,
        module_path: module_path(file_path),
        lines_added,
        lines_deleted,
    }
}

/// Coarse module key for a file path.
///
/// First two `/`-separated segments when the path has more than two,
/// otherwise the first segment.
pub fn module_path(file_path: &str) -> String {
    let mut parts = file_path.split('/');
    let first = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (Some(second), Some(_)) => format!("{first}/{second}"),
        _ => first.to_string(),
    }
}
