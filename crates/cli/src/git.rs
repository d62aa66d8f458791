// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git-backed diff source.
//!
//! Uses git2 (libgit2) to diff the trees of two commits in-process, with
//! rename and copy detection, and renders one unified diff per file.

use std::path::Path;

use git2::{Delta, Diff, DiffFindOptions, Patch, Repository, Tree};

use crate::changeset::{DiffSource, FileDiff};
use crate::diff::{ChangeSetFilter, ChangeType};
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;

/// Diff source reading commits from a local repository.
pub struct GitDiffSource {
    repo: Repository,
}

impl GitDiffSource {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// Name of the working directory, used as the default repository id.
    pub fn repository_name(&self) -> Option<String> {
        let dir = self.repo.workdir().unwrap_or_else(|| self.repo.path());
        dir.components().next_back().map(|c| c.as_os_str().to_string_lossy().into_owned())
    }

    fn resolve_tree(&self, reference: &str) -> Result<(git2::Oid, Tree<'_>)> {
        let object = self
            .repo
            .revparse_single(reference)
            .map_err(|e| Error::invalid_reference(reference, e.message()))?;
        let commit =
            object.peel_to_commit().map_err(|e| Error::invalid_reference(reference, e.message()))?;
        let tree = commit.tree()?;
        Ok((commit.id(), tree))
    }
}

impl DiffSource for GitDiffSource {
    fn file_diffs(&self, from: &str, to: &str, filter: &ChangeSetFilter) -> Result<Vec<FileDiff>> {
        let (from_id, from_tree) = self.resolve_tree(from)?;
        let (to_id, to_tree) = self.resolve_tree(to)?;

        if from_id == to_id {
            tracing::warn!("{} and {} resolve to the same commit, nothing to diff", from, to);
            return Ok(Vec::new());
        }

        let mut diff = self.repo.diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None)?;
        let mut find = DiffFindOptions::new();
        find.renames(true).copies(true);
        diff.find_similar(Some(&mut find))?;

        let mut files = Vec::new();
        for (idx, delta) in diff.deltas().enumerate() {
            let change_type = change_type(delta.status());
            let file = match change_type {
                ChangeType::Deleted => delta.old_file(),
                _ => delta.new_file(),
            };
            let Some(path) = file.path() else {
                continue;
            };
            let path = path.to_string_lossy().into_owned();
            if !filter.accepts(&path) {
                continue;
            }
            files.push(FileDiff { path, change_type, text: render(&diff, idx) });
        }
        Ok(files)
    }
}

/// Map a libgit2 delta status onto the tracked change kinds.
fn change_type(status: Delta) -> ChangeType {
    match status {
        Delta::Added => ChangeType::Added,
        Delta::Deleted => ChangeType::Deleted,
        Delta::Renamed => ChangeType::Renamed,
        Delta::Copied => ChangeType::Copied,
        _ => ChangeType::Modified,
    }
}

/// Unified diff text for one delta. Binary files render as empty text.
fn render(diff: &Diff<'_>, idx: usize) -> Result<String> {
    let Some(mut patch) = Patch::from_diff(diff, idx)? else {
        return Ok(String::new());
    };
    let buf = patch.to_buf()?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
