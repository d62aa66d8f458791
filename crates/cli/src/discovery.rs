// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating retest.toml.
//!
//! An explicit `--config`/`RETEST_CONFIG` path wins. Otherwise the working
//! directory and its ancestors are searched, nearest first, without
//! leaving the enclosing git repository.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE_NAME;

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

/// The config to load: `explicit` if given, else the nearest discovered one.
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(start_dir),
    }
}

/// Nearest retest.toml at or above `start_dir`.
///
/// A directory holding `.git` (a directory, or a file for worktrees) is the
/// last one searched. Directories named retest.toml are ignored.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}
