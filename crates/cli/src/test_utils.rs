// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the retest crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::diff::{ChangeType, CodeChange, module_path};
use crate::test_case::TestCase;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// A modified-file change with the given names and a derived module path.
pub fn code_change(path: &str, methods: &[&str], classes: &[&str]) -> CodeChange {
    CodeChange {
        repository_id: "repo".to_string(),
        commit_id: "HEAD".to_string(),
        file_path: path.to_string(),
        change_type: ChangeType::Modified,
        changed_methods: methods.iter().map(|s| s.to_string()).collect(),
        changed_classes: classes.iter().map(|s| s.to_string()).collect(),
        module_path: module_path(path),
        lines_added: 1,
        lines_deleted: 0,
    }
}

/// A test case carrying only its name.
pub fn test_case(name: &str) -> TestCase {
    TestCase::named(name)
}
