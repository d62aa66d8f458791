// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides helpers for running the retest binary against fixtures and
//! scratch git repositories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{Repository, Signature};
use tempfile::TempDir;

/// Returns a Command configured to run the retest binary
pub fn retest_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("retest"));
    cmd.env_remove("RETEST_CONFIG").env_remove("RETEST_LOG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Path to a file inside the billing fixture.
pub fn billing(file: &str) -> PathBuf {
    fixture("billing").join(file)
}

/// Run a command and parse its stdout as JSON.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

/// Scratch directory, optionally holding a git repository.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write retest.toml at the project root.
    pub fn config(&self, content: &str) {
        self.file("retest.toml", content);
    }

    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Initialize a git repository in the project.
    pub fn git_init(&self) -> Repository {
        Repository::init(self.dir.path()).unwrap()
    }

    /// Write files and commit them on HEAD, returning the commit id.
    pub fn commit(&self, repo: &Repository, files: &[(&str, &str)], message: &str) -> String {
        let mut index = repo.index().unwrap();
        for (path, content) in files {
            self.file(path, content);
            index.add_path(Path::new(path)).unwrap();
        }
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents).unwrap().to_string()
    }
}
