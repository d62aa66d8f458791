// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-case recommendation from source changes.
//!
//! Analyzes the diff between two references into [`diff::CodeChange`]
//! records, then scores known [`test_case::TestCase`]s against them with
//! weighted module, class, method and file-path matchers.

pub mod changeset;
pub mod cli;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod git;
pub mod ingest;
pub mod recommend;
pub mod report;
pub mod similarity;
pub mod test_case;

#[cfg(test)]
mod test_utils;

pub use changeset::{ChangeSet, DiffSource, build_change_set};
pub use diff::{ChangeType, CodeChange};
pub use error::{Error, Result};
pub use recommend::{ImpactLevel, RecommendationEngine, TestCaseRecommendation};
pub use test_case::TestCase;
