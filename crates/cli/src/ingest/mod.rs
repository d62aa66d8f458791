// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-case ingestion.
//!
//! Loads known test cases from JSON exports, JUnit-style Java sources
//! (one case per `@Test` method), CSV test plans and XMind mind maps.

pub mod csv;
pub mod java;
pub mod xmind;

use std::path::Path;

use crate::error::{Error, Result};
use crate::test_case::TestCase;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Supported test-case source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Java,
    Csv,
    Xmind,
}

impl SourceFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "java" => Some(Self::Java),
            "csv" => Some(Self::Csv),
            "xmind" => Some(Self::Xmind),
            _ => None,
        }
    }
}

/// Load the test cases described by `path`.
///
/// When `repository_id` is given it is stamped onto every loaded case,
/// overriding any value the source carried.
pub fn load_test_cases(path: &Path, repository_id: Option<&str>) -> Result<Vec<TestCase>> {
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat { path: path.to_path_buf() })?;
    let mut cases = match format {
        SourceFormat::Json => parse_json(&read_text(path)?, path)?,
        SourceFormat::Java => java::parse(&read_text(path)?, &path.to_string_lossy()),
        SourceFormat::Csv => csv::parse(&read_text(path)?, &path.to_string_lossy()),
        SourceFormat::Xmind => xmind::load(path)?,
    };

    if let Some(id) = repository_id {
        for case in &mut cases {
            case.repository_id = Some(id.to_string());
        }
    }

    tracing::debug!("loaded {} test cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Load and concatenate several sources, in order.
pub fn load_all<I>(paths: I, repository_id: Option<&str>) -> Result<Vec<TestCase>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut cases = Vec::new();
    for path in paths {
        cases.extend(load_test_cases(path.as_ref(), repository_id)?);
    }
    Ok(cases)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn parse_json(content: &str, path: &Path) -> Result<Vec<TestCase>> {
    let cases: Vec<TestCase> =
        serde_json::from_str(content).map_err(|e| Error::ingest(path, e.to_string()))?;
    for (idx, case) in cases.iter().enumerate() {
        if case.case_name.trim().is_empty() {
            return Err(Error::ingest(path, format!("test case #{} has no case_name", idx + 1)));
        }
        if case.priority == 0 {
            return Err(Error::ingest(
                path,
                format!("test case #{} has priority 0; priorities start at 1", idx + 1),
            ));
        }
    }
    Ok(cases)
}
