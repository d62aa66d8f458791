// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Known test cases, as supplied by an ingester.

use serde::{Deserialize, Serialize};

/// One known test.
///
/// Only `case_name` is required. Empty strings are treated the same as
/// absent fields by the matchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCase {
    pub repository_id: Option<String>,
    pub case_name: String,
    pub case_description: Option<String>,
    pub case_type: Option<String>,
    pub file_path: Option<String>,
    pub class_name: Option<String>,
    pub method_name: Option<String>,
    pub tags: Option<String>,
    /// Comma-separated module tokens.
    pub covered_modules: Option<String>,
    pub priority: u32,
}

impl Default for TestCase {
    fn default() -> Self {
        Self {
            repository_id: None,
            case_name: String::new(),
            case_description: None,
            case_type: None,
            file_path: None,
            class_name: None,
            method_name: None,
            tags: None,
            covered_modules: None,
            priority: 1,
        }
    }
}

impl TestCase {
    /// A test case with only a name.
    pub fn named(case_name: impl Into<String>) -> Self {
        Self { case_name: case_name.into(), ..Self::default() }
    }

    pub fn class_name(&self) -> Option<&str> {
        present(&self.class_name)
    }

    pub fn method_name(&self) -> Option<&str> {
        present(&self.method_name)
    }

    pub fn file_path(&self) -> Option<&str> {
        present(&self.file_path)
    }

    pub fn covered_modules(&self) -> Option<&str> {
        present(&self.covered_modules)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
