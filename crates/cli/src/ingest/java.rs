// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JUnit-style Java test sources.

use std::sync::LazyLock;

use regex::Regex;

use crate::test_case::TestCase;

#[cfg(test)]
#[path = "java_tests.rs"]
mod tests;

/// `@Test` followed by a `void` method declaration, possibly on later lines.
#[allow(clippy::expect_used)]
static TEST_METHOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@Test.*?\s+(?:public|private|protected)?\s*void\s+(\w+)\s*\(")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
static CLASS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"public\s+class\s+(\w+)").expect("valid regex"));

#[allow(clippy::expect_used)]
static PACKAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"package\s+([\w.]+);").expect("valid regex"));

const UNKNOWN_CLASS: &str = "Unknown";
const DEFAULT_PACKAGE: &str = "default";
const CASE_TYPE: &str = "UNIT_TEST";

/// How far above a test method a describing comment may sit.
const DESCRIPTION_LOOKBACK: usize = 5;

/// One case per `@Test` method found in `content`.
pub fn parse(content: &str, file_path: &str) -> Vec<TestCase> {
    let class_name = capture(&CLASS_PATTERN, content).unwrap_or(UNKNOWN_CLASS);
    let package = capture(&PACKAGE_PATTERN, content).unwrap_or(DEFAULT_PACKAGE);
    let lines: Vec<&str> = content.lines().collect();

    TEST_METHOD_PATTERN
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|method| {
            let line_idx = content[..method.start()].matches('\n').count();
            let name = method.as_str();
            TestCase {
                case_name: name.to_string(),
                case_description: Some(
                    description(&lines, line_idx)
                        .unwrap_or_else(|| format!("Test case for {name}")),
                ),
                case_type: Some(CASE_TYPE.to_string()),
                file_path: Some(file_path.to_string()),
                class_name: Some(class_name.to_string()),
                method_name: Some(name.to_string()),
                covered_modules: Some(package.to_string()),
                ..TestCase::default()
            }
        })
        .collect()
}

fn capture<'a>(pattern: &Regex, content: &'a str) -> Option<&'a str> {
    pattern.captures(content)?.get(1).map(|m| m.as_str())
}

/// Nearest non-empty `//` or `*` comment line above `line_idx`.
fn description(lines: &[&str], line_idx: usize) -> Option<String> {
    let start = line_idx.saturating_sub(DESCRIPTION_LOOKBACK);
    lines.get(start..line_idx).unwrap_or_default().iter().rev().find_map(|line| {
        let line = line.trim();
        if !line.starts_with("//") && !line.starts_with('*') {
            return None;
        }
        let text = line.trim_start_matches(|c: char| c == '/' || c == '*' || c.is_whitespace());
        (!text.is_empty()).then(|| text.to_string())
    })
}
