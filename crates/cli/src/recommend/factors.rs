// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The four scoring factors.
//!
//! Each factor compares one test-case attribute with one change attribute
//! and yields at most one [`FactorMatch`]. Scanning is first-match-wins:
//! the first qualifying token or name decides the score, not the best one.

use crate::config::ScoringConfig;
use crate::config::defaults::factors::PACKAGE_SEGMENTS;
use crate::diff::CodeChange;
use crate::similarity::similarity;
use crate::test_case::TestCase;

#[cfg(test)]
#[path = "factors_tests.rs"]
mod tests;

/// A fired scoring rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorMatch {
    pub score: f64,
    pub reason: String,
}

impl FactorMatch {
    fn new(score: f64, reason: String) -> Self {
        Self { score, reason }
    }
}

/// Evaluate all four factors in order: module, class, method, file path.
pub fn score_pair(
    test: &TestCase,
    change: &CodeChange,
    config: &ScoringConfig,
) -> impl Iterator<Item = FactorMatch> {
    [
        module_factor(test, change, config),
        class_factor(test, change, config),
        method_factor(test, change, config),
        file_path_factor(test, change, config),
    ]
    .into_iter()
    .flatten()
}

/// Covered module tokens against the change's module path.
pub fn module_factor(
    test: &TestCase,
    change: &CodeChange,
    config: &ScoringConfig,
) -> Option<FactorMatch> {
    let covered = test.covered_modules()?;
    let module_path = change.module_path.as_str();
    if module_path.is_empty() {
        return None;
    }

    for token in covered.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if contains_either(token, module_path) {
            return Some(FactorMatch::new(
                config.module_weight,
                format!("module match: {token} <-> {module_path}"),
            ));
        }
        if is_package_related(token, module_path) {
            return Some(FactorMatch::new(
                config.module_weight * config.package_match_factor,
                format!("package match: {token} <-> {module_path}"),
            ));
        }
    }
    None
}

/// Test class name against changed type names.
pub fn class_factor(
    test: &TestCase,
    change: &CodeChange,
    config: &ScoringConfig,
) -> Option<FactorMatch> {
    let class_name = test.class_name()?;
    let changed = &change.changed_classes;

    if changed.contains(class_name) {
        return Some(FactorMatch::new(
            config.class_weight,
            format!("class exact match: {class_name}"),
        ));
    }
    if let Some(name) = changed.iter().find(|c| contains_either(class_name, c)) {
        return Some(FactorMatch::new(
            config.class_weight * config.class_contains_factor,
            format!("class contains match: {class_name} <-> {name}"),
        ));
    }
    first_similar(class_name, changed.iter(), config.class_similarity_cutoff).map(|(name, sim)| {
        FactorMatch::new(
            config.class_weight * sim,
            format!("class similar match: {class_name} <-> {name} (similarity: {sim:.2})"),
        )
    })
}

/// Test method name against changed method names.
pub fn method_factor(
    test: &TestCase,
    change: &CodeChange,
    config: &ScoringConfig,
) -> Option<FactorMatch> {
    let method_name = test.method_name()?;
    let changed = &change.changed_methods;

    if changed.contains(method_name) {
        return Some(FactorMatch::new(
            config.method_weight,
            format!("method exact match: {method_name}"),
        ));
    }
    if let Some(name) = changed.iter().find(|m| tests_business_method(method_name, m)) {
        return Some(FactorMatch::new(
            config.method_weight,
            format!("test method targets business method: {method_name} -> {name}"),
        ));
    }
    if let Some(name) = changed.iter().find(|m| contains_either(method_name, m)) {
        return Some(FactorMatch::new(
            config.method_weight * config.method_contains_factor,
            format!("method contains match: {method_name} <-> {name}"),
        ));
    }
    first_similar(method_name, changed.iter(), config.method_similarity_cutoff).map(|(name, sim)| {
        FactorMatch::new(
            config.method_weight * sim,
            format!("method similar match: {method_name} <-> {name} (similarity: {sim:.2})"),
        )
    })
}

/// Test file path against the changed file path, extensions ignored.
pub fn file_path_factor(
    test: &TestCase,
    change: &CodeChange,
    config: &ScoringConfig,
) -> Option<FactorMatch> {
    let test_path = test.file_path()?;
    let change_path = change.file_path.as_str();
    if change_path.is_empty() {
        return None;
    }

    if contains_either(strip_extension(test_path), strip_extension(change_path)) {
        return Some(FactorMatch::new(
            config.file_path_weight,
            format!("file path match: {test_path} <-> {change_path}"),
        ));
    }
    None
}

/// Whether `test_method` looks like a test for `business_method`:
/// `testFoo`, `fooTest`, or `test...foo...`, compared case-insensitively.
pub fn tests_business_method(test_method: &str, business_method: &str) -> bool {
    let test = test_method.to_lowercase();
    let business = business_method.to_lowercase();

    test.contains(&format!("test{business}"))
        || test.contains(&format!("{business}test"))
        || (test.starts_with("test") && test.contains(&business))
}

/// At least [`PACKAGE_SEGMENTS`] leading `.`-separated segments are equal.
pub fn is_package_related(a: &str, b: &str) -> bool {
    let shared = a.split('.').zip(b.split('.')).take_while(|(x, y)| x == y).count();
    shared >= PACKAGE_SEGMENTS
}

/// Drop the text after the last `.`, unless that dot starts the path.
pub fn strip_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) if idx > 0 => &path[..idx],
        _ => path,
    }
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn first_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a String>,
    cutoff: f64,
) -> Option<(&'a str, f64)> {
    candidates
        .map(|candidate| (candidate.as_str(), similarity(name, candidate)))
        .find(|(_, sim)| *sim > cutoff)
}
