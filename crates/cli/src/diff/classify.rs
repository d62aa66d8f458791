// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-level declaration detection.
//!
//! Two permissive regexes over raw diff text. False positives (a call
//! statement that looks like a signature, `subclass Foo`) are accepted;
//! nothing here parses the language.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;

/// Modifier run, return type token, identifier, parameter list, optional `{`.
const METHOD_PATTERN: &str =
    r"(?:public|private|protected|static|\s)*\s+[\w<>\[\]]+\s+(\w+)\s*\([^)]*\)\s*\{?";

/// Modifier run, `class`/`interface`/`enum`, identifier.
const TYPE_PATTERN: &str =
    r"(?:public|private|protected|static|abstract|final|\s)*\s*(?:class|interface|enum)\s+(\w+)";

#[allow(clippy::expect_used)]
static METHOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(METHOD_PATTERN).expect("valid regex pattern"));

#[allow(clippy::expect_used)]
static TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TYPE_PATTERN).expect("valid regex pattern"));

/// Declarations detected on a single line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineDeclarations<'a> {
    /// Name of a method that looks declared on the line.
    pub method_name: Option<&'a str>,
    /// Name of a class, interface or enum that looks declared on the line.
    pub type_name: Option<&'a str>,
}

/// Run both detectors on one line of code.
///
/// The detectors are independent, so a line may yield a method, a type,
/// both, or neither.
pub fn classify(line: &str) -> LineDeclarations<'_> {
    LineDeclarations { method_name: method_name(line), type_name: type_name(line) }
}

/// Method name declared on `line`, if the line looks like a signature.
pub fn method_name(line: &str) -> Option<&str> {
    capture(&METHOD_REGEX, line)
}

/// Type name declared on `line`, if the line looks like a type declaration.
pub fn type_name(line: &str) -> Option<&str> {
    capture(&TYPE_REGEX, line)
}

fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str()).filter(|s| !s.is_empty())
}
