// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flat CSV test plans.
//!
//! The header row names the columns; matching is case-insensitive and a
//! few aliases are accepted per field. Fields may be double-quoted to
//! carry commas (`"billing.order,billing.invoice"`); records do not span
//! lines.

use crate::test_case::TestCase;

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;

const DEFAULT_CASE_TYPE: &str = "MANUAL_TEST";
const DEFAULT_PRIORITY: u32 = 1;

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    description: Option<usize>,
    case_type: Option<usize>,
    class_name: Option<usize>,
    method_name: Option<usize>,
    module: Option<usize>,
    priority: Option<usize>,
    file_path: Option<usize>,
    tags: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> Self {
        let headers: Vec<String> =
            split_record(header).iter().map(|h| h.to_lowercase()).collect();
        let find = |aliases: &[&str]| headers.iter().position(|h| aliases.contains(&h.as_str()));
        Self {
            name: find(&["name", "casename", "testname"]),
            description: find(&["description", "desc"]),
            case_type: find(&["type", "casetype"]),
            class_name: find(&["class", "classname"]),
            method_name: find(&["method", "methodname"]),
            module: find(&["module", "coveredmodules"]),
            priority: find(&["priority"]),
            file_path: find(&["file", "filepath"]),
            tags: find(&["tags"]),
        }
    }
}

/// One case per data row that has a name.
///
/// `source` only labels log messages; `file_path` comes from the `file`
/// column.
pub fn parse(content: &str, source: &str) -> Vec<TestCase> {
    let mut lines = content.lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = Columns::from_header(header);
    if columns.name.is_none() {
        tracing::warn!("{}: no name column in CSV header", source);
        return Vec::new();
    }

    let mut cases = Vec::new();
    for (row, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let values = split_record(line);
        let value = |idx: Option<usize>| {
            idx.and_then(|i| values.get(i)).filter(|v| !v.is_empty()).cloned()
        };

        let Some(case_name) = value(columns.name) else {
            tracing::debug!("{}: skipping row {} without a name", source, row + 2);
            continue;
        };
        cases.push(TestCase {
            case_name,
            case_description: value(columns.description),
            case_type: Some(
                value(columns.case_type).unwrap_or_else(|| DEFAULT_CASE_TYPE.to_string()),
            ),
            file_path: value(columns.file_path),
            class_name: value(columns.class_name),
            method_name: value(columns.method_name),
            tags: value(columns.tags),
            covered_modules: value(columns.module),
            priority: value(columns.priority)
                .and_then(|p| p.parse().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(DEFAULT_PRIORITY),
            ..TestCase::default()
        });
    }
    cases
}

/// Split one record on commas outside double quotes.
///
/// `""` inside a quoted field is a literal quote. An unterminated quote
/// runs to the end of the line. Fields are trimmed.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field).trim().to_string()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}
