// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::fmt::Write;

use crate::changeset::ChangeSet;
use crate::diff::CodeChange;
use crate::recommend::TestCaseRecommendation;

use super::{LevelCounts, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter;

/// Size estimation constants for pre-allocation.
const TEXT_HEADER_SIZE: usize = 80;
const TEXT_ENTRY_SIZE: usize = 160;

impl ReportFormatter for TextFormatter {
    fn format_changes(&self, changes: &ChangeSet) -> anyhow::Result<String> {
        let mut output = String::with_capacity(
            TEXT_HEADER_SIZE + (changes.changes.len() + changes.skipped.len()) * TEXT_ENTRY_SIZE,
        );
        write_change_summary(&mut output, changes)?;
        for change in &changes.changes {
            write_change(&mut output, change)?;
        }
        write_skipped(&mut output, changes)?;
        Ok(output)
    }

    fn format_recommendations(
        &self,
        changes: &ChangeSet,
        recommendations: &[TestCaseRecommendation<'_>],
    ) -> anyhow::Result<String> {
        let mut output =
            String::with_capacity(TEXT_HEADER_SIZE + recommendations.len() * TEXT_ENTRY_SIZE);
        write_change_summary(&mut output, changes)?;
        write_skipped(&mut output, changes)?;
        writeln!(output)?;

        if recommendations.is_empty() {
            writeln!(output, "No recommended tests.")?;
            return Ok(output);
        }

        let counts = LevelCounts::tally(recommendations);
        writeln!(
            output,
            "Recommended tests: {} (HIGH {}, MEDIUM {}, LOW {})",
            recommendations.len(),
            counts.high,
            counts.medium,
            counts.low
        )?;
        for rec in recommendations {
            writeln!(
                output,
                "  [{}] {} ({:.2})",
                rec.impact_level, rec.test_case.case_name, rec.match_score
            )?;
            for reason in &rec.match_reasons {
                writeln!(output, "      {}", reason)?;
            }
        }
        Ok(output)
    }
}

fn write_change_summary(output: &mut String, changes: &ChangeSet) -> std::fmt::Result {
    writeln!(
        output,
        "Changed files: {} (+{} -{})",
        changes.changes.len(),
        changes.lines_added(),
        changes.lines_deleted()
    )
}

fn write_change(output: &mut String, change: &CodeChange) -> std::fmt::Result {
    writeln!(
        output,
        "  {:<8} {} (+{} -{}) [{}]",
        change.change_type,
        change.file_path,
        change.lines_added,
        change.lines_deleted,
        change.module_path
    )?;
    if !change.changed_classes.is_empty() {
        writeln!(output, "      classes: {}", join(&change.changed_classes))?;
    }
    if !change.changed_methods.is_empty() {
        writeln!(output, "      methods: {}", join(&change.changed_methods))?;
    }
    Ok(())
}

fn write_skipped(output: &mut String, changes: &ChangeSet) -> std::fmt::Result {
    if changes.skipped.is_empty() {
        return Ok(());
    }
    writeln!(output, "Skipped files: {}", changes.skipped.len())?;
    for skipped in &changes.skipped {
        writeln!(output, "  {}: {}", skipped.path, skipped.reason)?;
    }
    Ok(())
}

fn join(names: &std::collections::BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
