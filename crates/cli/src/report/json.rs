// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use crate::changeset::ChangeSet;
use crate::recommend::TestCaseRecommendation;

use super::{LevelCounts, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_changes(&self, changes: &ChangeSet) -> anyhow::Result<String> {
        let output = json!({
            "summary": change_summary(changes),
            "changes": changes.changes,
            "skipped": skipped(changes),
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_recommendations(
        &self,
        changes: &ChangeSet,
        recommendations: &[TestCaseRecommendation<'_>],
    ) -> anyhow::Result<String> {
        let counts = LevelCounts::tally(recommendations);

        let mut summary = change_summary(changes);
        if let Some(map) = summary.as_object_mut() {
            map.insert("recommended".to_string(), json!(recommendations.len()));
            map.insert("high".to_string(), json!(counts.high));
            map.insert("medium".to_string(), json!(counts.medium));
            map.insert("low".to_string(), json!(counts.low));
        }

        let entries: Vec<serde_json::Value> = recommendations
            .iter()
            .map(|rec| {
                let test = rec.test_case;
                json!({
                    "case_name": test.case_name,
                    "case_type": test.case_type,
                    "class_name": test.class_name,
                    "method_name": test.method_name,
                    "file_path": test.file_path,
                    "priority": test.priority,
                    "match_score": rec.match_score,
                    "total_score": rec.total_score,
                    "impact_level": rec.impact_level,
                    "match_reason": rec.match_reason(),
                    "match_reasons": rec.match_reasons,
                })
            })
            .collect();

        let output = json!({
            "summary": summary,
            "skipped": skipped(changes),
            "recommendations": entries,
        });
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn change_summary(changes: &ChangeSet) -> serde_json::Value {
    json!({
        "files": changes.changes.len(),
        "lines_added": changes.lines_added(),
        "lines_deleted": changes.lines_deleted(),
        "skipped": changes.skipped.len(),
    })
}

fn skipped(changes: &ChangeSet) -> serde_json::Value {
    changes
        .skipped
        .iter()
        .map(|s| json!({ "path": s.path, "reason": s.reason }))
        .collect()
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
