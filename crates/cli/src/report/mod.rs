// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering.
//!
//! Formats change sets and ranked recommendations as text or JSON.

mod json;
mod text;

use crate::changeset::ChangeSet;
use crate::cli::OutputFormat;
use crate::recommend::{ImpactLevel, TestCaseRecommendation};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for formatting analysis results into various output formats.
pub trait ReportFormatter {
    /// Format the analyzed change set.
    fn format_changes(&self, changes: &ChangeSet) -> anyhow::Result<String>;

    /// Format ranked recommendations for a change set.
    fn format_recommendations(
        &self,
        changes: &ChangeSet,
        recommendations: &[TestCaseRecommendation<'_>],
    ) -> anyhow::Result<String>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Recommendation counts per impact tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl LevelCounts {
    pub fn tally(recommendations: &[TestCaseRecommendation<'_>]) -> Self {
        let mut counts = Self::default();
        for rec in recommendations {
            match rec.impact_level {
                ImpactLevel::High => counts.high += 1,
                ImpactLevel::Medium => counts.medium += 1,
                ImpactLevel::Low => counts.low += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
