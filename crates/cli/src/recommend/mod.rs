// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case recommendation.
//!
//! Scores every known test case against a change set by summing the four
//! factor scores over every change, then ranks and tiers the results.

pub mod factors;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{Config, ImpactThresholds, ScoringConfig};
use crate::diff::CodeChange;
use crate::test_case::TestCase;

pub use factors::FactorMatch;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Threshold for switching to parallel scoring.
/// Below this, sequential iteration is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 64;

/// Separator used when rendering match reasons as one string.
pub const REASON_SEPARATOR: &str = "; ";

/// How strongly a test case is implicated by a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    /// Tier for an unclamped total score.
    pub fn from_total(total: f64, thresholds: &ImpactThresholds) -> Self {
        if total >= thresholds.high {
            Self::High
        } else if total >= thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown impact level {other:?} (expected high, medium or low)")),
        }
    }
}

/// A scored test case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCaseRecommendation<'a> {
    pub test_case: &'a TestCase,
    /// Total score clamped to `[0, 1]`.
    pub match_score: f64,
    /// Sum of all factor scores before clamping.
    pub total_score: f64,
    /// One entry per fired rule, in the order they fired.
    pub match_reasons: Vec<String>,
    pub impact_level: ImpactLevel,
}

impl TestCaseRecommendation<'_> {
    /// Reasons joined with [`REASON_SEPARATOR`].
    pub fn match_reason(&self) -> String {
        self.match_reasons.join(REASON_SEPARATOR)
    }
}

/// Scores test cases against code changes.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    scoring: ScoringConfig,
    impact: ImpactThresholds,
}

impl RecommendationEngine {
    pub fn new(scoring: ScoringConfig, impact: ImpactThresholds) -> Self {
        Self { scoring, impact }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.scoring, config.impact)
    }

    /// Rank every test case that any change implicates.
    ///
    /// Test cases scoring zero are dropped. Output is ordered by score
    /// (descending), then case name, then input position.
    pub fn recommend<'a>(
        &self,
        changes: &[CodeChange],
        tests: &'a [TestCase],
    ) -> Vec<TestCaseRecommendation<'a>> {
        tracing::debug!("scoring {} test cases against {} changes", tests.len(), changes.len());
        if changes.is_empty() || tests.is_empty() {
            return Vec::new();
        }

        let mut recommendations: Vec<TestCaseRecommendation<'a>> =
            if tests.len() >= PARALLEL_THRESHOLD {
                tests.par_iter().filter_map(|test| self.score(test, changes)).collect()
            } else {
                tests.iter().filter_map(|test| self.score(test, changes)).collect()
            };

        // Stable sort: equal keys keep input order.
        recommendations.sort_by(rank_order);

        tracing::debug!("recommended {} test cases", recommendations.len());
        recommendations
    }

    /// Score one test case over the whole change set.
    ///
    /// Returns `None` when nothing matched.
    pub fn score<'a>(
        &self,
        test: &'a TestCase,
        changes: &[CodeChange],
    ) -> Option<TestCaseRecommendation<'a>> {
        let mut total = 0.0;
        let mut reasons = Vec::new();

        for change in changes {
            for m in factors::score_pair(test, change, &self.scoring) {
                total += m.score;
                reasons.push(m.reason);
            }
        }

        if total <= 0.0 {
            return None;
        }

        Some(TestCaseRecommendation {
            test_case: test,
            match_score: total.min(1.0),
            total_score: total,
            match_reasons: reasons,
            impact_level: ImpactLevel::from_total(total, &self.impact),
        })
    }
}

fn rank_order(a: &TestCaseRecommendation<'_>, b: &TestCaseRecommendation<'_>) -> Ordering {
    b.match_score
        .total_cmp(&a.match_score)
        .then_with(|| a.test_case.case_name.cmp(&b.test_case.case_name))
}
