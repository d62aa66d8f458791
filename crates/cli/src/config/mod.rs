// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and validation.
//!
//! Every section of `retest.toml` is optional; missing values fall back
//! to [`defaults`].

pub mod defaults;

use std::path::Path;

use serde::Deserialize;

use crate::diff::ChangeSetFilter;
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Config format version.
    pub version: Option<u32>,
    pub scoring: ScoringConfig,
    pub impact: ImpactThresholds,
    pub filter: FilterConfig,
}

/// Factor weights, partial-credit multipliers and fuzzy cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub module_weight: f64,
    pub class_weight: f64,
    pub method_weight: f64,
    pub file_path_weight: f64,
    pub package_match_factor: f64,
    pub class_contains_factor: f64,
    pub method_contains_factor: f64,
    pub class_similarity_cutoff: f64,
    pub method_similarity_cutoff: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        use defaults::{factors, weights};
        Self {
            module_weight: weights::MODULE,
            class_weight: weights::CLASS,
            method_weight: weights::METHOD,
            file_path_weight: weights::FILE_PATH,
            package_match_factor: factors::PACKAGE_MATCH,
            class_contains_factor: factors::CLASS_CONTAINS,
            method_contains_factor: factors::METHOD_CONTAINS,
            class_similarity_cutoff: factors::CLASS_SIMILARITY_CUTOFF,
            method_similarity_cutoff: factors::METHOD_SIMILARITY_CUTOFF,
        }
    }
}

/// Thresholds on the unclamped total that select the impact tier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImpactThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self { high: defaults::impact::HIGH, medium: defaults::impact::MEDIUM }
    }
}

/// Change-set filtering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Glob patterns for paths never analyzed, even if they are code.
    pub exclude: Vec<String>,
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse and validate config text; `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(path, e.to_string().trim_end()))?;
        config.validate().map_err(|message| Error::config(path, message))?;
        Ok(config)
    }

    /// Check value ranges. Returns a human-readable message on failure.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(version) = self.version
            && version != defaults::CONFIG_VERSION
        {
            return Err(format!(
                "unsupported version {version} (expected {})",
                defaults::CONFIG_VERSION
            ));
        }

        let s = &self.scoring;
        for (name, value) in [
            ("scoring.module_weight", s.module_weight),
            ("scoring.class_weight", s.class_weight),
            ("scoring.method_weight", s.method_weight),
            ("scoring.file_path_weight", s.file_path_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        for (name, value) in [
            ("scoring.package_match_factor", s.package_match_factor),
            ("scoring.class_contains_factor", s.class_contains_factor),
            ("scoring.method_contains_factor", s.method_contains_factor),
            ("scoring.class_similarity_cutoff", s.class_similarity_cutoff),
            ("scoring.method_similarity_cutoff", s.method_similarity_cutoff),
            ("impact.high", self.impact.high),
            ("impact.medium", self.impact.medium),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be between 0 and 1, got {value}"));
            }
        }
        if self.impact.medium > self.impact.high {
            return Err(format!(
                "impact.medium ({}) must not exceed impact.high ({})",
                self.impact.medium, self.impact.high
            ));
        }

        ChangeSetFilter::new(&self.filter.exclude)
            .map(|_| ())
            .map_err(|e| format!("filter.exclude: {e}"))
    }

    /// Build the change-set filter described by `[filter]`.
    pub fn change_set_filter(&self) -> Result<ChangeSetFilter> {
        ChangeSetFilter::new(&self.filter.exclude).map_err(|e| Error::Config {
            path: defaults::CONFIG_FILE_NAME.into(),
            message: format!("filter.exclude: {e}"),
        })
    }
}
