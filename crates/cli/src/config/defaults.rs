// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these constants via their
//! `Default` impls.

/// Name of the configuration file looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "retest.toml";

/// Supported config file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Factor weights. They sum to 1.0 so an all-factor match on a single
/// change scores exactly 1.0.
pub mod weights {
    /// Module match: the broadest blast radius.
    pub const MODULE: f64 = 0.4;
    pub const CLASS: f64 = 0.3;
    pub const METHOD: f64 = 0.2;
    /// File path match: the weakest signal.
    pub const FILE_PATH: f64 = 0.1;
}

/// Partial-credit multipliers and fuzzy cut-offs.
pub mod factors {
    /// Applied to the module weight when two leading package segments agree.
    pub const PACKAGE_MATCH: f64 = 0.7;
    /// Applied to the class weight on a substring match.
    pub const CLASS_CONTAINS: f64 = 0.8;
    /// Applied to the method weight on a substring match.
    pub const METHOD_CONTAINS: f64 = 0.8;
    /// Class similarity must exceed this to score.
    pub const CLASS_SIMILARITY_CUTOFF: f64 = 0.7;
    /// Method similarity must exceed this to score.
    pub const METHOD_SIMILARITY_CUTOFF: f64 = 0.6;
    /// Shared leading `.`-segments needed for a package match.
    pub const PACKAGE_SEGMENTS: usize = 2;
}

/// Impact tier thresholds, applied to the unclamped total.
pub mod impact {
    pub const HIGH: f64 = 0.7;
    pub const MEDIUM: f64 = 0.4;
}
