// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Code-file filtering for change sets.
//!
//! Runs before diff analysis so binary and media files never reach the
//! analyzer.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

/// Extensions (lowercase, no dot) treated as code.
pub const CODE_EXTENSIONS: &[&str] = &[
    "java", "js", "ts", "tsx", "jsx", "py", "cpp", "c", "h", "cs", "go", "php", "html", "css",
    "scss", "sass", "less", "vue", "kt", "swift", "rb", "scala", "groovy", "rs", "dart", "r", "m",
    "mm", "sql", "pl", "sh", "bat", "ps1", "xml", "json", "yaml", "yml", "properties", "conf",
    "cfg", "ini", "toml",
];

/// Build, doc and tooling file markers matched against the lowercased file name.
pub const SPECIAL_FILE_MARKERS: &[&str] = &[
    "dockerfile",
    "makefile",
    "cmakelists.txt",
    "build.gradle",
    "pom.xml",
    "package.json",
    "composer.json",
    "requirements.txt",
    "setup.py",
    "gulpfile.js",
    "gruntfile.js",
    "webpack.config.js",
    "rollup.config.js",
    "readme",
    "license",
    "changelog",
    "contributing",
    "gitignore",
    "gitattributes",
];

/// Whether `path` is worth tracking as a code change.
///
/// Accepts an allowlisted extension, or a file name containing one of
/// [`SPECIAL_FILE_MARKERS`] (so `README`, `Dockerfile.dev` and
/// `LICENSE-MIT` all qualify).
pub fn is_code_file(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or(path).to_lowercase();

    if let Some(ext) = Path::new(&file_name).extension().and_then(|e| e.to_str())
        && CODE_EXTENSIONS.contains(&ext)
    {
        return true;
    }

    SPECIAL_FILE_MARKERS.iter().any(|marker| file_name.contains(marker))
}

/// Code-file test plus user-configured exclude globs.
#[derive(Debug, Clone)]
pub struct ChangeSetFilter {
    exclude: GlobSet,
}

impl ChangeSetFilter {
    /// Build a filter that vetoes any path matching one of `exclude_patterns`.
    pub fn new(exclude_patterns: &[String]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { exclude: builder.build()? })
    }

    /// Filter with no excludes: only the built-in allowlist applies.
    pub fn allow_all_code() -> Self {
        Self { exclude: GlobSet::empty() }
    }

    pub fn accepts(&self, path: &str) -> bool {
        is_code_file(path) && !self.exclude.is_match(path)
    }
}

impl Default for ChangeSetFilter {
    fn default() -> Self {
        Self::allow_all_code()
    }
}
