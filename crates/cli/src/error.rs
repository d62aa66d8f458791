// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Library error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building change sets, loading configuration or
/// ingesting test cases.
///
/// Scoring itself never fails: missing optional fields simply disable
/// the affected factor.
#[derive(Debug, Error)]
pub enum Error {
    /// A commit or revision identifier could not be resolved.
    #[error("invalid reference {reference:?}: {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("git: {0}")]
    Git(#[from] git2::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to ingest {}: {reason}", path.display())]
    Ingest { path: PathBuf, reason: String },

    #[error("unsupported test source {}: expected .json, .java, .csv or .xmind", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    pub fn invalid_reference(reference: &str, reason: impl Into<String>) -> Self {
        Self::InvalidReference { reference: reference.to_string(), reason: reason.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config { path: path.into(), message: message.into() }
    }

    pub fn ingest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Ingest { path: path.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
