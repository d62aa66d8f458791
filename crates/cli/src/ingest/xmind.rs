// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! XMind mind maps.
//!
//! An `.xmind` file is a zip archive whose `content.xml` holds one topic
//! tree per sheet. Topics whose title looks like a test case become cases;
//! the titles above them form the case's path.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};
use crate::test_case::TestCase;

#[cfg(test)]
#[path = "xmind_tests.rs"]
mod tests;

const CONTENT_ENTRY: &str = "content.xml";
const CASE_TYPE: &str = "XMIND_TEST";
const PATH_SEPARATOR: &str = " -> ";
const DEFAULT_PRIORITY: u32 = 1;

const TITLE_KEYWORDS: &[&str] = &["测试", "用例", "test", "case"];

/// Numbered (`1.2 Refund`) or ticketed (`TC42`) titles.
#[allow(clippy::expect_used)]
static NUMBERED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.|tc\d+").expect("valid regex"));

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(rename = "sheet", default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Default, Deserialize)]
struct Sheet {
    topic: Option<Topic>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Topic {
    title: Option<Text>,
    notes: Option<Notes>,
    #[serde(rename = "marker-refs")]
    marker_refs: Option<MarkerRefs>,
    markers: Option<Markers>,
    children: Option<Children>,
}

#[derive(Debug, Default, Deserialize)]
struct Text {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct Notes {
    plain: Option<Text>,
}

/// XMind 8 layout: `<marker-refs><marker-ref marker-id=".."/></marker-refs>`.
#[derive(Debug, Default, Deserialize)]
struct MarkerRefs {
    #[serde(rename = "marker-ref", default)]
    refs: Vec<Marker>,
}

/// Older layout: `<markers><marker marker-id=".."/></markers>`.
#[derive(Debug, Default, Deserialize)]
struct Markers {
    #[serde(rename = "marker", default)]
    markers: Vec<Marker>,
}

#[derive(Debug, Default, Deserialize)]
struct Marker {
    #[serde(rename = "@marker-id", default)]
    id: String,
}

#[derive(Debug, Default, Deserialize)]
struct Children {
    #[serde(rename = "topics", default)]
    groups: Vec<Topics>,
}

#[derive(Debug, Default, Deserialize)]
struct Topics {
    #[serde(rename = "topic", default)]
    topics: Vec<Topic>,
}

impl Topic {
    fn title(&self) -> Option<&str> {
        self.title.as_ref().map(|t| t.value.trim()).filter(|t| !t.is_empty())
    }

    fn note(&self) -> Option<&str> {
        self.notes
            .as_ref()
            .and_then(|n| n.plain.as_ref())
            .map(|p| p.value.trim())
            .filter(|p| !p.is_empty())
    }

    fn marker_ids(&self) -> impl Iterator<Item = &str> {
        let refs = self.marker_refs.iter().flat_map(|m| &m.refs);
        let markers = self.markers.iter().flat_map(|m| &m.markers);
        refs.chain(markers).map(|m| m.id.as_str())
    }

    fn children(&self) -> impl Iterator<Item = &Topic> {
        self.children.iter().flat_map(|c| &c.groups).flat_map(|g| &g.topics)
    }
}

/// Read `content.xml` out of the archive at `path` and parse it.
pub fn load(path: &Path) -> Result<Vec<TestCase>> {
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| Error::ingest(path, e.to_string()))?;
    let mut entry = archive.by_name(CONTENT_ENTRY).map_err(|e| match e {
        ZipError::FileNotFound => Error::ingest(path, format!("{CONTENT_ENTRY} not found")),
        other => Error::ingest(path, other.to_string()),
    })?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|e| Error::io(path, e))?;
    parse(&xml, path)
}

/// Cases found in the sheets of a `content.xml` document.
pub fn parse(xml: &str, path: &Path) -> Result<Vec<TestCase>> {
    let content: Content =
        quick_xml::de::from_str(xml).map_err(|e| Error::ingest(path, e.to_string()))?;

    let mut cases = Vec::new();
    for root in content.sheets.iter().filter_map(|s| s.topic.as_ref()) {
        collect(root, "", &mut cases);
    }
    tracing::debug!(
        "{}: {} cases across {} sheets",
        path.display(),
        cases.len(),
        content.sheets.len()
    );
    Ok(cases)
}

/// Depth-first walk; untitled topics end their branch.
fn collect(topic: &Topic, parent_path: &str, cases: &mut Vec<TestCase>) {
    let Some(title) = topic.title() else {
        return;
    };
    let path = if parent_path.is_empty() {
        title.to_string()
    } else {
        format!("{parent_path}{PATH_SEPARATOR}{title}")
    };

    if is_test_title(title) {
        cases.push(TestCase {
            case_name: title.to_string(),
            case_description: Some(
                topic
                    .note()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("XMind test case: {path}")),
            ),
            case_type: Some(CASE_TYPE.to_string()),
            class_name: class_name(&path),
            method_name: Some(method_name(title)),
            covered_modules: Some(parent_path.to_string()).filter(|p| !p.is_empty()),
            priority: priority(topic.marker_ids()),
            ..TestCase::default()
        });
    }

    for child in topic.children() {
        collect(child, &path, cases);
    }
}

fn is_test_title(title: &str) -> bool {
    let lower = title.to_lowercase();
    TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) || NUMBERED_TITLE.is_match(&lower)
}

/// The parent topic's title, reduced to ASCII alphanumerics.
fn class_name(path: &str) -> Option<String> {
    let parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let parent = parts.len().checked_sub(2).map(|i| parts[i])?;
    let name: String = parent.chars().filter(char::is_ascii_alphanumeric).collect();
    Some(name).filter(|n| !n.is_empty())
}

/// Title with everything but ASCII alphanumerics and CJK ideographs replaced by `_`.
fn method_name(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Priority from the first priority-like marker: red (or priority-1) is 3,
/// orange (or priority-2) is 2.
fn priority<'a>(marker_ids: impl Iterator<Item = &'a str>) -> u32 {
    for id in marker_ids {
        if id.contains("priority-1") || id.contains("star-red") {
            return 3;
        }
        if id.contains("priority-2") || id.contains("star-orange") {
            return 2;
        }
    }
    DEFAULT_PRIORITY
}
