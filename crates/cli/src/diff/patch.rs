// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting multi-file unified diffs.
//!
//! Understands `git diff` output: sections start at `diff --git` and the
//! extended header lines (`new file mode`, `rename from`, ...) decide the
//! change type. A plain single-file `diff -u` without a git header is
//! accepted too. Paths git quotes C-style (`"a/caf\303\251.java"`) are
//! decoded.

use super::ChangeType;

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;

/// The diff text of one file, before analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFileDiff {
    /// New path, or the old path for deletions.
    pub path: String,
    pub change_type: ChangeType,
    /// Full section text, headers included.
    pub text: String,
}

#[derive(Debug)]
struct Section {
    old_path: Option<String>,
    new_path: Option<String>,
    change_type: ChangeType,
    text: String,
}

impl Section {
    fn new(old_path: Option<String>, new_path: Option<String>) -> Self {
        Self { old_path, new_path, change_type: ChangeType::Modified, text: String::new() }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn finish(self) -> Option<RawFileDiff> {
        let path = match self.change_type {
            ChangeType::Deleted => self.old_path.or(self.new_path),
            _ => self.new_path.or(self.old_path),
        }?;
        Some(RawFileDiff { path, change_type: self.change_type, text: self.text })
    }
}

/// Split a multi-file unified diff into per-file sections.
///
/// Sections whose path cannot be determined are dropped.
pub fn split_patch(patch: &str) -> Vec<RawFileDiff> {
    let mut files = Vec::new();
    let mut current: Option<Section> = None;
    let mut in_hunk = false;

    for line in patch.lines() {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            if let Some(section) = current.take() {
                files.extend(section.finish());
            }
            let (old_path, new_path) = parse_git_header(rest);
            current = Some(Section::new(old_path, new_path));
            in_hunk = false;
        } else if current.is_none() && line.starts_with("--- ") {
            current = Some(Section::new(None, None));
        }

        let Some(section) = current.as_mut() else {
            continue;
        };
        section.push_line(line);

        if line.starts_with("@@") {
            in_hunk = true;
            continue;
        }
        if in_hunk {
            continue;
        }

        if line.starts_with("new file mode") {
            section.change_type = ChangeType::Added;
        } else if line.starts_with("deleted file mode") {
            section.change_type = ChangeType::Deleted;
        } else if let Some(path) = line.strip_prefix("rename from ") {
            section.change_type = ChangeType::Renamed;
            section.old_path = Some(decode_path(path));
        } else if let Some(path) = line.strip_prefix("rename to ") {
            section.new_path = Some(decode_path(path));
        } else if let Some(path) = line.strip_prefix("copy from ") {
            section.change_type = ChangeType::Copied;
            section.old_path = Some(decode_path(path));
        } else if let Some(path) = line.strip_prefix("copy to ") {
            section.new_path = Some(decode_path(path));
        } else if let Some(path) = line.strip_prefix("--- ") {
            match header_path(path, "a/") {
                Some(p) => section.old_path = Some(p),
                None => section.change_type = ChangeType::Added,
            }
        } else if let Some(path) = line.strip_prefix("+++ ") {
            match header_path(path, "b/") {
                Some(p) => section.new_path = Some(p),
                None => section.change_type = ChangeType::Deleted,
            }
        }
    }

    if let Some(section) = current {
        files.extend(section.finish());
    }
    files
}

/// Parse `a/old b/new` from a `diff --git` line.
///
/// Either side may be quoted. Unquoted paths containing ` b/` are
/// ambiguous and split at the first occurrence.
fn parse_git_header(rest: &str) -> (Option<String>, Option<String>) {
    let (old, new) = if let Some((old, tail)) = unquote(rest) {
        let tail = tail.trim_start();
        (old, decode_path(tail))
    } else if let Some(idx) = rest.find(" \"b/") {
        let Some((new, _)) = unquote(&rest[idx + 1..]) else {
            return (None, None);
        };
        (rest[..idx].to_string(), new)
    } else if let Some((old, new)) = rest.split_once(" b/") {
        (old.to_string(), format!("b/{new}"))
    } else {
        return (None, None);
    };
    (Some(strip_side(old, "a/")), Some(strip_side(new, "b/")))
}

fn strip_side(path: String, prefix: &str) -> String {
    match path.strip_prefix(prefix) {
        Some(stripped) => stripped.to_string(),
        None => path,
    }
}

/// Path from a `---`/`+++` header; `None` for `/dev/null`.
fn header_path(raw: &str, prefix: &str) -> Option<String> {
    // Strip a trailing timestamp (`diff -u` style), separated by a tab.
    let raw = raw.split('\t').next().unwrap_or(raw).trim_end();
    if raw == "/dev/null" {
        return None;
    }
    Some(strip_side(decode_path(raw), prefix))
}

/// A path as written in a header line, quoted or not.
fn decode_path(raw: &str) -> String {
    match unquote(raw) {
        Some((path, _)) => path,
        None => raw.to_string(),
    }
}

/// Decode a leading C-style quoted string, returning it and the text after
/// the closing quote. Octal escapes are raw bytes, decoded as UTF-8.
fn unquote(s: &str) -> Option<(String, &str)> {
    let body = s.strip_prefix('"')?;
    let mut bytes = Vec::new();
    let mut chars = body.char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Some((String::from_utf8_lossy(&bytes).into_owned(), &body[idx + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                let byte = match escaped {
                    'a' => 0x07,
                    'b' => 0x08,
                    't' => b'\t',
                    'n' => b'\n',
                    'v' => 0x0b,
                    'f' => 0x0c,
                    'r' => b'\r',
                    '0'..='7' => {
                        let mut value = escaped.to_digit(8)?;
                        for _ in 0..2 {
                            match chars.clone().next() {
                                Some((_, d)) if d.is_digit(8) => {
                                    value = value * 8 + d.to_digit(8)?;
                                    chars.next();
                                }
                                _ => break,
                            }
                        }
                        u8::try_from(value).ok()?
                    }
                    other => {
                        push_char(&mut bytes, other);
                        continue;
                    }
                };
                bytes.push(byte);
            }
            other => push_char(&mut bytes, other),
        }
    }
    None
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
