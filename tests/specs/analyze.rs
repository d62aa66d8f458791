// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `retest analyze`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// PATCH INPUT
// =============================================================================

#[test]
fn analyze_patch_lists_code_changes() {
    let project = Project::empty();
    retest_cmd()
        .args(["analyze", "--patch"])
        .arg(billing("changes.patch"))
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Changed files: 2 (+9 -0)"))
        .stdout(predicates::str::contains(
            "Modified src/billing/OrderService.java (+4 -0) [src/billing]",
        ))
        .stdout(predicates::str::contains("methods: calculateDiscount"))
        .stdout(predicates::str::contains(
            "Added    src/users/UserRepository.java (+5 -0) [src/users]",
        ))
        .stdout(predicates::str::contains("classes: UserRepository"))
        .stdout(predicates::str::contains("diagram.png").not());
}

#[test]
fn analyze_patch_json_output() {
    let project = Project::empty();
    let json = json_output(
        retest_cmd()
            .args(["analyze", "-o", "json", "--repository-id", "shop", "--patch"])
            .arg(billing("changes.patch"))
            .current_dir(project.path()),
    );

    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["lines_added"], 9);
    assert_eq!(json["summary"]["skipped"], 0);

    let changes = json["changes"].as_array().unwrap();
    assert_eq!(changes[0]["file_path"], "src/billing/OrderService.java");
    assert_eq!(changes[0]["change_type"], "Modified");
    assert_eq!(changes[0]["repository_id"], "shop");
    assert_eq!(changes[1]["change_type"], "Added");
    assert_eq!(changes[1]["changed_methods"], serde_json::json!(["findUser"]));
}

#[test]
fn analyze_reads_patch_from_stdin() {
    let project = Project::empty();
    let patch = std::fs::read_to_string(billing("changes.patch")).unwrap();
    assert_cmd::Command::from_std(retest_cmd())
        .args(["analyze", "--patch", "-"])
        .current_dir(project.path())
        .write_stdin(patch)
        .assert()
        .success()
        .stdout(predicates::str::contains("Changed files: 2"));
}

#[test]
fn analyze_missing_patch_file_fails() {
    let project = Project::empty();
    retest_cmd()
        .args(["analyze", "--patch", "nope.diff"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("nope.diff"));
}

#[test]
fn analyze_requires_range_or_patch() {
    retest_cmd().arg("analyze").assert().failure();
}

// =============================================================================
// GIT INPUT
// =============================================================================

fn two_commit_project() -> (Project, String, String) {
    let project = Project::empty();
    let repo = project.git_init();
    let first = project.commit(
        &repo,
        &[("src/billing/Invoice.java", "public class Invoice {\n}\n")],
        "initial",
    );
    let second = project.commit(
        &repo,
        &[
            (
                "src/billing/Invoice.java",
                "public class Invoice {\n    public long amountDue() {\n        return 0;\n    }\n}\n",
            ),
            ("assets/logo.svg", "<svg/>\n"),
        ],
        "add amountDue",
    );
    (project, first, second)
}

#[test]
fn analyze_commit_range() {
    let (project, first, second) = two_commit_project();
    let json = json_output(
        retest_cmd()
            .args(["analyze", "-o", "json", "--from", first.as_str(), "--to", second.as_str()])
            .current_dir(project.path()),
    );

    let changes = json["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["file_path"], "src/billing/Invoice.java");
    assert_eq!(changes[0]["commit_id"], second.as_str());
    assert_eq!(changes[0]["changed_methods"], serde_json::json!(["amountDue"]));
    assert_eq!(changes[0]["lines_added"], 3);
}

#[test]
fn analyze_uses_repo_flag() {
    let (project, _, _) = two_commit_project();
    let elsewhere = Project::empty();
    retest_cmd()
        .args(["analyze", "--from", "HEAD~1", "--to", "HEAD", "--repo"])
        .arg(project.path())
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("src/billing/Invoice.java"));
}

#[test]
fn analyze_same_commit_is_empty() {
    let (project, _, _) = two_commit_project();
    retest_cmd()
        .args(["analyze", "--from", "HEAD", "--to", "HEAD"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Changed files: 0 (+0 -0)"));
}

#[test]
fn analyze_invalid_reference_fails() {
    let (project, _, _) = two_commit_project();
    retest_cmd()
        .args(["analyze", "--from", "no-such-branch", "--to", "HEAD"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid reference"))
        .stderr(predicates::str::contains("no-such-branch"));
}

#[test]
fn analyze_outside_repository_fails() {
    let project = Project::empty();
    retest_cmd()
        .args(["analyze", "--from", "HEAD~1", "--to", "HEAD"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to open repository"));
}
