// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `retest recommend`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::process::Command;

use crate::prelude::*;

fn recommend(project: &Project, tests: &[&str]) -> Command {
    let mut cmd = retest_cmd();
    cmd.arg("recommend").arg("--patch").arg(billing("changes.patch")).arg("--tests");
    for test in tests {
        cmd.arg(billing(test));
    }
    cmd.current_dir(project.path());
    cmd
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["case_name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn ranks_matching_tests_by_score() {
    let project = Project::empty();
    let json = json_output(recommend(&project, &["tests.json"]).args(["-o", "json"]));

    assert_eq!(names(&json), vec!["user lookup", "backend sweep", "order discount"]);
    assert_eq!(json["summary"]["recommended"], 3);
    assert_eq!(json["summary"]["high"], 2);
    assert_eq!(json["summary"]["medium"], 1);
    assert_eq!(json["summary"]["low"], 0);

    let top = &json["recommendations"][0];
    assert_eq!(top["impact_level"], "HIGH");
    assert!((top["match_score"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(
        top["match_reason"],
        "module match: src/users <-> src/users; class exact match: UserRepository; \
         method exact match: findUser; \
         file path match: src/users/UserRepository.java <-> src/users/UserRepository.java"
    );

    let sweep = &json["recommendations"][1];
    assert_eq!(
        sweep["match_reasons"],
        serde_json::json!(["module match: src <-> src/billing", "module match: src <-> src/users"])
    );

    let discount = &json["recommendations"][2];
    assert_eq!(discount["impact_level"], "MEDIUM");
    assert_eq!(
        discount["match_reasons"][1],
        "test method targets business method: testCalculateDiscount -> calculateDiscount"
    );
}

#[test]
fn text_output_shows_tiers_and_reasons() {
    let project = Project::empty();
    recommend(&project, &["tests.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Recommended tests: 3 (HIGH 2, MEDIUM 1, LOW 0)"))
        .stdout(predicates::str::contains("[HIGH] user lookup (1.00)"))
        .stdout(predicates::str::contains("[MEDIUM] order discount (0.60)"))
        .stdout(predicates::str::contains("      class exact match: UserRepository"))
        .stdout(predicates::str::contains("login smoke").not());
}

#[test]
fn min_level_filters_lower_tiers() {
    let project = Project::empty();
    let json = json_output(
        recommend(&project, &["tests.json"]).args(["--min-level", "high", "-o", "json"]),
    );
    assert_eq!(names(&json), vec!["user lookup", "backend sweep"]);
}

#[test]
fn limit_truncates_ranking() {
    let project = Project::empty();
    let json = json_output(recommend(&project, &["tests.json"]).args(["--limit", "1", "-o", "json"]));
    assert_eq!(names(&json), vec!["user lookup"]);
}

#[test]
fn combines_java_and_csv_sources() {
    let project = Project::empty();
    let json = json_output(
        recommend(&project, &["OrderServiceTest.java", "plan.csv"]).args(["-o", "json"]),
    );

    assert_eq!(names(&json), vec!["Checkout discount", "testCalculateDiscount"]);
    let checkout = &json["recommendations"][0];
    assert_eq!(checkout["impact_level"], "MEDIUM");
    assert_eq!(checkout["priority"], 2);
    assert_eq!(json["recommendations"][1]["impact_level"], "LOW");
}

#[test]
fn no_matches_reports_nothing() {
    let project = Project::empty();
    project.file("cases.json", r#"[{"case_name": "unrelated", "covered_modules": "lib/x"}]"#);
    retest_cmd()
        .arg("recommend")
        .arg("--patch")
        .arg(billing("changes.patch"))
        .args(["--tests", "cases.json"])
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No recommended tests."));
}

#[test]
fn unsupported_test_source_fails() {
    let project = Project::empty();
    project.file("plan.xlsx", "binary");
    retest_cmd()
        .arg("recommend")
        .arg("--patch")
        .arg(billing("changes.patch"))
        .args(["--tests", "plan.xlsx"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported test source"));
}

#[test]
fn recommends_against_git_history() {
    let project = Project::empty();
    let repo = project.git_init();
    project.commit(&repo, &[("src/cart/Cart.java", "public class Cart {\n}\n")], "initial");
    project.commit(
        &repo,
        &[("src/cart/Cart.java", "public class Cart {\n    public void addItem(Item item) {\n    }\n}\n")],
        "add items",
    );
    project.file(
        "cases.csv",
        "name,class,method,module\nAdd to cart,Cart,testAddItem,src/cart\n",
    );

    let json = json_output(
        retest_cmd()
            .args(["recommend", "--from", "HEAD~1", "--to", "HEAD", "--tests", "cases.csv"])
            .args(["-o", "json"])
            .current_dir(project.path()),
    );

    assert_eq!(names(&json), vec!["Add to cart"]);
    // module 0.4 + method 0.2; the class line is unchanged context.
    assert_eq!(json["recommendations"][0]["impact_level"], "MEDIUM");
}
