// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `retest ingest`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs::File;
use std::io::Write;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::prelude::*;

#[test]
fn ingest_java_emits_one_case_per_test() {
    let json = json_output(retest_cmd().arg("ingest").arg(billing("OrderServiceTest.java")));

    let cases = json.as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["case_name"], "testCalculateDiscount");
    assert_eq!(cases[0]["class_name"], "OrderServiceTest");
    assert_eq!(cases[0]["covered_modules"], "com.shop.billing");
    assert_eq!(cases[0]["case_type"], "UNIT_TEST");
    assert_eq!(cases[0]["case_description"], "Ten percent off any amount");
    assert_eq!(cases[1]["case_description"], "Test case for testTotal");
}

#[test]
fn ingest_csv_skips_unnamed_rows() {
    let json = json_output(
        retest_cmd()
            .arg("ingest")
            .arg(billing("plan.csv"))
            .args(["--repository-id", "shop"]),
    );

    let cases = json.as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["case_name"], "Checkout discount");
    assert_eq!(cases[0]["priority"], 2);
    assert_eq!(cases[1]["case_type"], "MANUAL_TEST");
    assert!(cases.iter().all(|c| c["repository_id"] == "shop"));
}

#[test]
fn ingest_concatenates_sources() {
    let json = json_output(
        retest_cmd().arg("ingest").arg(billing("tests.json")).arg(billing("plan.csv")),
    );
    assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
fn ingest_xmind_reads_test_topics() {
    let project = Project::empty();
    let mut zip = ZipWriter::new(File::create(project.path().join("billing.xmind")).unwrap());
    zip.start_file("content.xml", SimpleFileOptions::default()).unwrap();
    zip.write_all(
        br#"<xmap-content><sheet><topic><title>Billing</title><children><topics>
            <topic><title>Refund test</title></topic>
            <topic><title>Notes</title></topic>
        </topics></children></topic></sheet></xmap-content>"#,
    )
    .unwrap();
    zip.finish().unwrap();

    let json =
        json_output(retest_cmd().args(["ingest", "billing.xmind"]).current_dir(project.path()));

    let cases = json.as_array().unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0]["case_name"], "Refund test");
    assert_eq!(cases[0]["case_type"], "XMIND_TEST");
    assert_eq!(cases[0]["class_name"], "Billing");
}

#[test]
fn ingest_rejects_unknown_format() {
    let project = Project::empty();
    project.file("plan.xlsx", "");
    retest_cmd()
        .args(["ingest", "plan.xlsx"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unsupported test source"));
}

#[test]
fn ingest_reports_malformed_json() {
    let project = Project::empty();
    project.file("cases.json", "{\"case_name\": ");
    retest_cmd()
        .args(["ingest", "cases.json"])
        .current_dir(project.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to ingest"));
}
