// Copyright (c) 2026 - present test2teamcity contributors
// SPDX-License-Identifier: MIT

//! Integration tests for teamcity-messages
//!
//! These tests replay a recorded `go test -json` transcript and check the
//! exact TeamCity output, plus the end-to-end scenarios CI relies on.

use std::path::Path;

use similar::TextDiff;
use teamcity_messages::prelude::*;
use teamcity_messages::{MessageKind, escape, evaluate};

/// Get the fixtures directory for test data
fn fixtures_dir() -> std::path::PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn translate_all(input: &str) -> String {
    let mut out = Vec::new();
    for line in input.lines() {
        process(line, &mut out).expect("writing to a Vec cannot fail");
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn process_one(line: &str) -> String {
    translate_all(line)
}

#[test]
fn test_recorded_transcript_matches_expected_output() {
    let input = std::fs::read_to_string(fixtures_dir().join("go-test-demo.jsonl"))
        .expect("Failed to read go-test-demo.jsonl fixture");
    let expected = std::fs::read_to_string(fixtures_dir().join("go-test-demo.teamcity"))
        .expect("Failed to read go-test-demo.teamcity fixture");

    let actual = translate_all(&input);
    if actual != expected {
        let diff = TextDiff::from_lines(&expected, &actual);
        panic!(
            "translated transcript differs from fixture:\n{}",
            diff.unified_diff().header("expected", "actual")
        );
    }
}

#[test]
fn test_transcript_message_counts() {
    let input = std::fs::read_to_string(fixtures_dir().join("go-test-demo.jsonl"))
        .expect("Failed to read go-test-demo.jsonl fixture");

    let messages: Vec<ServiceMessage> = input.lines().filter_map(translate).collect();
    let count = |kind: MessageKind| messages.iter().filter(|m| m.kind == kind).count();

    assert_eq!(input.lines().count(), 19);
    assert_eq!(messages.len(), 11);
    assert_eq!(count(MessageKind::TestStarted), 3);
    assert_eq!(count(MessageKind::TestFinished), 1);
    assert_eq!(count(MessageKind::TestIgnored), 1);
    assert_eq!(count(MessageKind::TestFailed), 2);
    assert_eq!(count(MessageKind::TestStdOut), 3);
    assert_eq!(count(MessageKind::TestStdErr), 1);
}

#[test]
fn test_scenario_run_record() {
    let out = process_one(
        r#"{"Time":"2018-07-07T22:58:04.6231601+03:00","Action":"run","Package":"p","Test":"T"}"#,
    );
    similar_asserts::assert_eq!(
        out,
        "##teamcity[testStarted flowId='p.T' timestamp='2018-07-07T22:58:04.623' name='p.T' captureStandardOutput='false']\n"
    );
}

#[test]
fn test_scenario_package_exit_status() {
    let out = process_one(r#"{"Action":"output","Package":"p","Output":"exit status 1\n"}"#);
    assert!(out.starts_with("##teamcity[testStdErr flowId='p' timestamp='"));
    assert!(out.ends_with(" name='p' out='exit status 1|n']\n"));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_scenario_run_banner_produces_nothing() {
    let out = process_one(r#"{"Action":"output","Package":"p","Test":"T","Output":"=== RUN   T\n"}"#);
    assert_eq!(out, "");
}

#[test]
fn test_scenario_brackets_and_pipes_in_order() {
    let message = translate(
        r#"{"Action":"output","Package":"p","Test":"T","Output":"exit status ] then | then ]|\n"}"#,
    )
    .expect("exit status emits");
    similar_asserts::assert_eq!(
        message.attribute("out"),
        Some("exit status |] then || then |]|||n")
    );
}

#[test]
fn test_indent_rule_wins_over_pass_marker_rule() {
    let line = r#"{"Action":"output","Package":"p","Test":"T","Output":"    --- PASS: foo (0.00s)\n"}"#;
    let message = translate(line).expect("indent rule emits");
    assert_eq!(message.kind, MessageKind::TestStdOut);
    similar_asserts::assert_eq!(message.attribute("out"), Some("foo (0.00s)|n"));
}

#[test]
fn test_output_lines_that_are_always_suppressed() {
    let lines = [
        "=== RUN   TestA\n",
        "=== PAUSE TestA\n",
        "=== CONT  TestA\n",
        "FAIL\n",
        "FAIL\tgithub.com/x/y\t0.079s\n",
        "?   \tgithub.com/x/y\t[no test files]\n",
    ];
    for output in lines {
        let line = serde_json::json!({
            "Action": "output",
            "Package": "p",
            "Test": "T",
            "Output": output,
        })
        .to_string();
        assert!(
            matches!(evaluate(&line), Outcome::Suppressed { .. }),
            "expected {output:?} to be suppressed"
        );
    }
}

#[test]
fn test_subtest_names() {
    let message = translate(r#"{"Action":"run","Package":"example.com/mod/pkg","Test":"TestTable/case_[1]"}"#)
        .expect("run emits");
    assert_eq!(message.name, escape("example.com/mod/pkg.TestTable/case_[1]"));
    assert_eq!(message.name, "example.com/mod/pkg.TestTable/case_|[1|]");
}

#[test]
fn test_non_json_lines_are_ignored() {
    let input = "ok  \tgithub.com/x/y\t0.010s\n{\"Action\":\"run\",\"Package\":\"p\"}\n# comment\n";
    let out = translate_all(input);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("##teamcity[testStarted flowId='p' "));
}
