//! End-to-end tests driving the `weft` binary over temporary projects.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn weft() -> Command {
    Command::cargo_bin("weft").expect("binary builds")
}

#[test]
fn clean_graph_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("index.js"),
        "import { greet } from './lib';\nconsole.log(greet);\n",
    )
    .unwrap();
    fs::write(dir.path().join("lib.js"), "export const greet = 'hi';\n").unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "**/*.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
}

#[test]
fn graph_issues_exit_with_code_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("index.js"),
        "import 'other';\nimport 'some-weird-path';\n",
    )
    .unwrap();
    fs::write(dir.path().join("other.js"), "").unwrap();
    fs::write(dir.path().join("util.js"), "").unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "**/*.js"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("cannot find module 'some-weird-path'")
                .and(predicate::str::contains("util"))
                .and(predicate::str::contains("module is never imported")),
        );
}

#[test]
fn config_file_supplies_sources_and_predefined_modules() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("weft.config.json"),
        r#"{ "sources": ["**/*.js"], "predefined": { "react": true } }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("index.js"),
        "import { useState } from 'react';\nuseState();\n",
    )
    .unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"issues\": []"));
}

#[test]
fn parse_failures_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.js"), "import {\n").unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "**/*.js"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken"));
}

#[test]
fn negated_patterns_exclude_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("legacy")).unwrap();
    fs::write(dir.path().join("index.js"), "import './lib';\n").unwrap();
    fs::write(dir.path().join("lib.js"), "").unwrap();
    // Would fail to parse if it were picked up.
    fs::write(dir.path().join("legacy/old.js"), "import {\n").unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "**/*.js", "!legacy/**"])
        .assert()
        .success();
}
