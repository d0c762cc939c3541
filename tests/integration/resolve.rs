//! Integration tests for `depclose resolve`.

use predicates::prelude::*;
use std::fs;

use super::common::{depclose, js_project, write};

#[test]
fn resolve_prints_closure_dependency_first() {
    let (temp, main) = js_project();

    let output = depclose()
        .arg("resolve")
        .arg(&main)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("util.js"));
    assert!(lines[1].ends_with("a.js"));
    assert!(lines[2].ends_with("b.js"));
    assert!(lines[3].ends_with("main.js"));

    drop(temp);
}

#[test]
fn resolve_file_without_annotations_lists_only_itself() {
    let temp = tempfile::TempDir::new().unwrap();
    let plain = write(temp.path(), "plain.js", "console.log('nothing');\n");

    let output = depclose().arg("resolve").arg(&plain).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.trim_end().ends_with("plain.js"));
}

#[test]
fn resolve_missing_dependency_fails_with_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let main = write(
        temp.path(),
        "main.js",
        "/**\n * @requires ghost.js\n */\n",
    );

    depclose()
        .arg("resolve")
        .arg(&main)
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"))
        .stderr(predicate::str::contains("ghost.js"));
}

#[test]
fn resolve_circular_dependency_fails_unless_ignored() {
    let temp = tempfile::TempDir::new().unwrap();
    let a = write(temp.path(), "a.js", "/**\n * @requires b.js\n */\n");
    write(temp.path(), "b.js", "/**\n * @requires a.js\n */\n");

    depclose()
        .arg("resolve")
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("circular dependency"));

    depclose()
        .arg("resolve")
        .arg(&a)
        .arg("--ignore-circular-dependencies")
        .assert()
        .success();
}

#[test]
fn resolve_missing_root_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    depclose()
        .arg("resolve")
        .arg(temp.path().join("nope.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn resolve_custom_pattern() {
    let temp = tempfile::TempDir::new().unwrap();
    write(temp.path(), "dep.css", "body {}\n");
    let main = write(temp.path(), "main.css", "/* @import \"dep.css\" */\n");

    let output = depclose()
        .arg("resolve")
        .arg(&main)
        .arg("--pattern")
        .arg(r#"@import "(.*)""#)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.lines().next().unwrap().ends_with("dep.css"));
}

#[test]
fn resolve_exclude_filters_dependencies() {
    let (temp, main) = js_project();

    let exclude = format!("{}/libs/**", fs::canonicalize(temp.path()).unwrap().display());
    let output = depclose()
        .arg("resolve")
        .arg(&main)
        .arg("--exclude")
        .arg(&exclude)
        .output()
        .unwrap();
    assert!(output.status.success());

    // Everything under libs/ is dropped; only the root remains.
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.trim_end().ends_with("main.js"));
}

#[test]
fn resolve_search_path_and_extensions() {
    let temp = tempfile::TempDir::new().unwrap();
    write(temp.path(), "ext/x.scss", "$x: 1;\n");
    let main = write(temp.path(), "main.scss", "// @use x\n");

    let output = depclose()
        .arg("resolve")
        .arg(&main)
        .arg("--pattern")
        .arg(r"// @use (\S+)")
        .arg("--search-path")
        .arg(format!("*={}", temp.path().join("ext").display()))
        .arg("--extension")
        .arg(".scss")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().next().unwrap().ends_with("x.scss"));
}

#[test]
fn resolve_json_format() {
    let (_temp, main) = js_project();

    let output = depclose()
        .arg("resolve")
        .arg(&main)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let listings: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    let files = listings[0]["files"].as_array().unwrap();
    assert_eq!(files.len(), 4);
    assert!(files[0]["path"].as_str().unwrap().ends_with("util.js"));
    assert!(listings[0]["errors"].as_array().unwrap().is_empty());
}

#[test]
fn resolve_multiple_roots_separated_by_blank_line() {
    let temp = tempfile::TempDir::new().unwrap();
    let a = write(temp.path(), "a.js", "var a;\n");
    let b = write(temp.path(), "b.js", "var b;\n");

    let output = depclose()
        .arg("resolve")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches('\n').count(), 3);
    assert!(stdout.contains("\n\n"));
}
