//! Integration tests for `depclose tree`.

use predicates::prelude::*;

use super::common::{depclose, js_project, write};

#[test]
fn tree_renders_hierarchy_with_repeat_markers() {
    let (_temp, main) = js_project();

    let output = depclose().arg("tree").arg(&main).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with("main.js"));
    assert!(lines[1].contains("├── ") && lines[1].ends_with("a.js"));
    assert!(lines[2].contains("└── ") && lines[2].ends_with("util.js"));
    assert!(lines[3].contains("└── ") && lines[3].ends_with("b.js"));
    // util.js reached again through b.js: marked as a repeat.
    assert!(lines[4].ends_with("util.js (*)"));
}

#[test]
fn tree_of_leaf_file_is_just_the_root() {
    let temp = tempfile::TempDir::new().unwrap();
    let leaf = write(temp.path(), "leaf.js", "var leaf;\n");

    let output = depclose().arg("tree").arg(&leaf).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn tree_reports_missing_dependency() {
    let temp = tempfile::TempDir::new().unwrap();
    let main = write(temp.path(), "main.js", "/**\n * @requires ghost.js\n */\n");

    depclose()
        .arg("tree")
        .arg(&main)
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
