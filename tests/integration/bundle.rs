//! Integration tests for `depclose bundle`.

use std::fs;

use predicates::prelude::*;

use super::common::{depclose, js_project, write};

#[test]
fn bundle_concatenates_dependency_first() {
    let (temp, main) = js_project();
    let out = temp.path().join("dist/bundle.js");

    depclose()
        .arg("bundle")
        .arg(&main)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled 4 file(s)"));

    let bundle = fs::read_to_string(&out).unwrap();
    let util = bundle.find("var util").unwrap();
    let a = bundle.find("var a").unwrap();
    let b = bundle.find("var b").unwrap();
    let main_body = bundle.find("console.log(a + b);").unwrap();
    assert!(util < a && a < b && b < main_body);
}

#[test]
fn bundle_is_deduplicated_across_roots() {
    let temp = tempfile::TempDir::new().unwrap();
    write(temp.path(), "shared.js", "var shared;\n");
    let a = write(temp.path(), "a.js", "/**\n * @requires shared.js\n */\nvar a;\n");
    let b = write(temp.path(), "b.js", "/**\n * @requires shared.js\n */\nvar b;\n");
    let out = temp.path().join("bundle.js");

    depclose()
        .arg("bundle")
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled 3 file(s)"));

    let bundle = fs::read_to_string(&out).unwrap();
    assert_eq!(bundle.matches("var shared;").count(), 1);
}

#[test]
fn bundle_inserts_newline_between_unterminated_files() {
    let temp = tempfile::TempDir::new().unwrap();
    write(temp.path(), "dep.js", "var dep;");
    let main = write(temp.path(), "main.js", "/**\n * @requires dep.js\n */\nvar m;");
    let out = temp.path().join("bundle.js");

    depclose()
        .arg("bundle")
        .arg(&main)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let bundle = fs::read_to_string(&out).unwrap();
    assert!(bundle.contains("var dep;\n/**"));
}

#[test]
fn bundle_with_missing_dependency_still_writes_partial_output_but_fails() {
    let temp = tempfile::TempDir::new().unwrap();
    let main = write(
        temp.path(),
        "main.js",
        "/**\n * @requires ghost.js\n */\nvar m;\n",
    );
    let out = temp.path().join("bundle.js");

    depclose()
        .arg("bundle")
        .arg(&main)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));

    // The resolvable part of the closure is still bundled.
    let bundle = fs::read_to_string(&out).unwrap();
    assert!(bundle.contains("var m;"));
}
