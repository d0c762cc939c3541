//! Shared fixture helpers for the integration suite.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A command for the depclose binary.
pub fn depclose() -> Command {
    Command::cargo_bin("depclose").unwrap()
}

/// Write a fixture file, creating parent directories as needed.
pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// Fixture tree mirroring a classic annotated JS project:
///
/// ```text
/// main.js           @requires libs/a.js, libs/b.js
/// libs/a.js         @requires util.js   (relative to libs/)
/// libs/b.js         @requires util.js   (diamond onto the same file)
/// libs/util.js
/// ```
pub fn js_project() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "libs/util.js", "var util = {};\n");
    write(
        temp.path(),
        "libs/a.js",
        "/**\n * @requires util.js\n */\nvar a = 1;\n",
    );
    write(
        temp.path(),
        "libs/b.js",
        "/**\n * @requires util.js\n */\nvar b = 2;\n",
    );
    let main = write(
        temp.path(),
        "main.js",
        "/**\n * @requires libs/a.js\n * @requires libs/b.js\n */\nconsole.log(a + b);\n",
    );
    (temp, main)
}
