//! Runs the `tuple-rewrite` binary against files in a temporary directory.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tuple_rewrite() -> Command {
    cargo_bin_cmd!("tuple-rewrite")
}

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write source");
    path
}

#[test]
fn help_exits_0() {
    tuple_rewrite()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("type-name"));
}

#[test]
fn rewrites_file_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "point.src", "{ var p = (1, 2);\n  { return (p, ()); } }");

    tuple_rewrite().arg(&path).args(["--type-name", "Point"]).assert().success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n    var p = new Point(1, 2);\n    {\n        return new Point(p, new Point());\n    }\n}\n"
    );
}

#[test]
fn prompts_for_type_name() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "a.src", "{ var p = (1, 2); }");

    tuple_rewrite()
        .arg(&path)
        .write_stdin("not valid\nPair\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type name: "));

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    var p = new Pair(1, 2);\n}\n");
}

#[test]
fn prompts_for_file_name() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "a.src", "{ return (x); }");

    tuple_rewrite()
        .write_stdin(format!("{}\nT\n", path.display()))
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    return new T(x);\n}\n");
}

#[test]
fn print_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let source = "{var p=(1,2);}";
    let path = write_source(&dir, "a.src", source);

    tuple_rewrite()
        .arg(&path)
        .args(["-t", "Point", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("var p = new Point(1, 2);"));

    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn dry_run_only_checks() {
    let dir = TempDir::new().unwrap();
    let source = "{ var p = (1, 2); }";
    let path = write_source(&dir, "a.src", source);

    tuple_rewrite().arg(&path).arg("--dry-run").assert().success();

    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn malformed_file_is_untouched() {
    let dir = TempDir::new().unwrap();
    let source = "{ var x = 1 }";
    let path = write_source(&dir, "bad.src", source);

    tuple_rewrite()
        .arg(&path)
        .args(["-t", "Point"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to parse"));

    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn empty_file_reports_end_of_input() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "empty.src", "");

    tuple_rewrite()
        .arg(&path)
        .args(["-t", "P"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unexpected end of input"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn good_files_still_rewritten_next_to_bad_ones() {
    let dir = TempDir::new().unwrap();
    let bad = write_source(&dir, "bad.src", "{ var x = ,; }");
    let good = write_source(&dir, "good.src", "{ var x = (1); }");

    tuple_rewrite().arg(&bad).arg(&good).args(["-t", "One"]).assert().failure();

    assert_eq!(fs::read_to_string(&bad).unwrap(), "{ var x = ,; }");
    assert_eq!(fs::read_to_string(&good).unwrap(), "{\n    var x = new One(1);\n}\n");
}

#[test]
fn rejects_bad_type_name() {
    let dir = TempDir::new().unwrap();
    let source = "{ var p = (1, 2); }";
    let path = write_source(&dir, "a.src", source);

    tuple_rewrite()
        .arg(&path)
        .args(["-t", "1abc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("not a valid type name"));

    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    tuple_rewrite()
        .arg(dir.path().join("nope.src"))
        .args(["-t", "T"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read file"));
}
