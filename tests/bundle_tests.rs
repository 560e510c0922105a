//! Integration tests for the bundle command

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_bundle_notification_closure() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .arg("bundle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled 3 modules"));

    let output = project.read_file("dist/main.js");

    // Exactly the closure of the entry: jquery, alertifyjs, notification
    assert!(output.contains("var jQuery"));
    assert!(output.contains("var alertify"));
    assert!(output.contains("alertify.notify"));
    assert!(!output.contains("var _"));
    assert!(!output.contains("modal"));

    // Both dependencies precede the dependent
    let jquery = output.find("var jQuery").unwrap();
    let alertify = output.find("var alertify").unwrap();
    let notification = output.find("alertify.notify").unwrap();
    assert!(jquery < notification);
    assert!(alertify < notification);
}

#[test]
fn test_bundle_wraps_in_strict_iife() {
    let project = TestProject::with_example_config();

    project.cmd().arg("bundle").assert().success();

    let output = project.read_file("dist/main.js");
    assert!(output.starts_with("(function () {\n'use strict';\n"));
    assert!(output.trim_end().ends_with("}());"));
}

#[test]
fn test_bundle_strips_comments_when_optimizing() {
    let project = TestProject::with_example_config();

    project.cmd().arg("bundle").assert().success();

    let output = project.read_file("dist/main.js");
    assert!(!output.contains("/*! jQuery"));
    assert!(!output.contains("//! notifications plugin"));
    assert!(!output.contains("poll for pending notifications"));
}

#[test]
fn test_bundle_keep_license_comments() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .args(["bundle", "--keep-license-comments"])
        .assert()
        .success();

    let output = project.read_file("dist/main.js");
    assert!(output.contains("/*! jQuery v3.7.1 | MIT */"));
    assert!(output.contains("/*! alertifyjs 1.13 | MIT */"));
    assert!(output.contains("//! notifications plugin | MIT"));
    // Ordinary comments are still minified away
    assert!(!output.contains("poll for pending notifications"));
}

#[test]
fn test_bundle_no_optimize_keeps_ordinary_comments() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .args(["bundle", "--no-optimize"])
        .assert()
        .success();

    let output = project.read_file("dist/main.js");
    assert!(output.contains("poll for pending notifications"));
    // License comments still stripped unless asked for, both forms
    assert!(!output.contains("/*! jQuery"));
    assert!(!output.contains("notifications plugin | MIT"));
}

#[test]
fn test_bundle_entry_and_out_overrides() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .args(["bundle", "--entry", "bootstrap", "--out", "dist/bootstrap.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled 2 modules"));

    let output = project.read_file("dist/bootstrap.js");
    assert!(output.contains("var jQuery"));
    assert!(output.contains("modal"));
    assert!(!output.contains("alertify"));
}

#[test]
fn test_bundle_dry_run_writes_nothing() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .args(["bundle", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would bundle 3 modules"))
        .stdout(predicate::str::contains("jquery"))
        .stdout(predicate::str::contains("notification"));

    assert!(!project.file_exists("dist/main.js"));
}

#[test]
fn test_bundle_unresolved_entry() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .args(["bundle", "--entry", "mootools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundle entry 'mootools'"));

    assert!(!project.file_exists("dist/main.js"));
}

#[test]
fn test_bundle_missing_source_leaves_no_output() {
    let project = TestProject::with_example_config();
    std::fs::remove_file(
        project
            .path
            .join("scripts/lib/alertifyjs/build/alertify.js"),
    )
    .unwrap();

    project
        .cmd()
        .arg("bundle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));

    assert!(!project.file_exists("dist/main.js"));
}

#[test]
fn test_bundle_cycle_fails_before_output() {
    let project = TestProject::new();
    project.write_file(
        "shimpack.yaml",
        "paths:\n  a: lib/a\n  b: lib/b\nshim:\n  a:\n    deps: [b]\n  b:\n    deps: [a]\nbundle:\n  name: a\n  out: dist/main.js\n",
    );
    project.write_file("lib/a.js", "var a;\n");
    project.write_file("lib/b.js", "var b;\n");

    project
        .cmd()
        .arg("bundle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cyclic dependency"))
        .stderr(predicate::str::contains("a -> b -> a"));

    assert!(!project.file_exists("dist/main.js"));
}

#[test]
fn test_bundle_unknown_shim_dep_fails_before_output() {
    let project = TestProject::new();
    project.write_file(
        "shimpack.yaml",
        "paths:\n  a: lib/a\nshim:\n  a:\n    deps: [missing]\nbundle:\n  name: a\n  out: dist/main.js\n",
    );
    project.write_file("lib/a.js", "var a;\n");

    project
        .cmd()
        .arg("bundle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown module 'missing'"));

    assert!(!project.file_exists("dist/main.js"));
}

#[test]
fn test_bundle_without_section_needs_flags() {
    let project = TestProject::new();
    project.write_file("shimpack.yaml", "paths:\n  a: lib/a\n");
    project.write_file("lib/a.js", "var a;\n");

    project
        .cmd()
        .arg("bundle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no 'bundle' section"));

    project
        .cmd()
        .args(["bundle", "--entry", "a", "--out", "dist/a.js"])
        .assert()
        .success();
    assert!(project.file_exists("dist/a.js"));
}

#[test]
fn test_bundle_verbose_lists_modules() {
    let project = TestProject::with_example_config();

    project
        .cmd()
        .args(["-v", "bundle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  jquery"))
        .stdout(predicate::str::contains("  alertifyjs"))
        .stdout(predicate::str::contains("  notification"));
}
