//! End-to-end build pipeline tests
//!
//! These drive the real binary against synthetic component libraries and a
//! stub bundler script, so no actual bundler needs to be installed.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

mod common;
use common::fixtures;

/// Helper to get the bundle-split binary command
fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bundle-split"))
}

#[cfg(unix)]
#[test]
fn test_build_produces_main_and_per_component_bundles() {
    let temp = fixtures::create_component_library(&["button", "dialog"]).unwrap();
    let bundler = fixtures::install_stub_bundler(temp.path(), None).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 component(s)"))
        .stdout(predicate::str::contains("button, dialog"));

    // Main bundle at the lib root
    assert!(temp.path().join("lib/index.js").exists());
    assert!(temp.path().join("lib/style.css").exists());
    // One isolated bundle per component, no more
    assert!(temp.path().join("lib/button/index.js").exists());
    assert!(temp.path().join("lib/dialog/index.js").exists());
    // ES-module tree mirrors the source
    assert!(temp.path().join("es/index.js").exists());
    assert!(temp
        .path()
        .join("es/components/button/index.js")
        .exists());
}

#[cfg(unix)]
#[test]
fn test_build_of_empty_library_still_builds_main_bundle() {
    let temp = fixtures::create_component_library(&[]).unwrap();
    let bundler = fixtures::install_stub_bundler(temp.path(), None).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 component(s)"));

    assert!(temp.path().join("lib/index.js").exists());
    assert!(temp.path().join("es/index.js").exists());
}

#[cfg(unix)]
#[test]
fn test_build_fails_fast_on_first_component_error() {
    let temp = fixtures::create_component_library(&["button", "dialog", "menu"]).unwrap();
    // dialog is the second component in sorted order; its build fails
    let bundler = fixtures::install_stub_bundler(temp.path(), Some("dialog")).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("dialog"));

    // button (before the failure) was built; menu (after) never started
    assert!(temp.path().join("lib/button/index.js").exists());
    assert!(!temp.path().join("lib/menu").exists());
}

#[cfg(unix)]
#[test]
fn test_build_surfaces_bundler_stderr() {
    let temp = fixtures::create_component_library(&["button"]).unwrap();
    let bundler = fixtures::install_stub_bundler(temp.path(), Some("button")).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundler failed"));
}

#[test]
fn test_build_with_missing_bundler_exits_command_not_found() {
    let temp = fixtures::create_component_library(&["button"]).unwrap();
    fs::write(
        temp.path().join(".bundle-split.toml"),
        "bundler = \"definitely-missing-bundler-xyz\"\n",
    )
    .unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(127)
        .stderr(predicate::str::contains("Bundler not installed"));
}

#[cfg(unix)]
#[test]
fn test_build_with_missing_main_entry_fails() {
    let temp = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/components/button")).unwrap();
    fs::write(
        temp.path().join("src/components/button/index.js"),
        "export default {};",
    )
    .unwrap();
    let bundler = fixtures::install_stub_bundler(temp.path(), None).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point missing"));
}

#[cfg(unix)]
#[test]
fn test_rebuild_removes_stale_output() {
    let temp = fixtures::create_component_library(&["button"]).unwrap();
    let bundler = fixtures::install_stub_bundler(temp.path(), None).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    // A leftover bundle from a component that no longer exists
    fs::create_dir_all(temp.path().join("lib/ghost")).unwrap();
    fs::write(temp.path().join("lib/ghost/index.js"), "stale").unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(!temp.path().join("lib/ghost").exists());
    assert!(temp.path().join("lib/button/index.js").exists());
}

#[cfg(unix)]
#[test]
fn test_clean_removes_output_and_is_idempotent() {
    let temp = fixtures::create_component_library(&["button"]).unwrap();
    let bundler = fixtures::install_stub_bundler(temp.path(), None).unwrap();
    fixtures::write_config(temp.path(), &bundler).unwrap();

    get_bin()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(temp.path().join("lib").exists());

    get_bin()
        .arg("clean")
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(!temp.path().join("lib").exists());
    assert!(!temp.path().join("es").exists());

    // Running clean again on the already-clean tree succeeds
    get_bin()
        .arg("clean")
        .current_dir(temp.path())
        .assert()
        .success();
}
