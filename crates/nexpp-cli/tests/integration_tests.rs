//! Integration tests for nexpp-cli.
//!
//! These drive the real binary end to end: arguments in, project tree and
//! exit code out.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn nexpp() -> Command {
    Command::cargo_bin("nexpp").unwrap()
}

#[test]
fn help_flag_lists_options() {
    nexpp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--destination"))
        .stdout(predicate::str::contains("--libraries"))
        .stdout(predicate::str::contains("--standard"));
}

#[test]
fn version_flag_reports_cargo_version() {
    nexpp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn scaffold_creates_project_tree() {
    let temp = TempDir::new().unwrap();

    nexpp()
        .args(["-n", "Demo", "-d"])
        .arg(temp.path())
        .args(["-s", "17", "-f"])
        .assert()
        .success();

    let root = temp.path().join("Demo");
    assert!(root.join("src/main.cpp").exists());
    assert!(root.join("include/Demo").is_dir());

    let cmake = std::fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains("project(Demo)"));
    assert!(cmake.contains("set(CMAKE_CXX_STANDARD 17)"));
    assert!(cmake.contains("-Wall"));
    assert!(cmake.contains("-Wimplicit-fallthrough"));
}

#[test]
fn without_flags_manifest_has_no_strict_section() {
    let temp = TempDir::new().unwrap();

    nexpp()
        .args(["-n", "Plain", "-d"])
        .arg(temp.path())
        .assert()
        .success();

    let cmake = std::fs::read_to_string(temp.path().join("Plain/CMakeLists.txt")).unwrap();
    assert!(!cmake.contains("target_compile_options"));
    assert!(cmake.contains("set(CMAKE_CXX_STANDARD 23)"));
}

#[test]
fn missing_destination_defaults_to_cwd_with_notice() {
    let temp = TempDir::new().unwrap();

    nexpp()
        .current_dir(temp.path())
        .args(["-n", "Here"])
        .assert()
        .success()
        .stdout(predicate::str::contains("current directory"));

    assert!(temp.path().join("Here/CMakeLists.txt").exists());
}

#[test]
fn unrecognized_standard_falls_back_with_notice() {
    let temp = TempDir::new().unwrap();

    nexpp()
        .args(["-n", "Fallback", "-d"])
        .arg(temp.path())
        .args(["-s", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("falling back to C++23"));

    let cmake = std::fs::read_to_string(temp.path().join("Fallback/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("set(CMAKE_CXX_STANDARD 23)"));
}

#[test]
fn accepted_libraries_are_validated_silently() {
    let temp = TempDir::new().unwrap();

    nexpp()
        .args(["-n", "WithLibs", "-d"])
        .arg(temp.path())
        .args(["-l", "qt,gtest"])
        .assert()
        .success();

    assert!(temp.path().join("WithLibs/CMakeLists.txt").exists());
}

#[test]
fn existing_project_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("Taken")).unwrap();

    nexpp()
        .args(["-n", "Taken", "-d"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn quiet_run_suppresses_chrome_but_still_scaffolds() {
    let temp = TempDir::new().unwrap();

    nexpp()
        .args(["--quiet", "-n", "Silent", "-d"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("Silent/CMakeLists.txt").exists());
}
