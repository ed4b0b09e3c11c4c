//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;

fn nexpp() -> Command {
    Command::cargo_bin("nexpp").unwrap()
}

#[test]
fn missing_project_name_is_fatal_with_suggestion() {
    nexpp()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Project name is required"))
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn invalid_mode_is_fatal() {
    nexpp()
        .args(["-n", "Demo", "-m", "invalid"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Mode argument is invalid"));
}

#[test]
fn unknown_library_names_the_token_and_lists_allowed() {
    nexpp()
        .args(["-n", "Demo", "-l", "boost"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("boost"))
        .stderr(predicate::str::contains("qt"))
        .stderr(predicate::str::contains("gtest"));
}

#[test]
fn mixed_valid_and_invalid_libraries_still_fail() {
    nexpp()
        .args(["-n", "Demo", "-l", "qt,boost"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("boost"));
}

#[test]
fn gui_mode_parses_but_is_unavailable_in_this_build() {
    nexpp()
        .args(["-n", "Demo", "-m", "gui"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("gui"));
}

#[test]
fn unknown_option_is_a_clap_error() {
    nexpp()
        .args(["-n", "Demo", "--bogus"])
        .assert()
        .failure()
        .code(2);
}
