// tests/cli/smoke_tests.rs
use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PROPERTIES_BANNER: &str = "########## Properties ##########\n";
const FILES_BANNER: &str = "\n\n############# Files ############\n";

fn probe_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sandbox_probe"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_and_version_flags_still_print_the_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    for flag in ["-h", "--help", "-V", "--version"] {
        probe_in(dir.path())
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(PROPERTIES_BANNER))
            .stdout(predicate::str::ends_with(format!("{FILES_BANNER}./a.txt\n")));
    }
}

#[test]
fn properties_section_comes_first() {
    let dir = TempDir::new().unwrap();

    probe_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(PROPERTIES_BANNER))
        .stdout(predicate::function(|out: &str| out.matches(PROPERTIES_BANNER).count() == 1))
        .stdout(predicate::function(|out: &str| out.matches(FILES_BANNER).count() == 1));
}

#[test]
fn reports_environment_and_user_dir() {
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().canonicalize().unwrap();

    probe_in(dir.path())
        .env("SANDBOX_PROBE_MARKER", "42")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nSANDBOX_PROBE_MARKER: 42\n"))
        .stdout(predicate::str::contains(format!("\nuser.dir: {}\n", cwd.display())));
}

#[test]
fn multiline_environment_value_stays_on_one_line() {
    let dir = TempDir::new().unwrap();

    probe_in(dir.path())
        .env("SANDBOX_PROBE_MULTILINE", "one\ntwo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nSANDBOX_PROBE_MULTILINE: one\\ntwo\n"))
        .stdout(predicate::str::contains("\ntwo\n").not());
}

#[test]
fn empty_directory_lists_no_files() {
    let dir = TempDir::new().unwrap();

    probe_in(dir.path()).assert().success().stdout(predicate::str::ends_with(FILES_BANNER));
}

#[test]
fn lists_regular_files_recursively() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "b").unwrap();

    probe_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\n./a.txt\n"))
        .stdout(predicate::str::contains("\n./sub/b.txt\n"))
        .stdout(predicate::str::contains("\n./sub\n").not())
        .stdout(predicate::str::contains("./sub/deeper").not())
        .stdout(predicate::str::contains("IOExcetion").not());
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    probe_in(dir.path())
        .args(["whatever", "--not-a-flag", "x"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(PROPERTIES_BANNER))
        .stdout(predicate::str::ends_with(format!("{FILES_BANNER}./a.txt\n")));
}

#[test]
fn logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();

    probe_in(dir.path())
        .arg("-vv")
        .assert()
        .success()
        .stdout(predicate::str::contains("probe finished").not())
        .stderr(predicate::str::contains("probe finished"));
}
