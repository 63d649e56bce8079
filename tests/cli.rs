#![deny(rust_2018_idioms)]
use std::fs;
use std::process::Command;
use tempdir::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_prepare-cmake-config");

#[test]
fn test_no_arguments_fails() {
    let output = Command::new(BIN).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_one_argument_fails() {
    let output = Command::new(BIN).arg("config.h.in").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_extra_argument_fails_before_any_io() {
    let dir = TempDir::new("prepare-cmake-config").unwrap();
    let input = dir.path().join("config.h.in");
    let result = dir.path().join("config.h.cmake");
    fs::write(&input, "#undef HAVE_FOO\n").unwrap();

    let output = Command::new(BIN)
        .args([&input, &result, &dir.path().join("extra")])
        .output()
        .unwrap();

    assert!(!output.status.success());
    // The argument check happens before any file is opened
    assert!(!result.exists());
}

#[test]
fn test_rewrites_template() {
    let dir = TempDir::new("prepare-cmake-config").unwrap();
    let input = dir.path().join("config.h.in");
    let result = dir.path().join("config.h.cmake");
    fs::write(&input, "#undef HAVE_FOO\n// #undef HAVE_FOO\n").unwrap();

    let output = Command::new(BIN).args([&input, &result]).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&result).unwrap(),
        "#cmakedefine HAVE_FOO @HAVE_FOO@\n// #undef HAVE_FOO\n"
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new("prepare-cmake-config").unwrap();
    let output = Command::new(BIN)
        .args([
            &dir.path().join("does-not-exist.h.in"),
            &dir.path().join("config.h.cmake"),
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
