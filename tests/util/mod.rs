// Copyright 2024 Martin Pool

#![allow(dead_code)] // rustc doesn't understand they're used by multiple crates

//! Reusable utilities for warmup integration tests.

use std::env;
use std::path::PathBuf;

use lazy_static::lazy_static;
use tempfile::TempDir;

lazy_static! {
    pub static ref MAIN_BINARY: PathBuf = assert_cmd::cargo::cargo_bin("warmup");
}

/// Build a command to run warmup, in an empty temporary directory so that
/// no stray `warmup.toml` is picked up.
///
/// The directory is returned too, and must be kept alive while the command runs.
pub fn run() -> (assert_cmd::Command, TempDir) {
    let tmp = TempDir::with_prefix("warmup-test-").unwrap();
    let mut cmd = assert_cmd::Command::new(MAIN_BINARY.as_os_str());
    cmd.current_dir(tmp.path());
    // Keep the tests hermetic even if the environment running them sets
    // the trace level.
    env::vars()
        .map(|(k, _v)| k)
        .filter(|k| k.starts_with("WARMUP_"))
        .for_each(|k| {
            cmd.env_remove(k);
        });
    (cmd, tmp)
}
