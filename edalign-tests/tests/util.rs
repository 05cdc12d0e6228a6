use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use edalign::{align, complement};

/// The repository root, which contains the `test_files` and `sample_config` directories.
pub fn repo_root() -> &'static Path {
    // This crate is located at "[...]/edalign/edalign-tests".
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("test crate has a parent directory")
}

/// Runs an `edalign` subcommand given as a whitespace separated string.
pub fn run_in_repo_root(args: &str) -> Result<()> {
    run(repo_args(args))
}

/// Splits a whitespace separated argument string.
///
/// Arguments pointing into `test_files/` or `sample_config/` are resolved relative to the repository root.
pub fn repo_args(args: &str) -> Vec<OsString> {
    args.split_whitespace()
        .map(|arg| {
            if arg.starts_with("test_files/") || arg.starts_with("sample_config/") {
                repo_root().join(arg).into_os_string()
            } else {
                OsString::from(arg)
            }
        })
        .collect()
}

pub fn run(args: Vec<OsString>) -> Result<()> {
    let subcommand = args
        .first()
        .and_then(|arg| arg.to_str())
        .map(str::to_string);
    match subcommand.as_deref() {
        Some("align") => align::cli(align::Cli::try_parse_from(args)?),
        Some("complement") => complement::cli(complement::Cli::try_parse_from(args)?),
        other => panic!("Unknown subcommand: {other:?}"),
    }
}

/// A unique path in the temporary directory.
pub fn temporary_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("edalign-tests-{}-{name}", std::process::id()))
}
