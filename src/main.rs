// Copyright 2024 Martin Pool

//! `warmup`: greet someone, test a number for primality and parity, and print
//! the results.

mod circle;
mod config;
mod console;
mod demo;
mod exit_code;
mod greet;
mod options;
mod parity;
mod prime;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::config::Config;
use crate::demo::run_demo;
use crate::options::Options;

pub type Result<T> = anyhow::Result<T>;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

/// Greet someone, and check whether a couple of numbers are prime and even.
///
/// With no arguments, prints "Hello, Alice!", whether 7 is prime, and whether
/// 10 is even, one per line.
#[derive(Parser, PartialEq, Debug)]
#[command(name = "warmup", author, about)]
pub struct Args {
    /// name to greet.
    #[arg(long)]
    name: Option<String>,

    /// number to test for primality.
    #[arg(long, allow_negative_numbers = true)]
    prime: Option<i32>,

    /// number to test for evenness.
    #[arg(long, allow_negative_numbers = true)]
    even: Option<i32>,

    /// also print the area of a circle with this radius.
    #[arg(long, allow_negative_numbers = true, value_parser = circle::parse_radius)]
    radius: Option<f64>,

    /// print the results as a JSON object.
    #[arg(long)]
    json: bool,

    /// read this config file rather than ./warmup.toml.
    #[arg(long, conflicts_with = "no_config")]
    config: Option<Utf8PathBuf>,

    /// don't read any config file.
    #[arg(long)]
    no_config: bool,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(long, short = 'L', default_value = "warn", env = "WARMUP_TRACE_LEVEL")]
    level: tracing::Level,

    /// generate autocompletions for the given shell.
    #[arg(long)]
    completions: Option<Shell>,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and errors both come through here; clap knows which stream
            // and status each should get. If even that write fails there's
            // nowhere left to report it, so the exit code has to do.
            if e.print().is_err() {
                return exit_code::code_to_exit_code(exit_code::SOFTWARE);
            }
            return exit_code::code_to_exit_code(if e.use_stderr() {
                exit_code::USAGE
            } else {
                exit_code::SUCCESS
            });
        }
    };
    if let Err(err) = console::setup_global_trace(args.level) {
        eprintln!("Error: {err:#}");
        return exit_code::code_to_exit_code(exit_code::SOFTWARE);
    }

    if args.version {
        return finish(write_version(io::stdout().lock()));
    } else if let Some(shell) = args.completions {
        return finish(write_completions(io::stdout().lock(), shell));
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return exit_code::code_to_exit_code(exit_code::BAD_CONFIG);
        }
    };
    let options = Options::new(&args, &config);
    debug!(?options);
    finish(run_demo(
        io::stdout().lock(),
        &options.samples,
        options.format,
    ))
}

/// Report an error from writing output, and choose the exit code.
fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code::code_to_exit_code(exit_code::SOFTWARE)
        }
    }
}

fn write_version<W: Write>(mut out: W) -> Result<()> {
    writeln!(out, "{NAME} {VERSION}").context("write version")?;
    out.flush().context("flush output")
}

fn write_completions<W: Write>(mut out: W, shell: Shell) -> Result<()> {
    // clap_complete panics if its writer fails, so render to memory first.
    let mut buf = Vec::new();
    generate(shell, &mut Args::command(), NAME, &mut buf);
    out.write_all(&buf).context("write completions")?;
    out.flush().context("flush output")
}

fn load_config(args: &Args) -> Result<Config> {
    let config = if args.no_config {
        Config::default()
    } else if let Some(path) = &args.config {
        Config::read_file(path)?
    } else {
        let cwd = std::env::current_dir().context("find working directory")?;
        let cwd = Utf8PathBuf::try_from(cwd).context("working directory is not UTF-8")?;
        Config::read_dir_config(&cwd)?
    };
    debug!(?config);
    Ok(config)
}
