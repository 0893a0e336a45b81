// Copyright 2024 Martin Pool

//! Send trace messages to the terminal.
//!
//! Stdout is reserved for the report, so all tracing goes to stderr.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::prelude::*;

use crate::Result;

/// Configure tracing to write messages at or above `level` to stderr.
pub fn setup_global_trace(level: Level) -> Result<()> {
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_filter);
    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;
    Ok(())
}
