// Copyright 2024 Martin Pool

//! `warmup.toml` configuration file.
//!
//! The config file is read after parsing command line arguments, and is then
//! merged with them into [Options](crate::options::Options).

use std::fs::read_to_string;

use anyhow::Context;
use camino::Utf8Path;
use serde::Deserialize;
use tracing::debug;

use crate::circle::check_radius;
use crate::Result;

/// Name of the config file looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "warmup.toml";

/// Configuration read from a config file.
///
/// Every field is optional; anything missing falls back to the built-in
/// sample.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name to greet.
    pub name: Option<String>,
    /// Number to test for primality.
    pub prime_sample: Option<i32>,
    /// Number to test for evenness.
    pub even_sample: Option<i32>,
    /// Also show the area of a circle with this radius.
    pub radius: Option<f64>,
}

impl Config {
    pub fn read_file(path: &Utf8Path) -> Result<Config> {
        let toml = read_to_string(path).with_context(|| format!("read config {path:?}"))?;
        Config::from_toml(&toml).with_context(|| format!("parse toml from {path:?}"))
    }

    pub fn from_toml(toml: &str) -> Result<Config> {
        let config: Config = toml::de::from_str(toml)?;
        if let Some(radius) = config.radius {
            check_radius(radius)?;
        }
        Ok(config)
    }

    /// Read `warmup.toml` from `dir`, or return an empty config if there is none.
    pub fn read_dir_config(dir: &Utf8Path) -> Result<Config> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Config::read_file(&path)
        } else {
            debug!(?path, "no config file");
            Ok(Config::default())
        }
    }
}
