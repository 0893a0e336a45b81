// Copyright 2024 Martin Pool

//! Effective sample inputs for the demo, from defaults, config, and arguments.

use crate::config::Config;
use crate::demo::{Format, Samples};
use crate::Args;

/// Options for one run of the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub samples: Samples,
    pub format: Format,
}

impl Options {
    /// Merge command line arguments over the config file over the defaults.
    pub fn new(args: &Args, config: &Config) -> Options {
        let defaults = Samples::default();
        Options {
            samples: Samples {
                name: args
                    .name
                    .clone()
                    .or_else(|| config.name.clone())
                    .unwrap_or(defaults.name),
                prime: args
                    .prime
                    .or(config.prime_sample)
                    .unwrap_or(defaults.prime),
                even: args.even.or(config.even_sample).unwrap_or(defaults.even),
                radius: args.radius.or(config.radius).or(defaults.radius),
            },
            format: if args.json { Format::Json } else { Format::Text },
        }
    }
}
