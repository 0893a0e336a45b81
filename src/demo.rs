// Copyright 2024 Martin Pool

//! Run each utility function on a sample input and print the results.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::circle::circle_area;
use crate::greet::greet;
use crate::parity::is_even;
use crate::prime::is_prime;
use crate::Result;

/// Inputs to the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    pub name: String,
    pub prime: i32,
    pub even: i32,
    /// If set, also show a circle's area.
    pub radius: Option<f64>,
}

impl Default for Samples {
    fn default() -> Self {
        Samples {
            name: "Alice".to_owned(),
            prime: 7,
            even: 10,
            radius: None,
        }
    }
}

/// How to print the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One value per line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Results of running the functions on some [Samples].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub greeting: String,
    pub is_prime: bool,
    pub is_even: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl Report {
    pub fn evaluate(samples: &Samples) -> Report {
        let report = Report {
            greeting: greet(&samples.name),
            is_prime: is_prime(samples.prime),
            is_even: is_even(samples.even),
            area: samples.radius.map(circle_area),
        };
        debug!(?samples, ?report, "evaluated");
        report
    }

    /// Write the report as text, one value per line.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.greeting)?;
        writeln!(out, "{}", self.is_prime)?;
        writeln!(out, "{}", self.is_even)?;
        if let Some(area) = self.area {
            writeln!(out, "{area}")?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Evaluate the samples and write the report to `out`.
pub fn run_demo<W: Write>(mut out: W, samples: &Samples, format: Format) -> Result<()> {
    let report = Report::evaluate(samples);
    let written = match format {
        Format::Text => report.write_text(&mut out),
        Format::Json => report.write_json(&mut out),
    };
    written.context("write report")?;
    out.flush().context("flush output")
}

#[cfg(test)]
mod test {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn demo_to_string(samples: &Samples, format: Format) -> String {
        let mut buf = Vec::new();
        run_demo(&mut buf, samples, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_demo_prints_three_lines() {
        assert_eq!(
            demo_to_string(&Samples::default(), Format::Text),
            "Hello, Alice!\ntrue\ntrue\n"
        );
    }

    #[test]
    fn other_samples() {
        let samples = Samples {
            name: "Bob".to_owned(),
            prime: 8,
            even: 7,
            radius: None,
        };
        assert_eq!(
            demo_to_string(&samples, Format::Text),
            indoc! { "
                Hello, Bob!
                false
                false
            " }
        );
    }

    #[test]
    fn radius_adds_a_fourth_line() {
        let samples = Samples {
            radius: Some(1.0),
            ..Samples::default()
        };
        let text = demo_to_string(&samples, Format::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], std::f64::consts::PI.to_string());
    }

    #[test]
    fn json_report() {
        let json = demo_to_string(&Samples::default(), Format::Json);
        assert!(json.ends_with('\n'));
        assert_eq!(json.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "greeting": "Hello, Alice!",
                "is_prime": true,
                "is_even": true,
            })
        );
    }

    #[test]
    fn json_report_includes_area_when_requested() {
        let samples = Samples {
            radius: Some(2.0),
            ..Samples::default()
        };
        let report = Report::evaluate(&samples);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["area"].as_f64(), report.area);
    }
}
