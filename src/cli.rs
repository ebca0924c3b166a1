use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    aligners::{nw::NW, Aligner},
    expand::{ExpandConfig, InputDescription, DEFAULT_MAX_LEN},
    measure::{HostMeasure, Measure},
    result::AlignResult,
};

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

/// Globally align two sequences expanded from an input description.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(about)]
pub struct Cli {
    /// Input description: a base string and its insertion indices, then the
    /// second base string and its indices, one item per line.
    #[clap(value_parser = value_parser!(PathBuf))]
    pub input: Option<PathBuf>,

    /// Where to write cost, alignment, time and memory.
    ///
    /// A `.json` extension writes a JSON object instead of plain lines.
    #[clap(value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Reject expanded sequences longer than this.
    #[clap(long, default_value_t = DEFAULT_MAX_LEN, hide = true)]
    pub max_len: usize,
}

impl Cli {
    pub fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| DEFAULT_INPUT.into())
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| DEFAULT_OUTPUT.into())
    }

    pub fn expand_config(&self) -> ExpandConfig {
        ExpandConfig {
            max_len: self.max_len,
        }
    }
}

/// Read, expand, align, and write the result, measuring the host.
pub fn run(args: &Cli) -> Result<AlignResult> {
    run_with(args, &mut HostMeasure)
}

/// As `run`, with the given measurement hook around the alignment.
///
/// Nothing is written unless every step succeeds.
pub fn run_with(args: &Cli, measure: &mut impl Measure) -> Result<AlignResult> {
    if args.input.is_none() || args.output.is_none() {
        warn!(
            "No input/output given, using input={} output={}",
            args.input_path().display(),
            args.output_path().display()
        );
    }
    let input = args.input_path();
    let output = args.output_path();

    let description = InputDescription::from_path(&input)
        .with_context(|| format!("Failed to read input description {}", input.display()))?;
    let (a, b) = description
        .expand(&args.expand_config())
        .with_context(|| format!("Failed to expand {}", input.display()))?;
    info!("Aligning sequences of length {} and {}", a.len(), b.len());

    let nw = NW::default();
    let (r, measurement) = measure.measure(|| nw.align(&a, &b));
    let (cost, alignment) = r.context("Alignment failed")?;

    let result = AlignResult::new(cost, alignment, measurement);
    result
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(result)
}
