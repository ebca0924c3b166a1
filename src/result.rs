//! The output record of a single alignment.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::Serialize;

use crate::{aligners::alignment::Alignment, error::Result, measure::Measurement, Cost};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlignResult {
    pub cost: Cost,
    pub alignment_a: String,
    pub alignment_b: String,
    /// Wall-clock time of the alignment in milliseconds.
    pub time_ms: f64,
    /// Peak resident memory in KiB; 0 when the host does not report it.
    pub memory_kib: u64,
}

impl AlignResult {
    pub fn new(cost: Cost, alignment: Alignment, measurement: Measurement) -> Self {
        let Alignment { a, b, .. } = alignment;
        AlignResult {
            cost,
            alignment_a: a,
            alignment_b: b,
            time_ms: measurement.time_ms,
            memory_kib: measurement.memory_kib,
        }
    }

    /// Five lines: cost, both aligned strings, time, and memory.
    pub fn write_plain(&self, mut w: impl Write) -> io::Result<()> {
        writeln!(w, "{}", self.cost)?;
        writeln!(w, "{}", self.alignment_a)?;
        writeln!(w, "{}", self.alignment_b)?;
        // Debug formatting keeps the fractional part of whole numbers.
        writeln!(w, "{:?}", self.time_ms)?;
        writeln!(w, "{}", self.memory_kib)?;
        Ok(())
    }

    pub fn write_json(&self, mut w: impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)
    }

    /// Write to `path`: JSON for a `.json` extension, plain lines otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        match path.extension() {
            Some(ext) if ext == "json" => self.write_json(&mut w)?,
            _ => self.write_plain(&mut w)?,
        }
        w.flush()?;
        info!("Wrote result to {}", path.display());
        Ok(())
    }

    /// One-line summary for the terminal.
    pub fn print(&self) {
        println!(
            "cost {:>8} | length {:>7} | time {:>10.3} ms | memory {:>8} KiB",
            self.cost,
            self.alignment_a.len(),
            self.time_ms,
            self.memory_kib
        );
    }
}
