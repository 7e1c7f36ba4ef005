//! Report command - Render a saved performance report

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::q_learning::PerformanceReport;

#[derive(Parser, Debug)]
#[command(about = "Render a saved performance report")]
pub struct ReportArgs {
    /// Path to a JSON report written by `train --summary`
    pub file: PathBuf,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    let report = PerformanceReport::load(&args.file)
        .with_context(|| format!("reading report from {}", args.file.display()))?;
    println!("{report}");
    Ok(())
}
