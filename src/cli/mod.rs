//! Command-line interface for recal-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **collect**: Parse `BaseRecalibrator` reports and write the aggregated data file
//! - **plot**: Emit the Observed Quality Scores line-plot data
//! - **show**: Print the tables of a single report
//!
//! ## Usage
//!
//! ```text
//! # Summarise reports and write multiqc_gatk_base_recalibrator.json
//! recal-report collect results/*.recal_data.table --output-dir qc/
//!
//! # Line plot data as JSON
//! recal-report plot results/*.recal_data.table --output quality_scores.json
//!
//! # One table as TSV
//! recal-report show S1.recal_data.table --section recal_table_0 --format tsv
//! ```

use clap::{Parser, Subcommand};

pub mod collect;
pub mod plot;
pub mod show;

#[derive(Parser)]
#[command(name = "recal-report")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Parse GATK BaseRecalibrator reports and prepare plot data")]
#[command(
    long_about = "recal-report reads the recalibration tables written by GATK BaseRecalibrator.\n\nIt collects one report per sample and provides:\n- A JSON data file with every parsed table\n- Per-sample quality score vs. observation counts for line plots\n- Quick inspection of individual tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse reports and summarise the samples found
    Collect(collect::CollectArgs),

    /// Emit quality score line-plot data
    Plot(plot::PlotArgs),

    /// Print the tables of one report
    Show(show::ShowArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
