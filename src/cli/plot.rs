use std::path::PathBuf;

use clap::Args;

use crate::cli::collect::collect_samples;
use crate::cli::OutputFormat;
use crate::parsing::diagnostics::TracingSink;
use crate::plotting::config::LinePlot;
use crate::plotting::quality::{observed_quality_scores, PLOT_NAME};

#[derive(Args)]
pub struct PlotArgs {
    /// BaseRecalibrator report files (plain or gzipped)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write the plot JSON (data and config) to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute plot subcommand
///
/// # Errors
///
/// Returns an error if the output file cannot be written or serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PlotArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut sink = TracingSink::new();
    let samples = collect_samples(&args.inputs, &mut sink);

    if samples.is_empty() {
        eprintln!("No BaseRecalibrator reports found.");
        return Ok(());
    }

    let plot = observed_quality_scores(&samples, &mut sink);

    if verbose {
        eprintln!(
            "{PLOT_NAME}: {} of {} samples have quality quantization data",
            plot.data.len(),
            samples.len()
        );
    }

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&plot)?)?;
        if verbose {
            eprintln!("Wrote plot data to {}", path.display());
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_plot(&plot),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plot)?),
        OutputFormat::Tsv => print_tsv_plot(&plot),
    }

    Ok(())
}

fn print_text_plot(plot: &LinePlot) {
    println!("{PLOT_NAME}");
    println!("{}", "=".repeat(60));
    println!("x: {}  y: {}", plot.config.xlab, plot.config.ylab);

    for (sample, points) in plot.data.iter() {
        println!("\n{sample} ({} points)", points.len());
        for (x, y) in points {
            println!("  {x:>4}  {y}");
        }
    }
}

fn print_tsv_plot(plot: &LinePlot) {
    println!("sample\t{}\t{}", plot.config.xlab, plot.config.ylab);
    for (sample, points) in plot.data.iter() {
        for (x, y) in points {
            println!("{sample}\t{x}\t{y}");
        }
    }
}
