use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::samples::SampleReportSet;
use crate::output::data_file::ReportDataFile;
use crate::parsing::diagnostics::{DiagnosticSink, TracingSink};
use crate::parsing::recal::parse_recal_file;
use crate::utils::validation::sample_name_from_path;

#[derive(Args)]
pub struct CollectArgs {
    /// BaseRecalibrator report files (plain or gzipped)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory to write multiqc_gatk_base_recalibrator.json into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Execute collect subcommand
///
/// # Errors
///
/// Returns an error if the data file cannot be written or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CollectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut sink = TracingSink::new();
    let samples = collect_samples(&args.inputs, &mut sink);

    if verbose {
        eprintln!(
            "Parsed {} of {} input files ({} warnings)",
            samples.len(),
            args.inputs.len(),
            sink.warnings()
        );
    }

    if samples.is_empty() {
        eprintln!("No BaseRecalibrator reports found.");
        return Ok(());
    }

    info!("Found {} BaseRecalibrator reports", samples.len());

    if let Some(dir) = &args.output_dir {
        let path = ReportDataFile::new(&samples).write_to_dir(dir)?;
        if verbose {
            eprintln!("Wrote data file to {}", path.display());
        }
    }

    match format {
        OutputFormat::Text => print_text_summary(&samples),
        OutputFormat::Json => print_json_summary(&samples)?,
        OutputFormat::Tsv => print_tsv_summary(&samples),
    }

    Ok(())
}

/// Parse every input into a sample set.
///
/// Files that cannot be read or named are skipped with a warning, so one bad
/// file never aborts the batch. Sample names come from the file names.
pub fn collect_samples(inputs: &[PathBuf], sink: &mut dyn DiagnosticSink) -> SampleReportSet {
    let mut samples = SampleReportSet::new();

    for path in inputs {
        let Some(sample) = sample_name_from_path(path) else {
            warn!("Cannot derive a sample name from {}, skipping", path.display());
            continue;
        };

        match parse_recal_file(path, sink) {
            Ok(report) => {
                samples.accept(sample, Some(source_name(path)), report, sink);
            }
            Err(e) => warn!("Failed to parse {}: {e}", path.display()),
        }
    }

    samples
}

fn source_name(path: &Path) -> String {
    path.display().to_string()
}

fn print_text_summary(samples: &SampleReportSet) {
    println!("BaseRecalibrator Reports");
    println!("{}", "=".repeat(60));
    println!("\nFound {} reports", samples.len());

    for (sample, report) in samples.iter() {
        println!("\n{sample}");
        if let Some(source) = samples.source(sample) {
            println!("  Source: {source}");
        }
        for (name, table) in report.iter() {
            println!("  {name}: {} rows x {} columns", table.len(), table.width());
        }
    }
}

fn print_json_summary(samples: &SampleReportSet) -> anyhow::Result<()> {
    let entries: Vec<serde_json::Value> = samples
        .iter()
        .map(|(sample, report)| {
            let sections: serde_json::Map<String, serde_json::Value> = report
                .iter()
                .map(|(name, table)| {
                    (
                        name.to_string(),
                        serde_json::json!({
                            "rows": table.len(),
                            "columns": table.header(),
                        }),
                    )
                })
                .collect();
            serde_json::json!({
                "sample": sample,
                "source": samples.source(sample),
                "sections": sections,
            })
        })
        .collect();

    let output = serde_json::json!({
        "report_count": samples.len(),
        "samples": entries,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(samples: &SampleReportSet) {
    println!("sample\tsection\trows\tcolumns");
    for (sample, report) in samples.iter() {
        for (name, table) in report.iter() {
            println!("{sample}\t{name}\t{}\t{}", table.len(), table.width());
        }
    }
}
