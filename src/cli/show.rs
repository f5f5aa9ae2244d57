use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::report::ParsedReport;
use crate::core::table::Table;
use crate::parsing::diagnostics::TracingSink;
use crate::parsing::recal::parse_recal_file;

#[derive(Args)]
pub struct ShowArgs {
    /// BaseRecalibrator report file (plain or gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Section to print (e.g. recal_table_0); lists all sections if omitted
    #[arg(short, long)]
    pub section: Option<String>,
}

/// Execute show subcommand
///
/// # Errors
///
/// Returns an error if the file cannot be read or the section is not present.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ShowArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut sink = TracingSink::new();
    let report = parse_recal_file(&args.input, &mut sink)?;

    if verbose {
        eprintln!(
            "Parsed {} sections from {} ({} warnings)",
            report.len(),
            args.input.display(),
            sink.warnings()
        );
    }

    let Some(name) = &args.section else {
        print_sections(&report, format)?;
        return Ok(());
    };

    let table = report.get(name).ok_or_else(|| {
        let available: Vec<&str> = report.section_names().collect();
        anyhow::anyhow!(
            "Section '{}' not found in {} (available: {})",
            name,
            args.input.display(),
            available.join(", ")
        )
    })?;

    match format {
        OutputFormat::Text => print_text_table(name, table),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table)?),
        OutputFormat::Tsv => print_tsv_table(table),
    }

    Ok(())
}

fn print_sections(report: &ParsedReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (name, table) in report.iter() {
                println!("{name}: {} rows x {} columns", table.len(), table.width());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Tsv => {
            println!("section\trows\tcolumns");
            for (name, table) in report.iter() {
                println!("{name}\t{}\t{}", table.len(), table.width());
            }
        }
    }
    Ok(())
}

fn print_text_table(name: &str, table: &Table) {
    println!("{name}");
    println!("{}", "=".repeat(60));

    // Pad each column to its widest cell
    let widths: Vec<usize> = table
        .columns()
        .map(|(header, cells)| {
            cells
                .iter()
                .map(|c| c.len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", format_row(table.header()).trim_end());
    for row in table.rows() {
        println!("{}", format_row(row).trim_end());
    }
}

fn print_tsv_table(table: &Table) {
    println!("{}", table.header().join("\t"));
    for row in table.rows() {
        println!("{}", row.join("\t"));
    }
}
