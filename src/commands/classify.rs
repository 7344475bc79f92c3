//! Classify command implementation.
//!
//! Runs the pipeline through classification only and writes a JSON report of
//! the result. The report is a diagnostic surface for vocabulary and coverage
//! gaps; the generated fragments themselves come from the generate command
//! and stay timestamp-free.

use super::generate::{build_registry, GenerateArgs};
use crate::classifier::ClassifiedRegistry;
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::ReportError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the classify command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ClassifyArgs {
    /// Pipeline inputs, shared with the generate command
    pub pipeline: GenerateArgs,

    /// Output path for the JSON report (stdout when absent)
    pub output: Option<PathBuf>,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

/// Classification report written by the classify command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Report schema version
    pub version: String,

    /// Per-category function listings, in precedence order
    pub categories: Vec<CategoryReport>,

    /// Functions whose event sets matched no category
    pub unclassified: Vec<FunctionReport>,

    /// ISO 8601 generation timestamp
    pub generated_at: String,
}

/// One category's classified functions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    /// Generated macro name of the category
    pub category: String,

    /// Functions assigned to the category, in discovery order
    pub functions: Vec<FunctionReport>,
}

/// One wrapper function and its observed events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionReport {
    /// Wrapped function name
    pub name: String,

    /// Observed event identifiers, sorted
    pub events: Vec<String>,
}

/// Execute the classify command
///
/// **Public** - main entry point called from main.rs
pub fn execute_classify(args: ClassifyArgs) -> Result<()> {
    let registry = build_registry(&args.pipeline)?;
    let report = build_report(&registry);

    match &args.output {
        Some(path) => {
            write_report(&report, path).context("Failed to write classification report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout().lock();
            serde_json::to_writer_pretty(stdout, &report)
                .context("Failed to write classification report")?;
            println!();
        }
    }

    if args.print_summary {
        print_summary(&report);
    }

    Ok(())
}

/// Convert a registry into the report form
///
/// **Public** - also used by tests
pub fn build_report(registry: &ClassifiedRegistry) -> ClassificationReport {
    let categories = registry
        .iter()
        .map(|(category, functions)| CategoryReport {
            category: category.macro_name().to_string(),
            functions: functions
                .iter()
                .map(|(name, events)| FunctionReport {
                    name: name.clone(),
                    events: events.iter().cloned().collect(),
                })
                .collect(),
        })
        .collect();

    let unclassified = registry
        .unclassified()
        .iter()
        .map(|(name, events)| FunctionReport {
            name: name.clone(),
            events: events.iter().cloned().collect(),
        })
        .collect();

    ClassificationReport {
        version: REPORT_VERSION.to_string(),
        categories,
        unclassified,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Write the report as pretty-printed JSON
///
/// **Private** - internal helper for execute_classify
fn write_report(report: &ClassificationReport, path: &PathBuf) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Print a human-readable summary of the report
///
/// **Private** - internal helper for execute_classify
fn print_summary(report: &ClassificationReport) {
    println!("\n{}", "=".repeat(80));
    println!("CLASSIFICATION SUMMARY");
    println!("{}", "=".repeat(80));

    for category in &report.categories {
        println!("{}: {} functions", category.category, category.functions.len());
        for function in &category.functions {
            println!("  {} ({} events)", function.name, function.events.len());
        }
    }

    if !report.unclassified.is_empty() {
        println!("\nUnclassified: {}", report.unclassified.len());
        for function in &report.unclassified {
            println!("  {} : {:?}", function.name, function.events);
        }
    }

    println!("{}", "=".repeat(80));
}
