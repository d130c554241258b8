// src/presentation.rs
use std::fmt::Write;

use county_domain::CountReport;
use county_shared_kernel::{FilePath, Result};
use serde::Serialize;

use crate::args::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    total_lines: u64,
    workers: usize,
    file_size_bytes: u64,
    file_size: String,
    elapsed_ms: u128,
    degraded_ranges: usize,
}

/// Render `report` in the requested format, without a trailing newline.
///
/// # Errors
///
/// Only JSON serialization can fail.
pub fn render(report: &CountReport, file: &FilePath, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report, file),
    }
}

pub fn render_text(report: &CountReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    Total lines: {:#}", report.total_lines);
    let _ = writeln!(out, "  Total workers: {}", report.worker_count);
    let _ = writeln!(out, "      File size: {:#}", report.file_size);
    let _ = write!(out, "   Time elapsed: {} ms", report.elapsed_millis());
    if !report.is_complete() {
        let _ = write!(out, "\nDegraded ranges: {}", report.degraded_ranges);
    }
    out
}

fn render_json(report: &CountReport, file: &FilePath) -> Result<String> {
    let name = file.to_string_lossy();
    let json = JsonReport {
        file: &name,
        total_lines: report.total_lines.value(),
        workers: report.worker_count,
        file_size_bytes: report.file_size.bytes(),
        file_size: report.file_size.to_human(),
        elapsed_ms: report.elapsed_millis(),
        degraded_ranges: report.degraded_ranges,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
