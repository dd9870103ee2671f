//! Terminal presentation of an analysis report.

use crate::analysis::{AnalysisRecord, AnalysisReport, DEFAULT_TIMESTAMP_THRESHOLD};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Indent of table cell contents; the mask and timestamp lines use it too so
/// they line up under the sample values.
const CELL_INDENT: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Highlight names, masks and timestamps with ANSI colors.
    pub color: bool,
    /// Timestamp matches of this many digits or fewer are not shown.
    pub timestamp_threshold: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            timestamp_threshold: DEFAULT_TIMESTAMP_THRESHOLD,
        }
    }
}

/// Render every record of `report`, separated by blank lines.
pub fn render_report(report: &AnalysisReport, options: &RenderOptions) -> String {
    report
        .records
        .iter()
        .map(|record| render_record(record, &report.reference_timestamp, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one record: the sample table followed by the findings.
pub fn render_record(
    record: &AnalysisRecord,
    reference_timestamp: &str,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    let indent = " ".repeat(CELL_INDENT);

    out.push_str("Cookie values:\n");
    out.push_str(&sample_table(&record.name, record.samples.values(), options.color));

    out.push_str("Shared letters amongst all values:\n");
    let _ = writeln!(out, "{indent}{}", paint(&record.mask, options.color));

    if let Some(found) = record.timestamp_hint(options.timestamp_threshold) {
        let digits: String = reference_timestamp.chars().take(found.length).collect();
        let _ = writeln!(out, "Possible timestamp at index {}.", found.offset);
        let _ = writeln!(
            out,
            "{indent}{}{}",
            " ".repeat(found.offset),
            paint(&digits, options.color)
        );
    }

    let _ = writeln!(
        out,
        "Average Levenshtein distance between all cookies: {:.4}",
        record.mean_distance
    );
    let _ = write!(
        out,
        "Chance of hashed/encrypted/random data cookie ~{:.2}%",
        record.score
    );
    out
}

/// One-column box table with `name` as header.
fn sample_table(name: &str, values: &[String], color: bool) -> String {
    let width = values
        .iter()
        .map(|v| v.chars().count())
        .chain(std::iter::once(name.chars().count()))
        .max()
        .unwrap_or(0);
    let border = format!("+{}+\n", "-".repeat(width + CELL_INDENT));

    let mut table = border.clone();
    let pad = width - name.chars().count();
    let _ = writeln!(table, "| {}{} |", paint(name, color), " ".repeat(pad));
    table.push_str(&border);
    for value in values {
        let pad = width - value.chars().count();
        let _ = writeln!(table, "| {value}{} |", " ".repeat(pad));
    }
    table.push_str(&border);
    table
}

fn paint(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}
