//! CLI output formatting.
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects. The `--json` report goes
//! through [`report_json`] instead.

use crate::presets::{CompressionLevel, SocialPreset};
use crate::stats::format_size;
use crate::workflow::{CompressionReport, ExportOutcome, SourceImage};
use clap::ValueEnum;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// CLI key for an enum value (`small-file`, `instagram-square`, ...).
fn value_key(value: &impl ValueEnum) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

// ============================================================================
// Selection
// ============================================================================

pub fn format_selection(sources: &[SourceImage], total_bytes: u64) -> Vec<String> {
    let mut lines = vec![format!(
        "Selected {} image{} ({})",
        sources.len(),
        if sources.len() == 1 { "" } else { "s" },
        format_size(total_bytes)
    )];
    for (pos, source) in sources.iter().enumerate() {
        lines.push(format!(
            "{}{} {} ({})",
            indent(1),
            format_index(pos + 1),
            file_name(&source.path),
            format_size(source.bytes)
        ));
    }
    lines
}

pub fn print_selection(sources: &[SourceImage], total_bytes: u64) {
    for line in format_selection(sources, total_bytes) {
        println!("{line}");
    }
}

// ============================================================================
// Compression report
// ============================================================================

pub fn format_report(report: &CompressionReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Compressed {} image{}",
        report.images.len(),
        if report.images.len() == 1 { "" } else { "s" }
    )];
    for (pos, image) in report.images.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(1),
            format_index(pos + 1),
            file_name(&image.source)
        ));
        lines.push(format!(
            "{}{} -> {} (saved {}%)",
            indent(2),
            format_size(image.original_bytes),
            format_size(image.compressed_bytes),
            image.savings.percent
        ));
    }
    lines.push(format!(
        "Total: {} -> {}",
        format_size(report.original_total),
        format_size(report.compressed_total)
    ));
    lines.push(format!(
        "Saved {}% ({})",
        report.savings.percent,
        format_size(report.savings.bytes)
    ));
    lines
}

pub fn print_report(report: &CompressionReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}

/// Pretty JSON rendering of a report for `--json`.
pub fn report_json(report: &CompressionReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// ============================================================================
// Export
// ============================================================================

pub fn format_export(outcome: &ExportOutcome) -> Vec<String> {
    match outcome {
        ExportOutcome::Exported { destination } => {
            vec![format!("Exported -> {}", destination.display())]
        }
        ExportOutcome::Unavailable => vec![
            "Export destination unavailable — the compressed image is ready to use".to_string(),
        ],
    }
}

pub fn print_export(outcome: &ExportOutcome) {
    for line in format_export(outcome) {
        println!("{line}");
    }
}

// ============================================================================
// Preset tables
// ============================================================================

pub fn format_presets() -> Vec<String> {
    let mut lines = vec!["Compression levels".to_string()];
    for level in CompressionLevel::ALL {
        let preset = level.preset();
        lines.push(format!(
            "{}{:<14} {:<14} quality {:.1}  {}",
            indent(1),
            value_key(&level),
            preset.label,
            preset.quality.value(),
            preset.description
        ));
    }
    lines.push(String::new());
    lines.push("Social presets (optional resize)".to_string());
    for social in SocialPreset::ALL {
        let (width, height) = social.dimensions();
        lines.push(format!(
            "{}{:<20} {:<20} {}x{}",
            indent(1),
            value_key(&social),
            social.label(),
            width,
            height
        ));
    }
    lines
}

pub fn print_presets() {
    for line in format_presets() {
        println!("{line}");
    }
}
