use crate::commands::text_source;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use stealthtext_core::scanner::{scan_text_with_stats, LocatedGroup, ScanStats};
use std::fs;
use tracing::info;

/// JSON report written by `inspect --output` or printed by `inspect --json`
#[derive(Serialize, Deserialize)]
pub struct InspectReport {
    pub stats: ScanStats,
    pub groups: Vec<ReportGroup>,
    pub payload_preview: String,
}

#[derive(Serialize, Deserialize)]
pub struct ReportGroup {
    pub index: usize,
    pub carrier: String,
    pub len: usize,
}

impl From<&LocatedGroup> for ReportGroup {
    fn from(group: &LocatedGroup) -> Self {
        Self {
            index: group.index,
            carrier: group.carrier.to_string(),
            len: group.bytes.len(),
        }
    }
}

/// Scan `source` and collect the report
///
/// The preview joins the bytes of every group in order. Selectors that
/// precede the first carrier character belong to no group and are left out;
/// `stats.leading_selectors` counts them.
pub fn build_report(source: &str) -> InspectReport {
    let (groups, stats) = scan_text_with_stats(source);

    let payload: Vec<u8> = groups.iter().flat_map(|g| g.bytes.iter().copied()).collect();

    InspectReport {
        stats,
        groups: groups.iter().map(ReportGroup::from).collect(),
        payload_preview: String::from_utf8_lossy(&payload).into_owned(),
    }
}

pub fn execute(
    text: Option<&str>,
    input_file: Option<&str>,
    output: Option<&str>,
    stats_only: bool,
    json: bool,
) -> Result<()> {
    let source = text_source(text, input_file)?;

    info!("Inspecting {} bytes of text", source.len());

    let report = build_report(&source);

    if json {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize inspect report")?;
        println!("{}", json);
        return Ok(());
    }

    let stats = &report.stats;

    // Print statistics
    println!("\n=== Inspect Results ===");
    println!("Chars scanned:     {}", stats.chars_scanned);
    println!("Carrier chars:     {}", stats.carrier_chars);
    println!("Selectors found:   {}", stats.selectors_found);
    println!("Leading selectors: {}", stats.leading_selectors);
    println!("Payload bytes:     {} bytes", stats.payload_len);
    println!("Empty groups:      {}", stats.empty_groups);
    println!("Bytes per char:    {:.2}", stats.payload_ratio());
    println!();

    if stats.payload_len == 0 {
        println!("{} No hidden payload found", "✗".red());
    } else {
        println!("{} Hidden payload present", "✓".green());
    }

    if stats_only {
        return Ok(());
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize inspect report")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Inspect report written to: {}", output_path);
    } else {
        println!("\n=== Groups ===");
        for group in report.groups.iter().filter(|g| g.len > 0) {
            println!("{:?} @ char {}: {} bytes", group.carrier, group.index, group.len);
        }
        println!("\nPayload preview: {}", report.payload_preview);
    }

    Ok(())
}
