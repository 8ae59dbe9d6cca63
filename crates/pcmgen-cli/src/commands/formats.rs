//! Formats command implementation
//!
//! Lists every supported sample format with the integer levels the
//! generators use for it.

use anyhow::Result;
use colored::Colorize;
use pcmgen_spec::SampleFormat;
use serde::Serialize;
use std::process::ExitCode;

/// One row of the format table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatInfo {
    /// Canonical descriptor.
    pub descriptor: String,
    /// Bits per sample.
    pub bits: u32,
    /// Bytes per sample.
    pub bytes: usize,
    /// Whether samples are signed.
    pub signed: bool,
    /// Highest level a generator emits.
    pub peak: i64,
    /// Lowest level a generator emits.
    pub bottom: i64,
    /// Resting level for unsigned formats, zero for signed.
    pub midline: f64,
    /// Smallest value the container can hold.
    pub min_value: i64,
    /// Largest value the container can hold.
    pub max_value: i64,
}

impl From<SampleFormat> for FormatInfo {
    fn from(format: SampleFormat) -> Self {
        Self {
            descriptor: format.to_string(),
            bits: format.bit_depth.bits(),
            bytes: format.bytes_per_sample(),
            signed: format.is_signed(),
            peak: format.peak(),
            bottom: format.bottom(),
            midline: format.midline(),
            min_value: format.min_value(),
            max_value: format.max_value(),
        }
    }
}

/// Rows for every supported format.
pub fn format_table() -> Vec<FormatInfo> {
    SampleFormat::ALL.into_iter().map(FormatInfo::from).collect()
}

/// Run the formats command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(json_output: bool) -> Result<ExitCode> {
    let table = format_table();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Supported formats:".cyan().bold());
    for info in &table {
        println!(
            "  {:<7} {} {}-bit {:<8} peak {:>11} bottom {:>11}",
            info.descriptor.bold(),
            "|".dimmed(),
            info.bits,
            if info.signed { "signed" } else { "unsigned" },
            info.peak,
            info.bottom
        );
    }
    println!(
        "{}",
        "8-bit formats take no byte-order suffix; a missing sign means signed, a missing order means _LE."
            .dimmed()
    );

    Ok(ExitCode::SUCCESS)
}
