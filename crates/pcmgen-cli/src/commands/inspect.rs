//! Inspect command implementation
//!
//! Decodes an existing raw PCM file with a caller-supplied layout and prints
//! its size, range, mean, peak ratio and content hash.

use anyhow::Result;
use colored::Colorize;
use pcmgen_backend_pcm::{pcm_hash, PcmError, SampleStream};
use pcmgen_spec::{BackendError, FormatError, Report, ReportError, SampleFormat, StreamSummary};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use thiserror::Error;

/// Failure of an inspect run.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The format descriptor could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The file could not be read or decoded.
    #[error(transparent)]
    Pcm(#[from] PcmError),
}

impl BackendError for InspectError {
    fn code(&self) -> &'static str {
        match self {
            InspectError::Format(e) => e.code(),
            InspectError::Pcm(e) => e.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            InspectError::Format(e) => e.category(),
            InspectError::Pcm(e) => e.category(),
        }
    }
}

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the raw PCM file
/// * `format` - Sample format descriptor the file was written with
/// * `channels` - Interleaved channel count
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or undecodable file
pub fn run(input: &str, format: &str, channels: u16, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let result = summarize_file(Path::new(input), format, channels);

    if json_output {
        let builder = Report::builder("inspect", super::backend_version());
        let (builder, code) = match result {
            Ok(summary) => (builder.stream(summary), ExitCode::SUCCESS),
            Err(e) => (
                builder.error(ReportError::from_backend_error(&e)),
                ExitCode::from(1),
            ),
        };
        let report = builder
            .duration_ms(start.elapsed().as_millis() as u64)
            .build();
        super::print_report(&report)?;
        return Ok(code);
    }

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            return Ok(ExitCode::from(1));
        }
    };

    println!("  {:<11} {}", "format:".dimmed(), summary.format);
    println!("  {:<11} {}", "channels:".dimmed(), summary.channels);
    println!("  {:<11} {}", "frames:".dimmed(), summary.frames);
    println!("  {:<11} {}", "bytes:".dimmed(), summary.bytes);
    println!("  {:<11} [{}, {}]", "range:".dimmed(), summary.min, summary.max);
    if let Some(mean) = summary.mean {
        println!("  {:<11} {:.3}", "mean:".dimmed(), mean);
    }
    if let Some(ratio) = summary.peak_ratio {
        let ratio_text = format!("{:.4}", ratio);
        let ratio_text = if ratio > 1.0 {
            ratio_text.yellow()
        } else {
            ratio_text.normal()
        };
        println!("  {:<11} {}", "peak ratio:".dimmed(), ratio_text);
    }
    println!("  {:<11} {}", "hash:".dimmed(), summary.pcm_hash.dimmed());
    println!("{}", "SUCCESS".green().bold());

    Ok(ExitCode::SUCCESS)
}

/// Reads and decodes `path`, returning the report view of its contents.
///
/// Empty files and files that are not a whole number of frames are rejected.
pub fn summarize_file(
    path: &Path,
    format: &str,
    channels: u16,
) -> Result<StreamSummary, InspectError> {
    let format = SampleFormat::parse(format)?;
    let bytes = fs::read(path).map_err(PcmError::Io)?;
    let stream = SampleStream::from_bytes(&bytes, format, channels)?;

    let (Some(min), Some(max)) = (stream.min(), stream.max()) else {
        return Err(PcmError::decoding(format!("{} contains no samples", path.display())).into());
    };

    Ok(StreamSummary {
        path: Some(path.display().to_string()),
        format: format.to_string(),
        channels,
        frames: stream.frames(),
        bytes: bytes.len(),
        pcm_hash: pcm_hash(&bytes),
        min,
        max,
        mean: stream.mean(),
        peak_ratio: stream.peak_ratio(),
    })
}
