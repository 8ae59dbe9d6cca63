//! Human-readable (colored) output mode for the generate command.

use anyhow::Result;
use colored::Colorize;
use pcmgen_spec::BackendError;
use std::process::ExitCode;
use std::time::Instant;

use super::{execute, GenerateOptions};

/// Run generate with human-readable (colored) output.
pub fn run_human(options: &GenerateOptions<'_>) -> Result<ExitCode> {
    let start = Instant::now();

    println!(
        "{} {} {}, {} Hz, {} ch, {} s",
        "Generating:".cyan().bold(),
        options.waveform,
        options.format,
        options.sample_rate,
        options.channels,
        options.duration_seconds
    );
    if options.waveform.uses_tone() {
        println!("{} {} Hz", "Tone:".dimmed(), options.tone_frequency);
    }

    let generated = match execute(options) {
        Ok(generated) => generated,
        Err(e) => {
            eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            return Ok(ExitCode::from(1));
        }
    };

    for warning in &generated.summary.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }

    let duration_ms = start.elapsed().as_millis();
    println!(
        "{} {} ({} frames, {} bytes) in {}ms",
        "SUCCESS".green().bold(),
        generated.path.display(),
        generated.summary.frames,
        generated.summary.bytes_written,
        duration_ms
    );
    println!(
        "  {} {}",
        "range:".dimmed(),
        format!("[{}, {}]", generated.summary.min, generated.summary.max).dimmed()
    );
    println!("  {} {}", "hash:".dimmed(), generated.summary.pcm_hash.dimmed());
    if !generated.params.waveform.uses_tone() {
        println!("  {} {}", "seed:".dimmed(), generated.seed);
    }

    Ok(ExitCode::SUCCESS)
}
