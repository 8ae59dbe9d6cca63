//! CLI argument definitions for the pcmgen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use pcmgen_spec::{
    Waveform, DEFAULT_CHANNELS, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE,
    DEFAULT_TONE_FREQUENCY,
};

/// pcmgen - Raw PCM test-signal generator
#[derive(Parser)]
#[command(name = "pcmgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a headerless PCM file containing a pulse, sine or white-noise signal
    Generate {
        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Duration in seconds
        #[arg(short, long, default_value_t = DEFAULT_DURATION_SECONDS)]
        duration: f64,

        /// Waveform: pulse, sine, or whitenoise
        #[arg(short, long, default_value_t = Waveform::Sine)]
        waveform: Waveform,

        /// Sample format descriptor (S8, U8, S16_LE, U16_BE, S32_LE, ...)
        #[arg(short, long, default_value = "S16_LE")]
        format: String,

        /// Number of interleaved channels
        #[arg(short, long, default_value_t = DEFAULT_CHANNELS)]
        channels: u16,

        /// Tone frequency in Hz (pulse and sine)
        #[arg(short, long, default_value_t = DEFAULT_TONE_FREQUENCY)]
        tone_freq: f64,

        /// Output file path (default: descriptive name inside --out-dir)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory for the default output name (default: current directory)
        #[arg(long)]
        out_dir: Option<String>,

        /// Seed for white noise (default: random, reported after the run)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a raw PCM file and print its statistics
    Inspect {
        /// Path to the raw PCM file
        #[arg(short, long)]
        input: String,

        /// Sample format descriptor the file was written with
        #[arg(short, long)]
        format: String,

        /// Number of interleaved channels
        #[arg(short, long, default_value_t = DEFAULT_CHANNELS)]
        channels: u16,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the supported sample formats and their ranges
    Formats {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
