//! Generate command implementation
//!
//! Synthesizes one raw PCM file. Bytes are streamed into a temporary file next
//! to the destination, which is only renamed into place once every sample was
//! encoded; a failed run never leaves a partial file behind.

mod human;
mod json;


use anyhow::Result;
use pcmgen_backend_pcm::{generate_to_writer, GenerateSummary, PcmError};
use pcmgen_spec::{
    BackendError, FormatError, GenerationParams, SampleFormat, StreamSummary, Waveform,
};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Options for one generate run, as given on the command line.
#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Waveform to synthesize.
    pub waveform: Waveform,
    /// Sample format descriptor, parsed during the run.
    pub format: &'a str,
    /// Interleaved channel count.
    pub channels: u16,
    /// Tone frequency in Hz.
    pub tone_frequency: f64,
    /// Explicit output path.
    pub output: Option<&'a str>,
    /// Directory for the default file name.
    pub out_dir: Option<&'a str>,
    /// Noise seed; drawn at random when absent.
    pub seed: Option<u32>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 invalid parameters or generation failure
pub fn run(options: &GenerateOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        json::run_json(options)
    } else {
        human::run_human(options)
    }
}

/// Failure of a generate run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The format descriptor could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Validation, encoding or I/O failed.
    #[error(transparent)]
    Pcm(#[from] PcmError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Format(e) => e.code(),
            GenerateError::Pcm(e) => e.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            GenerateError::Format(e) => e.category(),
            GenerateError::Pcm(e) => e.category(),
        }
    }
}

/// A completed run.
#[derive(Debug, Clone)]
pub(crate) struct Generated {
    pub params: GenerationParams,
    pub seed: u32,
    pub path: PathBuf,
    pub summary: GenerateSummary,
}

impl Generated {
    /// Report view of the written stream.
    pub fn stream_summary(&self) -> StreamSummary {
        StreamSummary {
            path: Some(self.path.display().to_string()),
            format: self.params.format.to_string(),
            channels: self.summary.channels,
            frames: self.summary.frames,
            bytes: self.summary.bytes_written,
            pcm_hash: self.summary.pcm_hash.clone(),
            min: self.summary.min,
            max: self.summary.max,
            mean: None,
            peak_ratio: None,
        }
    }
}

/// Resolves the command-line options into generation parameters.
pub(crate) fn build_params(options: &GenerateOptions<'_>) -> Result<GenerationParams, FormatError> {
    Ok(GenerationParams::builder()
        .sample_rate(options.sample_rate)
        .duration_seconds(options.duration_seconds)
        .waveform(options.waveform)
        .format(SampleFormat::parse(options.format)?)
        .channels(options.channels)
        .tone_frequency(options.tone_frequency)
        .build())
}

/// Picks the destination path.
///
/// A non-empty `--output` wins; otherwise the descriptive default name is
/// placed in `--out-dir` (or the current directory).
pub(crate) fn resolve_output_path(
    params: &GenerationParams,
    output: Option<&str>,
    out_dir: Option<&str>,
) -> PathBuf {
    match output.map(str::trim).filter(|o| !o.is_empty()) {
        Some(output) => PathBuf::from(output),
        None => Path::new(out_dir.unwrap_or(".")).join(params.default_file_name()),
    }
}

/// Generates `params` into `path` via a temporary sibling file.
pub(crate) fn write_atomically(
    path: &Path,
    params: &GenerationParams,
    seed: u32,
) -> Result<GenerateSummary, PcmError> {
    // Reject bad parameters before touching the filesystem.
    params.validate()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    let summary = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        generate_to_writer(params, seed, &mut writer)?
    };
    tmp.persist(path).map_err(|e| PcmError::Io(e.error))?;

    Ok(summary)
}

/// Runs the whole pipeline: parse, resolve the path, draw a seed, write.
pub(crate) fn execute(options: &GenerateOptions<'_>) -> Result<Generated, GenerateError> {
    let params = build_params(options)?;
    let path = resolve_output_path(&params, options.output, options.out_dir);
    let seed = options.seed.unwrap_or_else(rand::random);
    let summary = write_atomically(&path, &params, seed)?;

    Ok(Generated {
        params,
        seed,
        path,
        summary,
    })
}
