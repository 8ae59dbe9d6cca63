//! Machine-readable run reports.
//!
//! Every CLI command can emit one [`Report`] as JSON. A report always states
//! whether the run succeeded and carries coded errors and warnings.

use serde::{Deserialize, Serialize};

use crate::error::{BackendError, ParamWarning};
use crate::params::GenerationParams;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Error entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportError {
    /// Error code (e.g., "FORMAT_003").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ReportError {
    /// Creates a new report error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Converts any coded error into a report entry.
    pub fn from_backend_error<E: BackendError + ?Sized>(err: &E) -> Self {
        Self::new(err.code(), err.message())
    }
}

/// Warning entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportWarning {
    /// Warning code (e.g., "W001").
    pub code: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ReportWarning {
    /// Creates a new report warning.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Converts a parameter warning into a report entry.
    pub fn from_param_warning(warning: &ParamWarning) -> Self {
        Self::new(warning.code.code(), warning.message.clone())
    }
}

/// Description of a PCM stream that was written or inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StreamSummary {
    /// File path, if the stream lives on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Sample format descriptor.
    pub format: String,
    /// Channel count.
    pub channels: u16,
    /// Number of frames (time steps).
    pub frames: usize,
    /// Size in bytes.
    pub bytes: usize,
    /// BLAKE3 hash of the raw PCM bytes.
    pub pcm_hash: String,
    /// Smallest sample value.
    pub min: i64,
    /// Largest sample value.
    pub max: i64,
    /// Mean sample value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Largest excursion from the midline relative to the format peak (1.0 = full scale).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_ratio: Option<f64>,
}

/// Result of one CLI command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    /// Report schema version.
    pub report_version: u32,
    /// Command that produced the report ("generate", "inspect").
    pub command: String,
    /// Whether the command succeeded without errors.
    pub ok: bool,
    /// Generation parameters, when the command generated audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<GenerationParams>,
    /// Seed used for random waveforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Summary of the produced or inspected stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamSummary>,
    /// Errors that occurred.
    pub errors: Vec<ReportError>,
    /// Warnings that were raised.
    pub warnings: Vec<ReportWarning>,
    /// Wall-clock time in milliseconds.
    pub duration_ms: u64,
    /// Tool identifier and version (e.g., "pcmgen v0.1.0").
    pub backend_version: String,
}

impl Report {
    /// Starts a report for `command`.
    pub fn builder(command: impl Into<String>, backend_version: impl Into<String>) -> ReportBuilder {
        ReportBuilder::new(command.into(), backend_version.into())
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builder for [`Report`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    command: String,
    backend_version: String,
    params: Option<GenerationParams>,
    seed: Option<u32>,
    stream: Option<StreamSummary>,
    errors: Vec<ReportError>,
    warnings: Vec<ReportWarning>,
    duration_ms: u64,
}

impl ReportBuilder {
    fn new(command: String, backend_version: String) -> Self {
        Self {
            command,
            backend_version,
            params: None,
            seed: None,
            stream: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Records the generation parameters.
    pub fn params(mut self, params: GenerationParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Records the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Records the stream summary.
    pub fn stream(mut self, stream: StreamSummary) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Adds an error.
    pub fn error(mut self, error: ReportError) -> Self {
        self.errors.push(error);
        self
    }

    /// Adds several warnings.
    pub fn warnings(mut self, warnings: impl IntoIterator<Item = ReportWarning>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    /// Sets the elapsed time.
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Builds the report; `ok` is true iff no errors were added.
    pub fn build(self) -> Report {
        Report {
            report_version: REPORT_VERSION,
            command: self.command,
            ok: self.errors.is_empty(),
            params: self.params,
            seed: self.seed,
            stream: self.stream,
            errors: self.errors,
            warnings: self.warnings,
            duration_ms: self.duration_ms,
            backend_version: self.backend_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SampleFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ok_follows_errors() {
        let report = Report::builder("generate", "pcmgen v0.1.0").build();
        assert!(report.ok);

        let report = Report::builder("generate", "pcmgen v0.1.0")
            .error(ReportError::new("PARAM_001", "bad rate"))
            .build();
        assert!(!report.ok);
    }

    #[test]
    fn test_from_backend_error() {
        let err = SampleFormat::parse("S12").unwrap_err();
        let entry = ReportError::from_backend_error(&err);
        assert_eq!(entry.code, "FORMAT_003");
        assert!(entry.message.contains("12"));
    }

    #[test]
    fn test_report_json_roundtrip() {
        let report = Report::builder("generate", "pcmgen v0.1.0")
            .params(GenerationParams::default())
            .seed(7)
            .stream(StreamSummary {
                path: Some("a.pcm".to_string()),
                format: "S16_LE".to_string(),
                channels: 1,
                frames: 8,
                bytes: 16,
                pcm_hash: "00".repeat(32),
                min: -32767,
                max: 32767,
                mean: None,
                peak_ratio: Some(1.0),
            })
            .warnings([ReportWarning::new("W001", "aliasing")])
            .duration_ms(3)
            .build();

        let json = report.to_json_pretty().unwrap();
        assert!(!json.contains("\"mean\""));
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
