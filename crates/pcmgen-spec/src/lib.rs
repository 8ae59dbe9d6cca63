//! pcmgen Spec Library
//!
//! Types shared by the pcmgen generator and CLI: sample formats, generation
//! parameters, validation, and run reports.
//!
//! # Example
//!
//! ```
//! use pcmgen_spec::{GenerationParams, SampleFormat, Waveform};
//!
//! let params = GenerationParams::builder()
//!     .sample_rate(8000)
//!     .duration_seconds(1.0)
//!     .waveform(Waveform::Sine)
//!     .format(SampleFormat::parse("S16_LE").unwrap())
//!     .channels(1)
//!     .tone_frequency(1000.0)
//!     .build();
//!
//! assert!(params.validate().unwrap().is_empty());
//! assert_eq!(params.byte_len(), 16000);
//! ```
//!
//! # Modules
//!
//! - [`format`]: Sample format descriptors (`S16_LE`, `U8`, ...) and numeric ranges
//! - [`params`]: Generation parameters, validation, default output naming
//! - [`error`]: Coded errors and warnings
//! - [`report`]: JSON run reports

pub mod error;
pub mod format;
pub mod params;
pub mod report;

pub use error::{BackendError, FormatError, ParamError, ParamWarning, WarningCode};
pub use format::{BitDepth, ByteOrder, SampleFormat, Signedness};
pub use params::{
    GenerationParams, GenerationParamsBuilder, Waveform, DEFAULT_CHANNELS,
    DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE, DEFAULT_TONE_FREQUENCY,
};
pub use report::{Report, ReportBuilder, ReportError, ReportWarning, StreamSummary, REPORT_VERSION};
