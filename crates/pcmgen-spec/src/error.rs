//! Error and warning types for format resolution and parameter validation.

use thiserror::Error;

/// Errors produced while resolving a sample-format descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The descriptor was empty (or only whitespace).
    #[error("empty sample format descriptor")]
    Empty,

    /// The descriptor contains no bit depth digits.
    #[error("sample format '{descriptor}' has no bit depth")]
    MissingBitDepth {
        /// The offending descriptor.
        descriptor: String,
    },

    /// The bit depth is not one of 8, 16 or 32.
    #[error("sample format '{descriptor}' has unsupported bit depth {bits} (expected 8, 16 or 32)")]
    UnsupportedBitDepth {
        /// The offending descriptor.
        descriptor: String,
        /// The parsed bit depth.
        bits: u64,
    },

    /// The descriptor contains characters outside the grammar.
    #[error("sample format '{descriptor}': unexpected '{found}' at position {position}")]
    UnexpectedInput {
        /// The offending descriptor.
        descriptor: String,
        /// Byte offset of the first unexpected character.
        position: usize,
        /// The unexpected remainder.
        found: String,
    },
}

impl BackendError for FormatError {
    fn code(&self) -> &'static str {
        match self {
            FormatError::Empty => "FORMAT_001",
            FormatError::MissingBitDepth { .. } => "FORMAT_002",
            FormatError::UnsupportedBitDepth { .. } => "FORMAT_003",
            FormatError::UnexpectedInput { .. } => "FORMAT_004",
        }
    }

    fn category(&self) -> &'static str {
        "format"
    }
}

/// Errors produced by [`GenerationParams::validate`](crate::GenerationParams::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// Sample rate is zero.
    #[error("invalid sample rate: {rate} Hz (must be > 0)")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Duration is not a finite positive number.
    #[error("invalid duration: {duration} seconds (must be > 0)")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Channel count is zero.
    #[error("invalid channel count: {channels} (must be >= 1)")]
    InvalidChannels {
        /// The invalid channel count.
        channels: u16,
    },

    /// Tone frequency is not a finite positive number.
    #[error("invalid tone frequency: {freq} Hz (must be > 0)")]
    InvalidToneFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// The requested duration is shorter than one sample period.
    #[error("{duration} seconds at {rate} Hz produces no samples")]
    NoSamples {
        /// Requested duration.
        duration: f64,
        /// Sample rate.
        rate: u32,
    },

    /// The encoded stream would not fit in addressable memory.
    #[error("{duration} seconds at {rate} Hz across {channels} channels is too large to address")]
    StreamTooLarge {
        /// Requested duration.
        duration: f64,
        /// Sample rate.
        rate: u32,
        /// Channel count.
        channels: u16,
    },
}

impl BackendError for ParamError {
    fn code(&self) -> &'static str {
        match self {
            ParamError::InvalidSampleRate { .. } => "PARAM_001",
            ParamError::InvalidDuration { .. } => "PARAM_002",
            ParamError::InvalidChannels { .. } => "PARAM_003",
            ParamError::InvalidToneFrequency { .. } => "PARAM_004",
            ParamError::NoSamples { .. } => "PARAM_005",
            ParamError::StreamTooLarge { .. } => "PARAM_006",
        }
    }

    fn category(&self) -> &'static str {
        "params"
    }
}

/// Warning codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Tone frequency at or above the Nyquist limit.
    AboveNyquist,
    /// W002: Pulse half-period is not a whole number of samples.
    IrregularPulsePeriod,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::AboveNyquist => "W001",
            WarningCode::IrregularPulsePeriod => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-fatal observation about generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
}

impl ParamWarning {
    /// Creates a new parameter warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Common trait for pcmgen errors.
///
/// Every error enum in the workspace implements this so reports can carry a
/// stable code next to the human-readable message.
///
/// # Example
///
/// ```
/// use pcmgen_spec::{BackendError, SampleFormat};
///
/// let err = "X7".parse::<SampleFormat>().unwrap_err();
/// assert_eq!(err.code(), "FORMAT_003");
/// assert_eq!(err.category(), "format");
/// ```
pub trait BackendError: std::error::Error {
    /// Stable error code, e.g. "FORMAT_001".
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category used to group related errors ("format", "params", "pcm").
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_codes_are_distinct() {
        let errors = [
            FormatError::Empty,
            FormatError::MissingBitDepth {
                descriptor: "S_LE".to_string(),
            },
            FormatError::UnsupportedBitDepth {
                descriptor: "S7".to_string(),
                bits: 7,
            },
            FormatError::UnexpectedInput {
                descriptor: "S16_XX".to_string(),
                position: 3,
                found: "_XX".to_string(),
            },
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_param_error_message() {
        let err = ParamError::InvalidDuration { duration: -1.0 };
        assert!(err.to_string().contains("-1"));
        assert_eq!(err.code(), "PARAM_002");
    }

    #[test]
    fn test_warning_display() {
        let warning = ParamWarning::new(WarningCode::AboveNyquist, "aliasing");
        assert_eq!(warning.to_string(), "W001: aliasing");
    }
}
