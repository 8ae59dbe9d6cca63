//! Error types for PCM generation.

use pcmgen_spec::{BackendError, ParamError, SampleFormat};
use thiserror::Error;

/// Result type for PCM operations.
pub type PcmResult<T> = Result<T, PcmError>;

/// Errors that can occur during generation, encoding or decoding.
#[derive(Debug, Error)]
pub enum PcmError {
    /// Generation parameters failed validation.
    #[error("invalid generation parameters: {0}")]
    InvalidParams(#[from] ParamError),

    /// A magnitude cannot be represented in the target format.
    #[error("cannot encode {value} as {format}")]
    Encoding {
        /// The offending magnitude.
        value: f64,
        /// Target format.
        format: SampleFormat,
    },

    /// A byte buffer is not a valid stream for the given layout.
    #[error("cannot decode PCM data: {message}")]
    Decoding {
        /// Error message.
        message: String,
    },

    /// I/O error while writing or reading samples.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PcmError {
    /// Creates an encoding error.
    pub fn encoding(value: f64, format: SampleFormat) -> Self {
        Self::Encoding { value, format }
    }

    /// Creates a decoding error.
    pub fn decoding(message: impl Into<String>) -> Self {
        Self::Decoding {
            message: message.into(),
        }
    }
}

impl BackendError for PcmError {
    fn code(&self) -> &'static str {
        match self {
            // Surface the precise parameter code.
            PcmError::InvalidParams(inner) => inner.code(),
            PcmError::Encoding { .. } => "PCM_001",
            PcmError::Decoding { .. } => "PCM_002",
            PcmError::Io(_) => "PCM_003",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            PcmError::InvalidParams(inner) => inner.category(),
            _ => "pcm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_helper() {
        let format = SampleFormat::parse("S16_LE").unwrap();
        let err = PcmError::encoding(32768.0, format);
        assert!(err.to_string().contains("32768"));
        assert!(err.to_string().contains("S16_LE"));
        assert_eq!(err.code(), "PCM_001");
    }

    #[test]
    fn test_param_codes_pass_through() {
        let err = PcmError::from(ParamError::InvalidChannels { channels: 0 });
        assert_eq!(err.code(), "PARAM_003");
        assert_eq!(err.category(), "params");
    }
}
