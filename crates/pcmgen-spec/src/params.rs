//! Generation parameters and their validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParamError, ParamWarning, WarningCode};
use crate::format::SampleFormat;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;
/// Default duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 5.0;
/// Default tone frequency in Hz.
pub const DEFAULT_TONE_FREQUENCY: f64 = 1000.0;
/// Default channel count.
pub const DEFAULT_CHANNELS: u16 = 1;

/// Waveform kinds the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// 50% duty-cycle square wave.
    Pulse,
    /// Sinusoid.
    #[default]
    Sine,
    /// Peak-normalized Gaussian white noise.
    WhiteNoise,
}

impl Waveform {
    /// All waveforms, in display order.
    pub const ALL: [Waveform; 3] = [Waveform::Pulse, Waveform::Sine, Waveform::WhiteNoise];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Pulse => "pulse",
            Waveform::Sine => "sine",
            Waveform::WhiteNoise => "whitenoise",
        }
    }

    /// Whether the waveform is driven by the tone frequency.
    pub fn uses_tone(&self) -> bool {
        !matches!(self, Waveform::WhiteNoise)
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pulse" => Ok(Waveform::Pulse),
            "sine" | "sin" => Ok(Waveform::Sine),
            "whitenoise" | "white_noise" | "noise" => Ok(Waveform::WhiteNoise),
            other => Err(format!(
                "unknown waveform '{}' (expected pulse, sine or whitenoise)",
                other
            )),
        }
    }
}

/// Everything needed to synthesize one raw PCM stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Waveform kind.
    pub waveform: Waveform,
    /// Sample encoding.
    pub format: SampleFormat,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Tone frequency in Hz (pulse and sine only).
    pub tone_frequency: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            waveform: Waveform::default(),
            format: SampleFormat::default(),
            channels: DEFAULT_CHANNELS,
            tone_frequency: DEFAULT_TONE_FREQUENCY,
        }
    }
}

impl GenerationParams {
    /// Starts a builder from the default parameters.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }

    /// Number of time steps: `floor(duration * sample_rate)`.
    ///
    /// Saturates at `usize::MAX`; [`validate`](Self::validate) rejects such streams.
    pub fn frames(&self) -> usize {
        let frames = (self.duration_seconds * self.sample_rate as f64).floor();
        if frames > 0.0 {
            frames as usize
        } else {
            0
        }
    }

    /// Total interleaved samples across all channels (saturating).
    pub fn sample_count(&self) -> usize {
        self.frames().saturating_mul(self.channels as usize)
    }

    /// Size of the encoded stream in bytes (saturating).
    pub fn byte_len(&self) -> usize {
        self.sample_count().saturating_mul(self.format.bytes_per_sample())
    }

    /// Size of the encoded stream in bytes, or `None` if it does not fit `usize`.
    pub fn checked_byte_len(&self) -> Option<usize> {
        let frames = (self.duration_seconds * self.sample_rate as f64).floor();
        if !frames.is_finite() || frames >= usize::MAX as f64 {
            return None;
        }
        self.frames()
            .checked_mul(self.channels as usize)?
            .checked_mul(self.format.bytes_per_sample())
    }

    /// Checks the parameters, returning warnings for suspicious but legal values.
    ///
    /// # Example
    /// ```
    /// use pcmgen_spec::{GenerationParams, Waveform};
    ///
    /// let params = GenerationParams::builder()
    ///     .waveform(Waveform::Sine)
    ///     .sample_rate(8000)
    ///     .tone_frequency(5000.0)
    ///     .build();
    /// let warnings = params.validate().unwrap();
    /// assert_eq!(warnings.len(), 1);
    /// ```
    pub fn validate(&self) -> Result<Vec<ParamWarning>, ParamError> {
        if self.sample_rate == 0 {
            return Err(ParamError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ParamError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if self.channels == 0 {
            return Err(ParamError::InvalidChannels {
                channels: self.channels,
            });
        }
        if self.waveform.uses_tone()
            && (!self.tone_frequency.is_finite() || self.tone_frequency <= 0.0)
        {
            return Err(ParamError::InvalidToneFrequency {
                freq: self.tone_frequency,
            });
        }
        if self.checked_byte_len().is_none() {
            return Err(ParamError::StreamTooLarge {
                duration: self.duration_seconds,
                rate: self.sample_rate,
                channels: self.channels,
            });
        }
        if self.frames() == 0 {
            return Err(ParamError::NoSamples {
                duration: self.duration_seconds,
                rate: self.sample_rate,
            });
        }

        let mut warnings = Vec::new();
        if self.waveform.uses_tone() {
            let nyquist = self.sample_rate as f64 / 2.0;
            if self.tone_frequency >= nyquist {
                warnings.push(ParamWarning::new(
                    WarningCode::AboveNyquist,
                    format!(
                        "tone frequency {} Hz is at or above the Nyquist limit {} Hz; the signal will alias",
                        self.tone_frequency, nyquist
                    ),
                ));
            }
        }
        if self.waveform == Waveform::Pulse {
            let half_period = self.sample_rate as f64 / self.tone_frequency / 2.0;
            if half_period.fract() != 0.0 {
                warnings.push(ParamWarning::new(
                    WarningCode::IrregularPulsePeriod,
                    format!(
                        "pulse half-period of {:.3} samples is not a whole number; toggle timing will be irregular",
                        half_period
                    ),
                ));
            }
        }

        Ok(warnings)
    }

    /// Descriptive file name encoding every parameter.
    ///
    /// `Fs_<rate>_Freq_<freq>_Channel_<n>_Format_<fmt>_Len_<dur>_Wave_<type>.pcm`,
    /// with the `Freq_<freq>_` part omitted for white noise.
    pub fn default_file_name(&self) -> String {
        let freq = if self.waveform.uses_tone() {
            format!("Freq_{}_", self.tone_frequency)
        } else {
            String::new()
        };
        format!(
            "Fs_{}_{}Channel_{}_Format_{}_Len_{}_Wave_{}.pcm",
            self.sample_rate, freq, self.channels, self.format, self.duration_seconds, self.waveform
        )
    }
}

/// Fluent builder for [`GenerationParams`].
#[derive(Debug, Clone, Default)]
pub struct GenerationParamsBuilder {
    params: GenerationParams,
}

impl GenerationParamsBuilder {
    /// Sets the sample rate in Hz.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.params.sample_rate = sample_rate;
        self
    }

    /// Sets the duration in seconds.
    pub fn duration_seconds(mut self, duration_seconds: f64) -> Self {
        self.params.duration_seconds = duration_seconds;
        self
    }

    /// Sets the waveform kind.
    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.params.waveform = waveform;
        self
    }

    /// Sets the sample encoding.
    pub fn format(mut self, format: SampleFormat) -> Self {
        self.params.format = format;
        self
    }

    /// Sets the channel count.
    pub fn channels(mut self, channels: u16) -> Self {
        self.params.channels = channels;
        self
    }

    /// Sets the tone frequency in Hz.
    pub fn tone_frequency(mut self, tone_frequency: f64) -> Self {
        self.params.tone_frequency = tone_frequency;
        self
    }

    /// Finishes the builder. Validation is left to [`GenerationParams::validate`].
    pub fn build(self) -> GenerationParams {
        self.params
    }
}
