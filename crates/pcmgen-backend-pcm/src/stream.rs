//! Channel-interleaved integer sample streams.

use pcmgen_spec::SampleFormat;

use crate::codec;
use crate::error::{PcmError, PcmResult};

/// Quantized samples, interleaved by channel (all channels of frame 0, then
/// all channels of frame 1, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleStream {
    /// Encoding the samples are quantized for.
    pub format: SampleFormat,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Interleaved samples.
    pub samples: Vec<i64>,
}

impl SampleStream {
    /// Decodes a raw PCM buffer with the given layout.
    ///
    /// # Errors
    /// [`PcmError::Decoding`] if the buffer is not a whole number of frames.
    pub fn from_bytes(bytes: &[u8], format: SampleFormat, channels: u16) -> PcmResult<Self> {
        if channels == 0 {
            return Err(PcmError::decoding("channel count must be at least 1"));
        }
        let frame_size = format.bytes_per_sample() * channels as usize;
        if bytes.len() % frame_size != 0 {
            return Err(PcmError::decoding(format!(
                "{} bytes is not a whole number of {}-byte frames ({} x {})",
                bytes.len(),
                frame_size,
                channels,
                format
            )));
        }

        Ok(Self {
            format,
            channels,
            samples: codec::decode(bytes, format)?,
        })
    }

    /// Number of frames (time steps).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Samples of one frame, one per channel.
    pub fn frame(&self, index: usize) -> Option<&[i64]> {
        let width = self.channels as usize;
        let start = index.checked_mul(width)?;
        self.samples.get(start..start.checked_add(width)?)
    }

    /// Samples of one channel, in time order.
    pub fn channel(&self, channel: u16) -> impl Iterator<Item = i64> + '_ {
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels.max(1) as usize)
            .copied()
    }

    /// Encodes the stream into raw PCM bytes.
    pub fn to_bytes(&self) -> PcmResult<Vec<u8>> {
        codec::encode(&self.samples, self.format)
    }

    /// Size of the encoded stream in bytes.
    pub fn byte_len(&self) -> usize {
        self.samples.len() * self.format.bytes_per_sample()
    }

    /// Smallest sample, if any.
    pub fn min(&self) -> Option<i64> {
        self.samples.iter().copied().min()
    }

    /// Largest sample, if any.
    pub fn max(&self) -> Option<i64> {
        self.samples.iter().copied().max()
    }

    /// Mean sample value, if any.
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(|&s| s as f64).sum();
        Some(sum / self.samples.len() as f64)
    }

    /// Largest distance from the format midline, relative to the distance
    /// from midline to peak. Full-scale signals give 1.0.
    pub fn peak_ratio(&self) -> Option<f64> {
        let midline = self.format.midline();
        let full_scale = self.format.peak() as f64 - midline;
        self.samples
            .iter()
            .map(|&s| (s as f64 - midline).abs())
            .reduce(f64::max)
            .map(|excursion| excursion / full_scale)
    }
}

/// BLAKE3 hash of raw PCM bytes, hex-encoded.
pub fn pcm_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}
