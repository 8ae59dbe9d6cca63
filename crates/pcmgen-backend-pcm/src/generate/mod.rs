//! Main entry point for PCM generation.
//!
//! Pulse and sine run as a single streaming pass (source → quantize →
//! encode). White noise runs generate → normalize → quantize over the whole
//! batch before anything is emitted, because normalization needs the global
//! peak.


use std::io::Write;

use pcmgen_spec::{GenerationParams, ParamWarning, SampleFormat, Waveform};

use crate::codec;
use crate::error::PcmResult;
use crate::noise;
use crate::rng::create_component_rng;
use crate::source::{PulseSource, SampleSource, SineSource};
use crate::stream::SampleStream;

/// Seed derivation key for the white-noise stream.
const NOISE_SEED_KEY: &str = "white_noise";

/// Summary of a stream written by [`generate_to_writer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of frames written.
    pub frames: usize,
    /// Channels per frame.
    pub channels: u16,
    /// Total bytes written.
    pub bytes_written: usize,
    /// BLAKE3 hash of the written bytes.
    pub pcm_hash: String,
    /// Smallest sample written.
    pub min: i64,
    /// Largest sample written.
    pub max: i64,
    /// Non-fatal parameter warnings.
    pub warnings: Vec<ParamWarning>,
}

/// Generates the full quantized sample stream in memory.
///
/// # Arguments
/// * `params` - Generation parameters
/// * `seed` - RNG seed (only white noise consumes randomness)
///
/// # Example
/// ```
/// use pcmgen_backend_pcm::generate;
/// use pcmgen_spec::GenerationParams;
///
/// let params = GenerationParams::builder().duration_seconds(1.0).build();
/// let stream = generate(&params, 0).unwrap();
/// assert_eq!(stream.frames(), 8000);
/// assert_eq!(stream.samples[0], 0);
/// ```
pub fn generate(params: &GenerationParams, seed: u32) -> PcmResult<SampleStream> {
    params.validate()?;

    let channels = params.channels as usize;
    let mut samples = Vec::with_capacity(params.sample_count());
    render_frames(params, seed, |value| {
        samples.extend(std::iter::repeat(value).take(channels));
        Ok(())
    })?;

    Ok(SampleStream {
        format: params.format,
        channels: params.channels,
        samples,
    })
}

/// Generates and encodes the stream into a byte vector.
pub fn generate_bytes(params: &GenerationParams, seed: u32) -> PcmResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(params.byte_len());
    generate_to_writer(params, seed, &mut bytes)?;
    Ok(bytes)
}

/// Generates the stream and writes it frame by frame to `writer`.
///
/// Pulse and sine never hold more than one frame in memory. On error the
/// writer may already have received a prefix of the stream; callers writing
/// to files should write to a temporary location and only keep it on success.
pub fn generate_to_writer<W: Write>(
    params: &GenerationParams,
    seed: u32,
    writer: &mut W,
) -> PcmResult<GenerateSummary> {
    let warnings = params.validate()?;
    let format = params.format;

    let mut frame = Vec::with_capacity(format.bytes_per_sample() * params.channels as usize);
    let mut hasher = blake3::Hasher::new();
    let mut frames = 0usize;
    let mut bytes_written = 0usize;
    let mut min = i64::MAX;
    let mut max = i64::MIN;

    render_frames(params, seed, |value| {
        frame.clear();
        for _ in 0..params.channels {
            codec::write_sample(&mut frame, value, format)?;
        }
        writer.write_all(&frame)?;
        hasher.update(&frame);

        frames += 1;
        bytes_written += frame.len();
        min = min.min(value);
        max = max.max(value);
        Ok(())
    })?;
    writer.flush()?;

    Ok(GenerateSummary {
        frames,
        channels: params.channels,
        bytes_written,
        pcm_hash: hasher.finalize().to_hex().to_string(),
        min,
        max,
        warnings,
    })
}

/// Runs the selected waveform and hands each quantized frame value to `emit`.
fn render_frames<F>(params: &GenerationParams, seed: u32, emit: F) -> PcmResult<()>
where
    F: FnMut(i64) -> PcmResult<()>,
{
    let frames = params.frames();
    let format = params.format;
    let rate = params.sample_rate as f64;

    match params.waveform {
        Waveform::Pulse => stream_source(
            PulseSource::new(rate, params.tone_frequency, format),
            frames,
            format,
            emit,
        ),
        Waveform::Sine => stream_source(
            SineSource::new(rate, params.tone_frequency, format),
            frames,
            format,
            emit,
        ),
        Waveform::WhiteNoise => {
            let mut rng = create_component_rng(seed, NOISE_SEED_KEY);
            let mut batch = noise::gaussian_batch(&mut rng, frames);
            noise::normalize(&mut batch, format);

            // Quantize the whole batch first so a failure emits nothing.
            let quantized = batch
                .into_iter()
                .map(|magnitude| codec::quantize(magnitude, format))
                .collect::<PcmResult<Vec<i64>>>()?;
            quantized.into_iter().try_for_each(emit)
        }
    }
}

fn stream_source<S, F>(mut source: S, frames: usize, format: SampleFormat, mut emit: F) -> PcmResult<()>
where
    S: SampleSource,
    F: FnMut(i64) -> PcmResult<()>,
{
    for _ in 0..frames {
        emit(codec::quantize(source.next_magnitude(), format)?)?;
    }
    Ok(())
}
