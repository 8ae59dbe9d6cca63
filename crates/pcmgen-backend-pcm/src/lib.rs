//! pcmgen PCM Backend
//!
//! Synthesizes headerless raw PCM test signals: a 50% duty-cycle pulse, a
//! sinusoid, or peak-normalized Gaussian white noise, encoded as 8/16/32-bit
//! signed or unsigned samples in either byte order and interleaved across any
//! number of channels.
//!
//! # Determinism
//!
//! Pulse and sine depend only on the parameters. White noise draws from PCG32
//! seeded through BLAKE3 seed derivation, so the same parameters and seed give
//! byte-identical output.
//!
//! # Example
//!
//! ```
//! use pcmgen_backend_pcm::{generate_to_writer, SampleStream};
//! use pcmgen_spec::{GenerationParams, SampleFormat, Waveform};
//!
//! let params = GenerationParams::builder()
//!     .sample_rate(8000)
//!     .duration_seconds(0.01)
//!     .waveform(Waveform::Pulse)
//!     .format(SampleFormat::parse("U8").unwrap())
//!     .channels(2)
//!     .build();
//!
//! let mut pcm = Vec::new();
//! let summary = generate_to_writer(&params, 0, &mut pcm).unwrap();
//! assert_eq!(summary.bytes_written, 160);
//!
//! let stream = SampleStream::from_bytes(&pcm, params.format, 2).unwrap();
//! assert_eq!(stream.max(), Some(255));
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`generate_to_writer()`] - Main entry points
//! - [`source`] - Streaming pulse and sine sources
//! - [`noise`] - Gaussian noise and global normalization
//! - [`codec`] - Quantization and binary sample encoding
//! - [`stream`] - Interleaved sample streams
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod codec;
pub mod error;
pub mod generate;
pub mod noise;
pub mod rng;
pub mod source;
pub mod stream;

// Re-export main types at crate root
pub use error::{PcmError, PcmResult};
pub use generate::{generate, generate_bytes, generate_to_writer, GenerateSummary};
pub use stream::{pcm_hash, SampleStream};
