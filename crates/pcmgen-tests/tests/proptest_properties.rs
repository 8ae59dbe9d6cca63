//! Property-based tests for pcmgen using proptest.
//!
//! These tests verify that descriptor parsing never panics, that the codec is
//! an exact inverse on every in-range value, and that generated signals stay
//! inside their format for arbitrary parameters.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pcmgen-tests --test proptest_properties
//! ```

use proptest::prelude::*;

use pcmgen_backend_pcm::codec::{decode, encode, quantize};
use pcmgen_backend_pcm::{generate, generate_bytes, PcmError};
use pcmgen_spec::{GenerationParams, SampleFormat, Waveform};

/// Strategy picking one of the supported formats.
fn any_format() -> impl Strategy<Value = SampleFormat> {
    (0..SampleFormat::ALL.len()).prop_map(|i| SampleFormat::ALL[i])
}

/// Strategy picking one of the waveforms.
fn any_waveform() -> impl Strategy<Value = Waveform> {
    (0..Waveform::ALL.len()).prop_map(|i| Waveform::ALL[i])
}

/// Strategy for an in-range sample of some format.
fn format_and_samples() -> impl Strategy<Value = (SampleFormat, Vec<i64>)> {
    any_format().prop_flat_map(|format| {
        let value = format.min_value()..=format.max_value();
        (Just(format), prop::collection::vec(value, 0..64))
    })
}

// ============================================================================
// 1. Descriptor Parsing
// ============================================================================

proptest! {
    /// Arbitrary strings never panic, and anything accepted re-parses from
    /// its canonical form.
    #[test]
    fn parse_is_total(s in "\\PC{0,24}") {
        if let Ok(format) = SampleFormat::parse(&s) {
            let canonical = format.to_string();
            prop_assert_eq!(SampleFormat::parse(&canonical).unwrap(), format);
        }
    }

    /// Descriptor-like strings never panic either.
    #[test]
    fn parse_descriptor_shapes(s in "[sSuUxX]?[0-9]{0,22}(_LE|_BE|_le|_XX|LE)?") {
        let _ = SampleFormat::parse(&s);
    }

    /// Every canonical descriptor parses in any letter case.
    #[test]
    fn parse_ignores_case(format in any_format(), mask in any::<u8>()) {
        let canonical = format.to_string();
        let mixed: String = canonical
            .chars()
            .enumerate()
            .map(|(i, c)| if mask & (1 << (i % 8)) != 0 { c.to_ascii_lowercase() } else { c })
            .collect();
        prop_assert_eq!(SampleFormat::parse(&mixed).unwrap(), format);
    }
}

// ============================================================================
// 2. Codec
// ============================================================================

proptest! {
    /// decode(encode(x)) == x for every in-range sample.
    #[test]
    fn codec_inverse((format, samples) in format_and_samples()) {
        let bytes = encode(&samples, format).unwrap();
        prop_assert_eq!(bytes.len(), samples.len() * format.bytes_per_sample());
        prop_assert_eq!(decode(&bytes, format).unwrap(), samples);
    }

    /// Quantization succeeds exactly when the rounded value fits.
    #[test]
    fn quantize_accepts_exactly_in_range(format in any_format(), x in -5.0e9f64..5.0e9) {
        let rounded = x.round();
        let fits = rounded >= format.min_value() as f64 && rounded <= format.max_value() as f64;
        match quantize(x, format) {
            Ok(v) => {
                prop_assert!(fits);
                prop_assert_eq!(v as f64, rounded);
            }
            Err(e) => {
                prop_assert!(!fits);
                prop_assert!(matches!(e, PcmError::Encoding { .. }), "unexpected error kind");
            }
        }
    }
}

// ============================================================================
// 3. Generation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Generated samples stay between bottom and peak for every waveform.
    #[test]
    fn samples_stay_in_range(
        format in any_format(),
        waveform in any_waveform(),
        sample_rate in 1000u32..48_000,
        tone_fraction in 0.001f64..0.49,
        seed in any::<u32>(),
    ) {
        let params = GenerationParams::builder()
            .sample_rate(sample_rate)
            .duration_seconds(0.02)
            .waveform(waveform)
            .format(format)
            .tone_frequency(sample_rate as f64 * tone_fraction)
            .build();
        let stream = generate(&params, seed).unwrap();

        prop_assert!(stream.max().unwrap() <= format.peak());
        prop_assert!(stream.min().unwrap() >= format.bottom());
    }

    /// Output length is floor(duration * rate) * channels * bytes per sample.
    #[test]
    fn byte_length_law(
        format in any_format(),
        waveform in any_waveform(),
        sample_rate in 1u32..20_000,
        duration in 0.0005f64..0.25,
        channels in 1u16..5,
    ) {
        let params = GenerationParams::builder()
            .sample_rate(sample_rate)
            .duration_seconds(duration)
            .waveform(waveform)
            .format(format)
            .channels(channels)
            .tone_frequency(1.0)
            .build();

        let frames = (duration * sample_rate as f64).floor() as usize;
        match generate_bytes(&params, 0) {
            Ok(bytes) => {
                prop_assert_eq!(
                    bytes.len(),
                    frames * channels as usize * format.bytes_per_sample()
                );
            }
            Err(_) => prop_assert_eq!(frames, 0),
        }
    }
}
