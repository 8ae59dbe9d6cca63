//! Parameter fixtures shared by the end-to-end tests.

use pcmgen_spec::{GenerationParams, SampleFormat, Waveform};

/// A named generation setup.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Short identifier used in assertion messages.
    pub name: String,
    /// Parameters to generate with.
    pub params: GenerationParams,
}

/// Every waveform crossed with every format, in stereo, at a short duration.
pub fn fixture_matrix() -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for waveform in Waveform::ALL {
        for format in SampleFormat::ALL {
            let params = GenerationParams::builder()
                .sample_rate(8000)
                .duration_seconds(0.125)
                .waveform(waveform)
                .format(format)
                .channels(2)
                .tone_frequency(500.0)
                .build();
            fixtures.push(Fixture {
                name: format!("{}_{}", waveform, format),
                params,
            });
        }
    }
    fixtures
}
