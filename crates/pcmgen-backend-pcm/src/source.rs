//! Streaming tone sources.
//!
//! Pulse and sine depend only on the sample index, so they are produced one
//! magnitude at a time and never need the whole signal in memory.

use std::f64::consts::TAU;

use pcmgen_spec::SampleFormat;

/// A sequential producer of per-frame magnitudes.
pub trait SampleSource {
    /// Returns the magnitude for the next time step.
    fn next_magnitude(&mut self) -> f64;
}

/// 50% duty-cycle square wave.
///
/// A toggle starts high and flips whenever `index % (period / 2)` is exactly
/// zero, so the first half-period is emitted at `bottom`. For half-periods that
/// are not a whole number of samples the floating remainder rarely hits zero
/// and toggling becomes irregular; that is kept as-is.
#[derive(Debug, Clone)]
pub struct PulseSource {
    half_period: f64,
    index: u64,
    high: bool,
    peak: f64,
    bottom: f64,
}

impl PulseSource {
    /// Creates a pulse source for the given rate, tone and format.
    pub fn new(sample_rate: f64, tone_frequency: f64, format: SampleFormat) -> Self {
        Self {
            half_period: sample_rate / tone_frequency / 2.0,
            index: 0,
            high: true,
            peak: format.peak() as f64,
            bottom: format.bottom() as f64,
        }
    }

    /// Samples per half period.
    pub fn half_period(&self) -> f64 {
        self.half_period
    }
}

impl SampleSource for PulseSource {
    fn next_magnitude(&mut self) -> f64 {
        if (self.index as f64) % self.half_period == 0.0 {
            self.high = !self.high;
        }
        self.index += 1;

        if self.high {
            self.peak
        } else {
            self.bottom
        }
    }
}

/// Sinusoid with a phase accumulator wrapped into `[0, 2π)`.
///
/// The amplitude is the half-range peak `2^n / 2 - 1` for every format;
/// unsigned formats are lifted by the format midline. The first sample is
/// taken at phase zero.
#[derive(Debug, Clone)]
pub struct SineSource {
    phase: f64,
    step: f64,
    amplitude: f64,
    bias: f64,
}

impl SineSource {
    /// Creates a sine source for the given rate, tone and format.
    pub fn new(sample_rate: f64, tone_frequency: f64, format: SampleFormat) -> Self {
        Self {
            phase: 0.0,
            step: TAU * tone_frequency / sample_rate,
            amplitude: format.half_range_peak() as f64,
            bias: format.midline(),
        }
    }

    /// Current phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl SampleSource for SineSource {
    fn next_magnitude(&mut self) -> f64 {
        let magnitude = self.amplitude * self.phase.sin() + self.bias;
        self.phase = (self.phase + self.step) % TAU;
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn format(descriptor: &str) -> SampleFormat {
        SampleFormat::parse(descriptor).unwrap()
    }

    fn take<S: SampleSource>(source: &mut S, n: usize) -> Vec<f64> {
        (0..n).map(|_| source.next_magnitude()).collect()
    }

    #[test]
    fn test_pulse_starts_low_and_alternates() {
        let mut pulse = PulseSource::new(8000.0, 1000.0, format("S16_LE"));
        let values = take(&mut pulse, 16);
        let low = -32767.0;
        let high = 32767.0;
        assert_eq!(
            values,
            vec![
                low, low, low, low, high, high, high, high, low, low, low, low, high, high, high,
                high
            ]
        );
    }

    #[test]
    fn test_pulse_half_period() {
        assert_eq!(PulseSource::new(8000.0, 1000.0, format("S16_LE")).half_period(), 4.0);
        assert_eq!(PulseSource::new(44100.0, 441.0, format("U8")).half_period(), 50.0);
        assert!(PulseSource::new(8000.0, 3000.0, format("S8")).half_period().fract() != 0.0);
    }

    #[test]
    fn test_pulse_unsigned_levels() {
        let mut pulse = PulseSource::new(8.0, 2.0, format("U8"));
        let values = take(&mut pulse, 4);
        assert_eq!(values, vec![0.0, 0.0, 255.0, 255.0]);
    }

    #[test]
    fn test_pulse_irregular_half_period_does_not_toggle_off_grid() {
        // 8000 / 3000 / 2 = 1.333..: only index 0 is an exact multiple.
        let mut pulse = PulseSource::new(8000.0, 3000.0, format("S8"));
        let values = take(&mut pulse, 3);
        assert_eq!(values[0], -127.0);
        assert_eq!(values[1], -127.0);
        assert_eq!(values[2], -127.0);
    }

    #[test]
    fn test_sine_first_sample_is_zero_phase() {
        let mut sine = SineSource::new(8000.0, 1000.0, format("S16_LE"));
        let values = take(&mut sine, 8);
        assert_eq!(values[0], 0.0);
        assert!((values[2] - 32767.0).abs() < 1e-6);
        assert!((values[6] + 32767.0).abs() < 1e-6);
        assert!(values[4].abs() < 1e-6);
    }

    #[test]
    fn test_sine_unsigned_is_biased_by_midline() {
        let mut sine = SineSource::new(8000.0, 1000.0, format("U16_LE"));
        let values = take(&mut sine, 8);
        assert_eq!(values[0], 32767.5);
        assert!((values[2] - 65534.5).abs() < 1e-6);
        assert!((values[6] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sine_phase_stays_wrapped() {
        let mut sine = SineSource::new(44100.0, 997.0, format("S16_LE"));
        for _ in 0..100_000 {
            sine.next_magnitude();
            assert!((0.0..TAU).contains(&sine.phase()));
        }
    }
}
