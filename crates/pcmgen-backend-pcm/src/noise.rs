//! Gaussian white noise with global peak normalization.
//!
//! Unlike the tone sources, noise is produced in two passes: the whole batch
//! is drawn first, then scaled so the loudest sample lands exactly on the
//! format peak.

use std::f64::consts::TAU;

use pcmgen_spec::SampleFormat;
use rand::Rng;
use rand_pcg::Pcg32;

/// Draws one value from the standard normal distribution (Box-Muller).
pub fn standard_normal(rng: &mut Pcg32) -> f64 {
    // gen::<f64>() is in [0, 1); flip it to (0, 1] so ln() stays finite.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Draws `num_samples` independent standard-normal values.
pub fn gaussian_batch(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    (0..num_samples).map(|_| standard_normal(rng)).collect()
}

/// Scales a batch in place onto the range of `format`.
///
/// Each value becomes `midline + (peak - midline) * x / max|x|`. If the
/// loudest value is negative the batch is negated first, so the maximum of the
/// result is always exactly `peak`; for unsigned formats the minimum stays at
/// or above zero.
pub fn normalize(samples: &mut [f64], format: SampleFormat) {
    let midline = format.midline();

    let loudest = samples
        .iter()
        .copied()
        .fold(0.0_f64, |a, b| if b.abs() > a.abs() { b } else { a });

    if loudest == 0.0 {
        samples.iter_mut().for_each(|s| *s = midline);
        return;
    }

    // Dividing first keeps the loudest sample at exactly 1.0.
    let amplitude = format.peak() as f64 - midline;
    for s in samples.iter_mut() {
        *s = midline + amplitude * (*s / loudest);
    }
}
