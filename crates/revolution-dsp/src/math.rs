//! Mathematical utility functions for DSP.
//!
//! Allocation-free and suitable for `no_std`.

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use revolution_dsp::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // expf is what libm offers; the base-10 change folds into the constant.
    const LN10_OVER_20: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * LN10_OVER_20)
}

/// Convert linear gain to decibels.
///
/// The input is floored at 1e-10 so silence maps to a large negative dB
/// value instead of -inf.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const TWENTY_OVER_LN10: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * TWENTY_OVER_LN10
}

/// Hard clip to the ±threshold range.
///
/// Abrupt limiting that creates flat tops on waveforms, producing harsh
/// odd harmonics. In-range samples pass through unchanged.
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    x.clamp(-threshold, threshold)
}
