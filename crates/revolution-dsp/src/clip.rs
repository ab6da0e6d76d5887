//! The Revolution hard-clip waveshaper.
//!
//! A memoryless fuzz: each sample is cut off at ±[`CLIP_THRESHOLD`],
//! "squaring off" the curved wave. There is no cross-sample dependency, no
//! internal buffering, and no error condition — pure computation over the
//! caller's buffers.

use crate::effect::Effect;
use crate::math::hard_clip;

/// Clipping threshold of the Revolution fuzz.
pub const CLIP_THRESHOLD: f32 = 0.67;

/// Hard-clip distortion.
///
/// Samples above the threshold come out at the threshold, samples below the
/// negated threshold at the negated threshold, and in-range samples pass
/// through unchanged. The transform is idempotent.
///
/// # Example
///
/// ```rust
/// use revolution_dsp::{Effect, HardClip};
///
/// let mut clip = HardClip::new();
/// assert_eq!(clip.process(0.9), 0.67);
/// assert_eq!(clip.process(-0.3), -0.3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HardClip {
    threshold: f32,
}

impl HardClip {
    /// Create a hard clipper at the standard ±0.67 threshold.
    pub fn new() -> Self {
        Self::with_threshold(CLIP_THRESHOLD)
    }

    /// Create a hard clipper with a custom threshold.
    ///
    /// The sign is discarded; clipping is always symmetric around zero.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
        }
    }

    /// Get the current clipping threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Set the clipping threshold.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold.abs();
    }
}

impl Default for HardClip {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for HardClip {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        hard_clip(input, self.threshold)
    }

    fn set_sample_rate(&mut self, _sample_rate: f32) {
        // Memoryless; nothing depends on the sample rate.
    }

    fn reset(&mut self) {
        // No internal state.
    }
}
