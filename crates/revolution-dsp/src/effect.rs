//! Core Effect trait.
//!
//! All audio processing in this workspace goes through [`Effect`], whether
//! the caller is the LADSPA `run` callback or the offline CLI. The trait is
//! object-safe and mono (single `f32` in, single `f32` out), which is all a
//! pedal-style distortion needs.

/// Core trait for audio effects.
///
/// Effects process audio samples, either one at a time or in blocks. All
/// methods are designed to be called in real-time audio contexts with zero
/// heap allocations.
pub trait Effect {
    /// Process a single sample.
    ///
    /// # Arguments
    /// * `input` - Input sample, typically in range [-1.0, 1.0]
    ///
    /// # Returns
    /// Processed output sample
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Every output position is written, including positions whose value is
    /// unchanged from the input. Callers may hand in an uninitialized or
    /// stale output buffer and rely on all of it being overwritten.
    ///
    /// # Panics
    /// Default implementation debug-panics if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    ///
    /// Convenience method for when input and output are the same buffer.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects should recalculate any sample-rate-dependent coefficients.
    /// Memoryless effects ignore this.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without changing parameters.
    fn reset(&mut self);
}
