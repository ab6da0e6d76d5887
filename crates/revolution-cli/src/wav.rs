//! WAV input and output for the clip pipeline.
//!
//! The pipeline is mono end to end, so this module exposes exactly two
//! operations: decode any WAV into a mono f32 buffer, and encode a mono f32
//! buffer at a chosen bit depth. Multi-channel input is averaged down on
//! read; output is written as 32-bit float, or integer PCM for smaller bit
//! depths.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Errors the WAV layer can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be decoded or encoded as WAV.
    #[error("WAV codec error: {0}")]
    Codec(#[from] hound::Error),
}

/// Convenience result type for WAV I/O.
pub type Result<T> = std::result::Result<T, Error>;

/// Source file details the CLI reports before processing.
#[derive(Debug, Clone, Copy)]
pub struct WavInfo {
    /// Channel count of the source file (the decoded buffer is always mono).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

/// Full-scale magnitude of an integer PCM sample at the given bit depth.
///
/// Computed in i64: at 32 bits, `1i32 << 31` would wrap to `i32::MIN` and
/// silently invert every decoded sample.
fn int_full_scale(bits: u16) -> f32 {
    (1i64 << (bits - 1)) as f32
}

/// Decode a WAV file into a mono f32 buffer.
///
/// Float and integer PCM sources are both accepted; integer samples are
/// rescaled to the [-1.0, 1.0) range. Files with more than one channel are
/// averaged into a single channel, frame by frame.
pub fn read_wav_mono<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavInfo)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let info = WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
    };
    let channels = spec.channels as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.into_samples::<f32>().collect::<hound::Result<_>>()?,
        SampleFormat::Int => {
            let scale = int_full_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<hound::Result<_>>()?
        }
    };

    if channels <= 1 {
        return Ok((interleaved, info));
    }

    let mono = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();
    Ok((mono, info))
}

/// Encode a mono f32 buffer as a WAV file.
///
/// A bit depth of 32 writes IEEE float samples unchanged; 16 or 24 writes
/// integer PCM, quantized and clamped to the representable range.
pub fn write_wav_mono<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
    bits_per_sample: u16,
) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample,
        sample_format: if bits_per_sample == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };
    let mut writer = WavWriter::create(path, spec)?;

    match spec.sample_format {
        SampleFormat::Float => {
            for &sample in samples {
                writer.write_sample(sample)?;
            }
        }
        SampleFormat::Int => {
            let scale = int_full_scale(bits_per_sample);
            for &sample in samples {
                let quantized = (sample * scale).clamp(-scale, scale - 1.0) as i32;
                writer.write_sample(quantized)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}
