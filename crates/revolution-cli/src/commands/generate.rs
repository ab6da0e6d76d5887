//! Test signal generation command.

use crate::wav::write_wav_mono;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.9")]
        amplitude: f32,
    },

    /// Generate an impulse
    Impulse {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Length in samples
        #[arg(long, default_value = "48000")]
        length: usize,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Impulse amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let samples = sine_tone(freq, duration, sample_rate, amplitude);
            println!(
                "Generating {:.1} Hz tone, {:.2}s at {} Hz...",
                freq, duration, sample_rate
            );
            write_output(&output, &samples, sample_rate)
        }
        GenerateCommand::Impulse {
            output,
            length,
            sample_rate,
            amplitude,
        } => {
            let samples = impulse(length, amplitude);
            println!("Generating {}-sample impulse...", length);
            write_output(&output, &samples, sample_rate)
        }
    }
}

fn write_output(path: &Path, samples: &[f32], sample_rate: u32) -> anyhow::Result<()> {
    write_wav_mono(path, samples, sample_rate, 32)?;
    println!("Wrote {} ({} samples)", path.display(), samples.len());
    Ok(())
}

fn sine_tone(freq: f32, duration: f32, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (std::f32::consts::TAU * freq * t).sin() * amplitude
        })
        .collect()
}

fn impulse(length: usize, amplitude: f32) -> Vec<f32> {
    let mut samples = vec![0.0; length];
    if let Some(first) = samples.first_mut() {
        *first = amplitude;
    }
    samples
}
