//! File-based processing command.

use crate::wav::{read_wav_mono, write_wav_mono};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use revolution_dsp::{CLIP_THRESHOLD, Effect, HardClip, linear_to_db};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Clipping threshold
    #[arg(long, default_value_t = CLIP_THRESHOLD)]
    threshold: f32,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (samples, info) = read_wav_mono(&args.input)?;
    let sample_rate = info.sample_rate as f32;
    tracing::debug!(
        samples = samples.len(),
        channels = info.channels,
        "loaded input"
    );

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        info.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let mut clip = HardClip::with_threshold(args.threshold);
    clip.set_sample_rate(sample_rate);

    println!("Clipping at ±{:.2}...", clip.threshold());

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut output = vec![0.0; samples.len()];
    let block_size = args.block_size.max(1);

    for (i, (in_chunk, out_chunk)) in samples
        .chunks(block_size)
        .zip(output.chunks_mut(block_size))
        .enumerate()
    {
        clip.process_block(in_chunk, out_chunk);
        pb.set_position((((i + 1) * block_size).min(samples.len())) as u64);
    }

    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&samples)),
        linear_to_db(peak(&samples))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&output)),
        linear_to_db(peak(&output))
    );

    println!("\nWriting {}...", args.output.display());
    write_wav_mono(&args.output, &output, info.sample_rate, args.bit_depth)?;
    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f32 = samples.iter().map(|s| s * s).sum();
    (sum_squares / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0, |acc, s| acc.max(s.abs()))
}
