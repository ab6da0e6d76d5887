//! Revolution DSP - the processing core of the Revolution distortion.
//!
//! This crate holds the host-agnostic half of the plugin: the [`Effect`]
//! trait for sample and block processing, the [`HardClip`] waveshaper that
//! gives Revolution its sound, and a few math helpers.
//!
//! # Example
//!
//! ```rust
//! use revolution_dsp::{Effect, HardClip};
//!
//! let mut clip = HardClip::new();
//! let input = [0.9, -0.9, 0.3];
//! let mut output = [0.0; 3];
//! clip.process_block(&input, &mut output);
//! assert_eq!(output, [0.67, -0.67, 0.3]);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! revolution-dsp = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations in any processing path
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Object-safe traits**: dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod clip;
pub mod effect;
pub mod math;

pub use clip::{CLIP_THRESHOLD, HardClip};
pub use effect::Effect;
pub use math::{db_to_linear, hard_clip, linear_to_db};
