//! Revolution — LADSPA hard-clip distortion plugin.
//!
//! This crate bridges [`revolution_dsp::HardClip`] to the LADSPA host ABI.
//! The host dlopens the library, locates [`ladspa_descriptor`], and drives
//! the plugin through the descriptor's callbacks: instantiate, connect
//! ports, run, cleanup.
//!
//! # Architecture
//!
//! | LADSPA | Revolution |
//! |--------|------------|
//! | `LADSPA_Descriptor` | immutable `static` in [`descriptor`] |
//! | `LADSPA_Handle` | boxed [`plugin::Revolution`] |
//! | `connect_port` | borrowed host buffer pointers |
//! | `run` | `HardClip::process_block` |
//!
//! The descriptor is constructed entirely at compile time — there is no
//! load-time `_init` or unload-time `_fini`, and nothing for the plugin to
//! allocate or free besides its own instance handles. Port buffers are
//! host-owned; the plugin borrows them for the duration of one `run` call
//! and never frees them.
//!
//! # Plugin binary
//!
//! Build: `cargo build -p revolution-ladspa --release`
//! Output: `target/release/librevolution_ladspa.so` (install into a
//! directory on `LADSPA_PATH`)

pub mod abi;
pub mod descriptor;
pub mod plugin;

pub use descriptor::ladspa_descriptor;
pub use plugin::Revolution;
