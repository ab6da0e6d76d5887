//! Instance lifecycle callbacks.
//!
//! The host calls these through the function pointers in the descriptor.
//! All of them tolerate a null handle, and `run` additionally tolerates
//! unbound ports and a zero sample count; out-of-contract hosts get a no-op
//! rather than undefined behavior where we can check for it.

use crate::abi::{LadspaData, LadspaDescriptor, LadspaHandle};
use core::ffi::c_ulong;
use core::{ptr, slice};
use revolution_dsp::{Effect, HardClip};

/// Port index of the audio input.
pub const PORT_INPUT_INDEX: c_ulong = 0;
/// Port index of the audio output.
pub const PORT_OUTPUT_INDEX: c_ulong = 1;

/// Per-instance state.
///
/// The port pointers are host-owned buffers, borrowed between `connect_port`
/// and the end of the next `run` call. The instance never allocates,
/// retains, or frees them; [`cleanup`] drops only the instance itself.
pub struct Revolution {
    input: *const LadspaData,
    output: *mut LadspaData,
    clip: HardClip,
}

/// Create a plugin instance.
///
/// The sample rate is ignored: the clip is memoryless. Returns a boxed
/// handle; null would signal allocation failure per the ABI, but Rust's
/// allocator aborts instead of failing, so this never returns null in
/// practice.
///
/// # Safety
/// Called by the host with a valid descriptor pointer. The descriptor is
/// not dereferenced here.
pub unsafe extern "C" fn instantiate(
    _descriptor: *const LadspaDescriptor,
    sample_rate: c_ulong,
) -> LadspaHandle {
    tracing::debug!(sample_rate, "instantiating Revolution");
    let instance = Box::new(Revolution {
        input: ptr::null(),
        output: ptr::null_mut(),
        clip: HardClip::new(),
    });
    Box::into_raw(instance).cast()
}

/// Bind a port index to a host-owned buffer.
///
/// May be called again before every `run` to rebind ports. Indices other
/// than the two declared ports are ignored.
///
/// # Safety
/// `instance` must be a handle returned by [`instantiate`] (or null), and
/// `data` must stay valid until the port is rebound or the next `run`
/// returns.
pub unsafe extern "C" fn connect_port(
    instance: LadspaHandle,
    port: c_ulong,
    data: *mut LadspaData,
) {
    // SAFETY: the host hands back the pointer instantiate() produced.
    let Some(instance) = (unsafe { instance.cast::<Revolution>().as_mut() }) else {
        return;
    };
    match port {
        PORT_INPUT_INDEX => instance.input = data.cast_const(),
        PORT_OUTPUT_INDEX => instance.output = data,
        _ => {}
    }
}

/// Process `sample_count` samples through the hard clip.
///
/// Writes every output position, including in-range samples that pass
/// through unchanged. Input and output may be the same buffer; the
/// descriptor does not set `INPLACE_BROKEN`.
///
/// # Safety
/// `instance` must be a handle returned by [`instantiate`] (or null), and
/// any bound port buffers must hold at least `sample_count` samples.
pub unsafe extern "C" fn run(instance: LadspaHandle, sample_count: c_ulong) {
    // SAFETY: the host hands back the pointer instantiate() produced.
    let Some(instance) = (unsafe { instance.cast::<Revolution>().as_mut() }) else {
        return;
    };
    let frames = sample_count as usize;
    if frames == 0 || instance.input.is_null() || instance.output.is_null() {
        return;
    }

    if ptr::eq(instance.input, instance.output.cast_const()) {
        // In-place run: one mutable slice, never two aliasing ones.
        // SAFETY: the host guarantees the buffer holds `frames` samples.
        let buffer = unsafe { slice::from_raw_parts_mut(instance.output, frames) };
        instance.clip.process_block_inplace(buffer);
    } else {
        // SAFETY: the host guarantees both buffers hold `frames` samples
        // and, being distinct port connections, do not partially overlap.
        let input = unsafe { slice::from_raw_parts(instance.input, frames) };
        // SAFETY: as above.
        let output = unsafe { slice::from_raw_parts_mut(instance.output, frames) };
        instance.clip.process_block(input, output);
    }
}

/// Destroy a plugin instance.
///
/// Drops the boxed instance only. The port buffers are host-owned and are
/// left alone.
///
/// # Safety
/// `instance` must be a handle returned by [`instantiate`] (or null) that
/// has not already been cleaned up.
pub unsafe extern "C" fn cleanup(instance: LadspaHandle) {
    if instance.is_null() {
        return;
    }
    tracing::debug!("cleaning up Revolution instance");
    // SAFETY: the handle came from Box::into_raw in instantiate() and the
    // host relinquishes it here.
    drop(unsafe { Box::from_raw(instance.cast::<Revolution>()) });
}
