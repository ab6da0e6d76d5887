//! Full host-side lifecycle tests, driving the plugin exclusively through
//! the descriptor's function pointers the way a LADSPA host would.

use revolution_ladspa::abi::{LadspaDescriptor, LadspaHandle};
use revolution_ladspa::ladspa_descriptor;
use revolution_ladspa::plugin::{PORT_INPUT_INDEX, PORT_OUTPUT_INDEX};

const SAMPLE_RATE: u64 = 48_000;

fn descriptor() -> &'static LadspaDescriptor {
    // SAFETY: index 0 returns a pointer to the library's immutable static.
    unsafe { ladspa_descriptor(0).as_ref() }.expect("descriptor for index 0")
}

/// Minimal stand-in for a host: owns the buffers and drives the callbacks.
struct Host {
    desc: &'static LadspaDescriptor,
    handle: LadspaHandle,
}

impl Host {
    fn instantiate() -> Self {
        let desc = descriptor();
        // SAFETY: calling the plugin's own instantiate with its descriptor.
        let handle = unsafe { desc.instantiate.unwrap()(desc, SAMPLE_RATE as _) };
        assert!(!handle.is_null(), "instantiate returned a null handle");
        Self { desc, handle }
    }

    fn connect(&self, port: u64, data: *mut f32) {
        // SAFETY: handle came from instantiate; data is a live buffer.
        unsafe { self.desc.connect_port.unwrap()(self.handle, port as _, data) }
    }

    fn run(&self, frames: usize) {
        // SAFETY: connected buffers hold at least `frames` samples.
        unsafe { self.desc.run.unwrap()(self.handle, frames as _) }
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        // SAFETY: handle came from instantiate and is dropped exactly once.
        unsafe { self.desc.cleanup.unwrap()(self.handle) }
    }
}

#[test]
fn instantiate_connect_run_cleanup() {
    let host = Host::instantiate();

    let input = [0.9f32, -0.9, 0.3, -0.3, 0.67, -0.67];
    let mut output = [f32::NAN; 6];

    host.connect(PORT_INPUT_INDEX as u64, input.as_ptr().cast_mut());
    host.connect(PORT_OUTPUT_INDEX as u64, output.as_mut_ptr());
    host.run(input.len());

    assert_eq!(output, [0.67, -0.67, 0.3, -0.3, 0.67, -0.67]);
}

#[test]
fn in_range_output_positions_are_overwritten() {
    let host = Host::instantiate();

    // Stale output content must not survive: the pass-through branch is an
    // explicit write, not a skip.
    let input = [0.1f32, -0.2, 0.0, 0.5];
    let mut output = [123.0f32; 4];

    host.connect(PORT_INPUT_INDEX as u64, input.as_ptr().cast_mut());
    host.connect(PORT_OUTPUT_INDEX as u64, output.as_mut_ptr());
    host.run(input.len());

    assert_eq!(output, input);
}

#[test]
fn zero_sample_run_is_a_no_op() {
    let host = Host::instantiate();

    let input = [0.9f32];
    let mut output = [5.0f32];

    host.connect(PORT_INPUT_INDEX as u64, input.as_ptr().cast_mut());
    host.connect(PORT_OUTPUT_INDEX as u64, output.as_mut_ptr());
    host.run(0);

    assert_eq!(output, [5.0]);
}

#[test]
fn run_without_connected_ports_is_a_no_op() {
    let host = Host::instantiate();
    // Must not crash; ports were never bound.
    host.run(64);
}

#[test]
fn ports_can_be_rebound_between_runs() {
    let host = Host::instantiate();

    let first_in = [0.9f32, 0.1];
    let mut first_out = [0.0f32; 2];
    host.connect(PORT_INPUT_INDEX as u64, first_in.as_ptr().cast_mut());
    host.connect(PORT_OUTPUT_INDEX as u64, first_out.as_mut_ptr());
    host.run(2);
    assert_eq!(first_out, [0.67, 0.1]);

    let second_in = [-0.9f32, -0.1];
    let mut second_out = [0.0f32; 2];
    host.connect(PORT_INPUT_INDEX as u64, second_in.as_ptr().cast_mut());
    host.connect(PORT_OUTPUT_INDEX as u64, second_out.as_mut_ptr());
    host.run(2);
    assert_eq!(second_out, [-0.67, -0.1]);

    // First buffer untouched by the second run.
    assert_eq!(first_out, [0.67, 0.1]);
}

#[test]
fn in_place_run_is_supported() {
    let host = Host::instantiate();

    // The descriptor does not set INPLACE_BROKEN, so a host may bind the
    // same buffer to both ports.
    let mut buffer = [0.9f32, -0.9, 0.3];
    host.connect(PORT_INPUT_INDEX as u64, buffer.as_mut_ptr());
    host.connect(PORT_OUTPUT_INDEX as u64, buffer.as_mut_ptr());
    host.run(buffer.len());

    assert_eq!(buffer, [0.67, -0.67, 0.3]);
}

#[test]
fn unknown_port_indices_are_ignored() {
    let host = Host::instantiate();

    let input = [0.9f32];
    let mut output = [0.0f32];
    host.connect(PORT_INPUT_INDEX as u64, input.as_ptr().cast_mut());
    host.connect(PORT_OUTPUT_INDEX as u64, output.as_mut_ptr());

    let mut stray = [7.0f32];
    host.connect(99, stray.as_mut_ptr());

    host.run(1);
    assert_eq!(output, [0.67]);
    assert_eq!(stray, [7.0]);
}

#[test]
fn instances_are_independent() {
    let a = Host::instantiate();
    let b = Host::instantiate();

    let in_a = [0.9f32];
    let mut out_a = [0.0f32];
    a.connect(PORT_INPUT_INDEX as u64, in_a.as_ptr().cast_mut());
    a.connect(PORT_OUTPUT_INDEX as u64, out_a.as_mut_ptr());

    let in_b = [-0.9f32];
    let mut out_b = [0.0f32];
    b.connect(PORT_INPUT_INDEX as u64, in_b.as_ptr().cast_mut());
    b.connect(PORT_OUTPUT_INDEX as u64, out_b.as_mut_ptr());

    a.run(1);
    b.run(1);

    assert_eq!(out_a, [0.67]);
    assert_eq!(out_b, [-0.67]);
}
