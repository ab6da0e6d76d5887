//! The plugin descriptor and the `ladspa_descriptor` entry point.
//!
//! Everything the host reads here is a compile-time constant: the strings
//! are C-string literals, the port tables are statics, and the descriptor
//! itself is one immutable `static`. There is nothing to build at library
//! load or tear down at unload.

use crate::abi::{
    LadspaDescriptor, LadspaPortDescriptor, LadspaPortRangeHint, PORT_AUDIO, PORT_INPUT,
    PORT_OUTPUT, PROPERTY_HARD_RT_CAPABLE,
};
use crate::plugin;
use core::ffi::{c_char, c_ulong};
use core::ptr;

/// Plugin identifier.
// TODO: 3000 is the placeholder the original plugin shipped with; replace
// it once an ID is assigned from the LADSPA UID range.
pub const UNIQUE_ID: c_ulong = 3000;

/// Number of ports: one audio input, one audio output.
pub const PORT_COUNT: usize = 2;

static PORT_DESCRIPTORS: [LadspaPortDescriptor; PORT_COUNT] =
    [PORT_INPUT | PORT_AUDIO, PORT_OUTPUT | PORT_AUDIO];

static PORT_RANGE_HINTS: [LadspaPortRangeHint; PORT_COUNT] =
    [LadspaPortRangeHint::NONE, LadspaPortRangeHint::NONE];

struct PortNames([*const c_char; PORT_COUNT]);

// SAFETY: the pointers reference C-string literals with static lifetime.
unsafe impl Sync for PortNames {}

static PORT_NAMES: PortNames = PortNames([c"Input".as_ptr(), c"Output".as_ptr()]);

struct StaticDescriptor(LadspaDescriptor);

// SAFETY: every pointer in the descriptor references an immutable static in
// this module; nothing behind them is ever mutated.
unsafe impl Sync for StaticDescriptor {}

static DESCRIPTOR: StaticDescriptor = StaticDescriptor(LadspaDescriptor {
    unique_id: UNIQUE_ID,
    label: c"Revolution_Distortion".as_ptr(),
    properties: PROPERTY_HARD_RT_CAPABLE,
    name: c"Revolution".as_ptr(),
    maker: c"Tyler Hayes".as_ptr(),
    copyright: c"GPL".as_ptr(),
    port_count: PORT_COUNT as c_ulong,
    port_descriptors: PORT_DESCRIPTORS.as_ptr(),
    port_names: PORT_NAMES.0.as_ptr(),
    port_range_hints: PORT_RANGE_HINTS.as_ptr(),
    implementation_data: ptr::null_mut(),
    instantiate: Some(plugin::instantiate),
    connect_port: Some(plugin::connect_port),
    // No buffers to clear on activation, so activate/deactivate are absent,
    // as are the run_adding pair.
    activate: None,
    run: Some(plugin::run),
    run_adding: None,
    set_run_adding_gain: None,
    deactivate: None,
    cleanup: Some(plugin::cleanup),
});

/// LADSPA discovery entry point.
///
/// The host calls this with ascending indices after loading the library.
/// This library exposes a single plugin type, so index 0 returns the
/// Revolution descriptor and anything else returns null.
#[unsafe(no_mangle)]
pub extern "C" fn ladspa_descriptor(index: c_ulong) -> *const LadspaDescriptor {
    if index == 0 {
        &DESCRIPTOR.0
    } else {
        ptr::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::CStr;

    fn descriptor() -> &'static LadspaDescriptor {
        // SAFETY: index 0 returns a pointer to the immutable static.
        unsafe { ladspa_descriptor(0).as_ref() }.expect("descriptor for index 0")
    }

    #[test]
    fn test_only_index_zero_exists() {
        assert!(!ladspa_descriptor(0).is_null());
        assert!(ladspa_descriptor(1).is_null());
        assert!(ladspa_descriptor(9999).is_null());
    }

    #[test]
    fn test_metadata_strings() {
        let desc = descriptor();
        // SAFETY: the descriptor strings are nul-terminated literals.
        unsafe {
            assert_eq!(
                CStr::from_ptr(desc.label).to_str().unwrap(),
                "Revolution_Distortion"
            );
            assert_eq!(CStr::from_ptr(desc.name).to_str().unwrap(), "Revolution");
            assert_eq!(CStr::from_ptr(desc.maker).to_str().unwrap(), "Tyler Hayes");
            assert_eq!(CStr::from_ptr(desc.copyright).to_str().unwrap(), "GPL");
        }
        assert_eq!(desc.unique_id, UNIQUE_ID);
        assert_eq!(desc.properties, PROPERTY_HARD_RT_CAPABLE);
    }

    #[test]
    fn test_port_layout() {
        let desc = descriptor();
        assert_eq!(desc.port_count, 2);

        // SAFETY: the port tables hold port_count entries.
        let (descriptors, names, hints) = unsafe {
            (
                core::slice::from_raw_parts(desc.port_descriptors, PORT_COUNT),
                core::slice::from_raw_parts(desc.port_names, PORT_COUNT),
                core::slice::from_raw_parts(desc.port_range_hints, PORT_COUNT),
            )
        };

        assert_eq!(descriptors[0], PORT_INPUT | PORT_AUDIO);
        assert_eq!(descriptors[1], PORT_OUTPUT | PORT_AUDIO);

        // SAFETY: port names are nul-terminated literals.
        unsafe {
            assert_eq!(CStr::from_ptr(names[0]).to_str().unwrap(), "Input");
            assert_eq!(CStr::from_ptr(names[1]).to_str().unwrap(), "Output");
        }

        for hint in hints {
            assert_eq!(hint.hint_descriptor, 0);
        }
    }

    #[test]
    fn test_mandatory_callbacks_present() {
        let desc = descriptor();
        assert!(desc.instantiate.is_some());
        assert!(desc.connect_port.is_some());
        assert!(desc.run.is_some());
        assert!(desc.cleanup.is_some());

        assert!(desc.activate.is_none());
        assert!(desc.run_adding.is_none());
        assert!(desc.set_run_adding_gain.is_none());
        assert!(desc.deactivate.is_none());
    }
}
