//! Minimal `repr(C)` mirror of the LADSPA plugin ABI (`ladspa.h`).
//!
//! Only what this plugin needs is mirrored: the data/handle typedefs, the
//! property and port-descriptor bit flags, the port range hint record, and
//! the descriptor struct itself. Field order and types match `ladspa.h`
//! exactly; the host reads this memory directly.

use core::ffi::{c_char, c_int, c_ulong, c_void};

/// Audio sample type (`LADSPA_Data`).
pub type LadspaData = f32;

/// Opaque per-instance handle passed back to every callback
/// (`LADSPA_Handle`).
pub type LadspaHandle = *mut c_void;

/// Plugin property bit set (`LADSPA_Properties`).
pub type LadspaProperties = c_int;

/// The plugin has a real-time dependency (e.g. listens to a MIDI clock).
pub const PROPERTY_REALTIME: LadspaProperties = 0x1;
/// The plugin cannot run with input and output pointing at the same buffer.
pub const PROPERTY_INPLACE_BROKEN: LadspaProperties = 0x2;
/// The plugin is capable of running in hard real-time environments.
pub const PROPERTY_HARD_RT_CAPABLE: LadspaProperties = 0x4;

/// Per-port capability bit set (`LADSPA_PortDescriptor`).
pub type LadspaPortDescriptor = c_int;

/// Port is an input (host writes, plugin reads).
pub const PORT_INPUT: LadspaPortDescriptor = 0x1;
/// Port is an output (plugin writes, host reads).
pub const PORT_OUTPUT: LadspaPortDescriptor = 0x2;
/// Port carries a single control value.
pub const PORT_CONTROL: LadspaPortDescriptor = 0x4;
/// Port carries a buffer of audio samples.
pub const PORT_AUDIO: LadspaPortDescriptor = 0x8;

/// Range hint for a port (`LADSPA_PortRangeHint`).
///
/// A zeroed hint descriptor means the port advertises no range information.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LadspaPortRangeHint {
    /// Hint bit set (`LADSPA_PortRangeHintDescriptor`).
    pub hint_descriptor: c_int,
    /// Lower bound, meaningful only if the corresponding hint bit is set.
    pub lower_bound: LadspaData,
    /// Upper bound, meaningful only if the corresponding hint bit is set.
    pub upper_bound: LadspaData,
}

impl LadspaPortRangeHint {
    /// A hint that advertises nothing.
    pub const NONE: Self = Self {
        hint_descriptor: 0,
        lower_bound: 0.0,
        upper_bound: 0.0,
    };
}

/// Plugin descriptor (`LADSPA_Descriptor`).
///
/// One of these describes each plugin type a library exposes. The host
/// obtains it from `ladspa_descriptor()` and calls the plugin exclusively
/// through the function pointers it carries. Optional callbacks are `None`.
#[repr(C)]
pub struct LadspaDescriptor {
    /// Globally unique plugin identifier.
    pub unique_id: c_ulong,
    /// Identifier label, unique within the library, no whitespace.
    pub label: *const c_char,
    /// Property bit set.
    pub properties: LadspaProperties,
    /// Human-readable plugin name.
    pub name: *const c_char,
    /// Author string.
    pub maker: *const c_char,
    /// Copyright string ("None" for none).
    pub copyright: *const c_char,
    /// Number of ports.
    pub port_count: c_ulong,
    /// Array of `port_count` port descriptors.
    pub port_descriptors: *const LadspaPortDescriptor,
    /// Array of `port_count` port name strings.
    pub port_names: *const *const c_char,
    /// Array of `port_count` range hints.
    pub port_range_hints: *const LadspaPortRangeHint,
    /// Private data for the library; unused by this plugin.
    pub implementation_data: *mut c_void,
    /// Create a plugin instance at the given sample rate. Returns null on
    /// failure.
    pub instantiate:
        Option<unsafe extern "C" fn(*const LadspaDescriptor, c_ulong) -> LadspaHandle>,
    /// Bind a port index to a host-owned buffer.
    pub connect_port: Option<unsafe extern "C" fn(LadspaHandle, c_ulong, *mut LadspaData)>,
    /// Prepare the instance for processing (optional).
    pub activate: Option<unsafe extern "C" fn(LadspaHandle)>,
    /// Process a number of samples.
    pub run: Option<unsafe extern "C" fn(LadspaHandle, c_ulong)>,
    /// Process and mix into the output at a set gain (optional).
    pub run_adding: Option<unsafe extern "C" fn(LadspaHandle, c_ulong)>,
    /// Set the gain used by `run_adding` (optional).
    pub set_run_adding_gain: Option<unsafe extern "C" fn(LadspaHandle, LadspaData)>,
    /// Counterpart to `activate` (optional).
    pub deactivate: Option<unsafe extern "C" fn(LadspaHandle)>,
    /// Destroy a plugin instance.
    pub cleanup: Option<unsafe extern "C" fn(LadspaHandle)>,
}
