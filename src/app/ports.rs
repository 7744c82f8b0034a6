//! Port traits — the boundary between the control core and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControllerService (domain)
//! ```
//!
//! The register adapter implements these over the memory-mapped bridge;
//! tests substitute scripted fakes.  The service consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Nothing here returns `Result`: within a tick every input path is
//! infallible by construction (values clamp or are masked at each
//! boundary), and the only blocking call — waiting for an ADC sample —
//! is a bounded wait owned by the acquisition hardware.

use crate::control::state::Channel;
use crate::display::DisplayFrame;

// ───────────────────────────────────────────────────────────────
// Operator input port (driven adapter: switches/buttons → domain)
// ───────────────────────────────────────────────────────────────

/// One tick's raw operator input, discarded after decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInputSnapshot {
    /// Slide switch word (SW9..SW0).
    pub switch_bits: u32,
    /// Push button word, **active-high**: the adapter inverts the
    /// board's active-low KEYs before they get here.
    pub button_bits: u32,
}

/// Read-side port for the operator controls.
pub trait InputPort {
    fn read_inputs(&mut self) -> RawInputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Acquisition port (driven adapter: ADC → domain)
// ───────────────────────────────────────────────────────────────

/// The analog acquisition contract.
///
/// One sample per conversion: `start_conversion`, poll [`poll_ready`]
/// until it reports true (the converter guarantees this wait is
/// bounded), then [`read_sample`] for the 12-bit value.
///
/// [`poll_ready`]: AcquisitionPort::poll_ready
/// [`read_sample`]: AcquisitionPort::read_sample
pub trait AcquisitionPort {
    fn start_conversion(&mut self, channel: Channel);
    fn poll_ready(&mut self) -> bool;
    /// The latest converted sample (0-4095).
    fn read_sample(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → indicators)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain hands over one frame per tick and the
/// adapter pushes it into the LED and seven-segment registers.
pub trait DisplayPort {
    fn render(&mut self, frame: &DisplayFrame);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go — the stock one
/// writes them to the process logger.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
