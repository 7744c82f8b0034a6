//! Outbound application events.
//!
//! The [`ControllerService`](super::service::ControllerService) emits
//! these through the [`EventSink`](super::ports::EventSink) port.  The
//! stock adapter logs them; the port exists so tests can record them
//! instead.

use crate::control::state::{Channel, FanState};

/// Structured events emitted by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller started (carries the initial threshold and mode).
    Started { threshold: u8, auto_mode: bool },

    /// The fan changed state or speed.
    FanChanged { from: FanState, to: FanState },

    /// The operator flipped between auto and manual mode.
    ModeChanged { auto_mode: bool },

    /// The switch-selected threshold took a new value.
    ThresholdChanged { from: u8, to: u8 },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryData {
    pub temperature: u8,
    pub threshold: u8,
    pub fan: FanState,
    pub auto_mode: bool,
    pub channel: Channel,
}
