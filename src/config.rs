//! System configuration parameters
//!
//! All tunable parameters for the Thermofan controller.  The struct is
//! serialisable so tooling can inspect or template a configuration, but
//! nothing is persisted at runtime — the controller always boots from
//! `Default` and takes its threshold from the slide switches thereafter.

use serde::{Deserialize, Serialize};

/// Core controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Thresholds ---
    /// Startup fan threshold (units on the 0-100 temperature scale).
    /// Replaced by the switch-selected value on the first tick that
    /// presents a non-zero candidate.
    pub default_threshold: u8,
    /// Hysteresis dead band below the threshold (temperature units).
    /// The fan only turns off once temperature drops this far under
    /// the threshold.
    pub dead_band: u8,

    // --- Fan speed ---
    /// Manual speed-up / speed-down step (percent).
    pub speed_step: u8,
    /// Maximum fan speed (percent).
    pub max_speed: u8,

    // --- Timing ---
    /// Poll loop interval (milliseconds).
    pub poll_interval_ms: u32,
    /// Emit a telemetry line every this many ticks.
    pub telemetry_every_ticks: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Thresholds
            default_threshold: 25,
            dead_band: 2,

            // Fan speed
            speed_step: 10,
            max_speed: 100,

            // Timing
            poll_interval_ms: 200, // 5 Hz
            telemetry_every_ticks: 25, // one line per ~5 s
        }
    }
}
