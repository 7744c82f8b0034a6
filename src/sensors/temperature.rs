//! Temperature channel on the board ADC.
//!
//! The converter produces 12-bit samples (0-4095) from one of two
//! potentiometers standing in for an analog temperature probe.  Samples
//! are normalized onto the controller's 0-100 scale with integer
//! truncation.  No smoothing or filtering — each tick is an independent
//! instantaneous sample.

use crate::app::ports::AcquisitionPort;
use crate::control::state::Channel;

/// Full-scale raw ADC value (12 bits).
const ADC_FULL_SCALE: u32 = 4095;
/// Full-scale normalized temperature.
const TEMP_FULL_SCALE: u32 = 100;

/// Reads and normalizes one temperature sample per tick.
pub struct TemperatureSensor;

impl TemperatureSensor {
    pub fn new() -> Self {
        Self
    }

    /// Take one sample from `channel` and return it on the 0-100 scale.
    ///
    /// Blocks the calling tick until the converter reports a sample —
    /// the bounded-wait guarantee belongs to the acquisition layer, so
    /// there is no timeout or retry here.
    pub fn read(&mut self, acq: &mut impl AcquisitionPort, channel: Channel) -> u8 {
        acq.start_conversion(channel);
        while !acq.poll_ready() {}
        Self::scale(acq.read_sample())
    }

    /// Normalize a raw 12-bit sample: `raw * 100 / 4095`, truncating.
    pub fn scale(raw: u16) -> u8 {
        let raw = u32::from(raw).min(ADC_FULL_SCALE);
        (raw * TEMP_FULL_SCALE / ADC_FULL_SCALE) as u8
    }
}
