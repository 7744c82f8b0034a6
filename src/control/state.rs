//! Controller state — the blackboard the poll loop mutates once per tick.
//!
//! A single owned struct passed by exclusive reference into each per-tick
//! function; there is no global state.  The fan's on/off/speed triple is
//! collapsed into [`FanState`] so that "idle fans have speed zero" holds by
//! construction rather than by discipline.

use crate::config::ControllerConfig;

// ---------------------------------------------------------------------------
// ADC channel selector
// ---------------------------------------------------------------------------

/// Which of the two board potentiometers feeds the temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Ch0,
    Ch1,
}

impl Channel {
    /// Decode from the raw SW0 bit.
    pub fn from_bit(bit: u32) -> Self {
        if bit & 1 == 0 { Self::Ch0 } else { Self::Ch1 }
    }

    /// Channel index (0 or 1) — used to address the ADC data registers.
    pub fn index(self) -> usize {
        match self {
            Self::Ch0 => 0,
            Self::Ch1 => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Fan state
// ---------------------------------------------------------------------------

/// The two states of the fan state machine.
///
/// `Running` carries its speed (0-100 percent); `Idle` structurally has
/// none, so a stopped fan can never report a stale speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanState {
    Idle,
    Running { speed: u8 },
}

impl FanState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Current speed in percent; 0 while idle.
    pub fn speed(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Running { speed } => speed,
        }
    }
}

// ---------------------------------------------------------------------------
// ControllerState
// ---------------------------------------------------------------------------

/// Everything the control loop knows, updated in place every tick.
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Latest normalized temperature reading (0-100).
    pub current_temperature: u8,
    /// Fan threshold (1-31).  Never zero: a zero candidate from the
    /// switches means "keep the previous value".
    pub threshold_temperature: u8,
    /// Fan on/off and speed.
    pub fan: FanState,
    /// Auto mode runs the hysteresis policy; manual mode obeys buttons only.
    pub auto_mode: bool,
    /// ADC channel selected by SW0.
    pub selected_channel: Channel,
}

impl ControllerState {
    /// Safe startup defaults: fan off, mid threshold, auto mode.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            current_temperature: 0,
            threshold_temperature: config.default_threshold,
            fan: FanState::Idle,
            auto_mode: true,
            selected_channel: Channel::Ch0,
        }
    }

    /// Apply a decoded threshold candidate.  `None` (the switches read
    /// zero) retains the previous value.  Returns the old value when the
    /// threshold actually changed.
    pub fn apply_threshold(&mut self, candidate: Option<u8>) -> Option<u8> {
        match candidate {
            Some(t) if t != self.threshold_temperature => {
                let old = self.threshold_temperature;
                self.threshold_temperature = t;
                Some(old)
            }
            _ => None,
        }
    }
}
