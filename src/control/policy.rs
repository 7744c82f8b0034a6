//! Hysteresis fan policy — the algorithmic heart of the controller.
//!
//! ```text
//!                [temp >= threshold]
//!   IDLE ─────────────────────────────▶ RUNNING(min(100, excess*5))
//!     ▲                                    │
//!     │     [temp < threshold - dead_band] │ (speed re-derived while hot)
//!     └────────────────────────────────────┘
//!
//!   threshold - dead_band <= temp < threshold: no transition (sticky)
//! ```
//!
//! In manual mode the automatic transitions above are suppressed entirely
//! and only explicit button commands move the state.  Commands are applied
//! in the fixed order On, Off, SpeedUp, SpeedDown so that a tick asserting
//! both On and Off deterministically ends with the fan off.

use log::info;

use crate::config::ControllerConfig;
use crate::control::state::{ControllerState, FanState};

/// Discrete manual commands decoded from the push buttons.
/// Any subset may fire in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FanOn,
    FanOff,
    SpeedUp,
    SpeedDown,
}

/// Excess above the threshold at which the fan saturates to full speed.
const FULL_SPEED_EXCESS: u8 = 20;
/// Speed percent gained per unit of excess temperature.
const SPEED_PER_UNIT: u8 = 5;

/// Run one policy tick: automatic hysteresis in auto mode, explicit
/// commands in manual mode.  `state.current_temperature` and
/// `state.threshold_temperature` must already hold this tick's values.
pub fn tick(state: &mut ControllerState, commands: &[Command], config: &ControllerConfig) {
    if state.auto_mode {
        auto_tick(state, config);
    } else {
        apply_manual(state, commands, config);
    }
}

/// Automatic-mode transition function, evaluated once per tick.
pub fn auto_tick(state: &mut ControllerState, config: &ControllerConfig) {
    let temp = state.current_temperature;
    let threshold = state.threshold_temperature;

    if temp >= threshold {
        let excess = temp - threshold;
        let speed = if excess > FULL_SPEED_EXCESS {
            config.max_speed
        } else {
            (excess * SPEED_PER_UNIT).min(config.max_speed)
        };
        let next = FanState::Running { speed };
        if state.fan != next {
            if !state.fan.is_on() {
                info!("fan on: temp {} >= threshold {}, speed {}%", temp, threshold, speed);
            }
            state.fan = next;
        }
    } else if temp < threshold.saturating_sub(config.dead_band) {
        if state.fan.is_on() {
            info!("fan off: temp {} < threshold {} - {}", temp, threshold, config.dead_band);
        }
        state.fan = FanState::Idle;
    }
    // Inside the dead band the state is sticky: no transition, no speed
    // change, so temperature hovering near the threshold cannot chatter.
}

/// Manual-mode command application.  Automatic transitions do not run.
///
/// Speed steps only apply while running — stepping a stopped fan would
/// leave it idle with a remembered speed, which [`FanState`] rules out.
pub fn apply_manual(state: &mut ControllerState, commands: &[Command], config: &ControllerConfig) {
    // Fixed order: On, Off, SpeedUp, SpeedDown.  Off after On means Off
    // wins when both buttons land in the same tick.
    if commands.contains(&Command::FanOn) && !state.fan.is_on() {
        info!("manual: fan on");
        state.fan = FanState::Running { speed: 0 };
    }
    if commands.contains(&Command::FanOff) && state.fan.is_on() {
        info!("manual: fan off");
        state.fan = FanState::Idle;
    }
    if commands.contains(&Command::SpeedUp) {
        if let FanState::Running { speed } = state.fan {
            let next = speed.saturating_add(config.speed_step).min(config.max_speed);
            if next != speed {
                info!("manual: speed {}% -> {}%", speed, next);
            }
            state.fan = FanState::Running { speed: next };
        }
    }
    if commands.contains(&Command::SpeedDown) {
        if let FanState::Running { speed } = state.fan {
            let next = speed.saturating_sub(config.speed_step);
            if next != speed {
                info!("manual: speed {}% -> {}%", speed, next);
            }
            state.fan = FanState::Running { speed: next };
        }
    }
}
