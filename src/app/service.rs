//! Controller service — per-tick orchestration of the control core.
//!
//! [`ControllerService`] owns the [`ControllerState`] and runs one full
//! cycle per tick.  All I/O flows through port traits injected at call
//! sites, making the whole service testable with scripted adapters.
//!
//! ```text
//!    InputPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!  AcquisitionPort │    ControllerService      │
//!                  │  arbiter · policy · frame │
//!    DisplayPort ◀─└──────────────────────────┘
//! ```

use crate::config::ControllerConfig;
use crate::control::policy;
use crate::control::state::ControllerState;
use crate::display;
use crate::input;
use crate::sensors::temperature::TemperatureSensor;

use super::events::{AppEvent, TelemetryData};
use super::ports::{AcquisitionPort, DisplayPort, EventSink, InputPort};

/// The application service orchestrating the control loop body.
pub struct ControllerService {
    state: ControllerState,
    sensor: TemperatureSensor,
    config: ControllerConfig,
    tick_count: u64,
}

impl ControllerService {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            state: ControllerState::new(&config),
            sensor: TemperatureSensor::new(),
            config,
            tick_count: 0,
        }
    }

    /// Announce startup.  Call once before the first [`tick`](Self::tick).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            threshold: self.state.threshold_temperature,
            auto_mode: self.state.auto_mode,
        });
    }

    /// Run one full control cycle: inputs → sensor → policy → display.
    ///
    /// The `hw` parameter satisfies all three hardware-facing ports —
    /// they are one physical register file, and a single generic bound
    /// avoids a triple mutable borrow while keeping the boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + AcquisitionPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Operator inputs.  Decoding first means this tick's sample
        //    already comes from the freshly selected channel.
        let snapshot = hw.read_inputs();
        let decoded = input::decode(snapshot.switch_bits, snapshot.button_bits);

        if decoded.auto_mode != self.state.auto_mode {
            self.state.auto_mode = decoded.auto_mode;
            sink.emit(&AppEvent::ModeChanged {
                auto_mode: decoded.auto_mode,
            });
        }
        if let Some(old) = self.state.apply_threshold(decoded.threshold) {
            sink.emit(&AppEvent::ThresholdChanged {
                from: old,
                to: self.state.threshold_temperature,
            });
        }
        self.state.selected_channel = decoded.channel;

        // 2. Temperature sample (may block briefly on the converter).
        self.state.current_temperature =
            self.sensor.read(hw, self.state.selected_channel);

        // 3. Fan policy.
        let prev_fan = self.state.fan;
        policy::tick(&mut self.state, &decoded.commands, &self.config);
        if self.state.fan != prev_fan {
            sink.emit(&AppEvent::FanChanged {
                from: prev_fan,
                to: self.state.fan,
            });
        }

        // 4. Render — the frame reflects this tick's decisions immediately.
        let frame = display::encode(&self.state);
        hw.render(&frame);

        // 5. Periodic telemetry.
        if self.tick_count % u64::from(self.config.telemetry_every_ticks) == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            temperature: self.state.current_temperature,
            threshold: self.state.threshold_temperature,
            fan: self.state.fan,
            auto_mode: self.state.auto_mode,
            channel: self.state.selected_channel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::state::FanState;

    #[test]
    fn new_service_starts_idle_in_auto() {
        let svc = ControllerService::new(ControllerConfig::default());
        assert_eq!(svc.state().fan, FanState::Idle);
        assert!(svc.state().auto_mode);
        assert_eq!(svc.tick_count(), 0);
    }

    #[test]
    fn start_emits_started_event() {
        struct Recorder(Vec<AppEvent>);
        impl EventSink for Recorder {
            fn emit(&mut self, event: &AppEvent) {
                self.0.push(*event);
            }
        }

        let mut svc = ControllerService::new(ControllerConfig::default());
        let mut sink = Recorder(Vec::new());
        svc.start(&mut sink);
        assert_eq!(
            sink.0,
            vec![AppEvent::Started {
                threshold: 25,
                auto_mode: true
            }]
        );
    }
}
