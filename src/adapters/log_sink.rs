//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the process logger.  A future serial or network adapter would
//! implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::state::{Channel, FanState};

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn fan_label(fan: FanState) -> String {
    match fan {
        FanState::Idle => "off".to_string(),
        FanState::Running { speed } => format!("on@{speed}%"),
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | temp={} | threshold={} | fan={} | mode={} | ch={}",
                    t.temperature,
                    t.threshold,
                    fan_label(t.fan),
                    if t.auto_mode { "auto" } else { "manual" },
                    match t.channel {
                        Channel::Ch0 => 0,
                        Channel::Ch1 => 1,
                    },
                );
            }
            AppEvent::FanChanged { from, to } => {
                info!("FAN   | {} -> {}", fan_label(*from), fan_label(*to));
            }
            AppEvent::ModeChanged { auto_mode } => {
                info!(
                    "MODE  | {}",
                    if *auto_mode { "auto" } else { "manual" }
                );
            }
            AppEvent::ThresholdChanged { from, to } => {
                info!("THRES | {} -> {}", from, to);
            }
            AppEvent::Started {
                threshold,
                auto_mode,
            } => {
                info!(
                    "START | threshold={} mode={}",
                    threshold,
                    if *auto_mode { "auto" } else { "manual" }
                );
            }
        }
    }
}
