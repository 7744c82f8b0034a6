//! Thermofan — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  De10Bus            BoardAdapter          LogEventSink   │
//! │  (/dev/mem bridge)  (Input+Acq+Display)   (EventSink)    │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          ControllerService (pure logic)            │  │
//! │  │  input arbiter · hysteresis policy · display frame │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! One tick per poll interval: read inputs, sample the ADC, run the fan
//! policy, render the indicators, sleep.  Ctrl-C requests shutdown; the
//! bridge mapping is released on the way out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use thermofan::adapters::board::BoardAdapter;
use thermofan::adapters::de10::De10Bus;
use thermofan::adapters::log_sink::LogEventSink;
use thermofan::app::service::ControllerService;
use thermofan::config::ControllerConfig;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    banner();

    // ── 2. Map the peripheral bridge ──────────────────────────
    // Failure here is fatal: there is no controller without registers.
    let bus = De10Bus::map().context("mapping the lightweight FPGA bridge via /dev/mem")?;
    let mut hw = BoardAdapter::new(bus);
    hw.init();

    // ── 3. Construct the control core ─────────────────────────
    let config = ControllerConfig::default();
    let mut sink = LogEventSink::new();
    let mut service = ControllerService::new(config.clone());
    service.start(&mut sink);

    // ── 4. Shutdown hook ──────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("installing the Ctrl-C handler")?;
    }

    // ── 5. Poll loop ──────────────────────────────────────────
    let interval = Duration::from_millis(u64::from(config.poll_interval_ms));
    info!("entering poll loop ({} ms tick)", config.poll_interval_ms);

    while running.load(Ordering::SeqCst) {
        service.tick(&mut hw, &mut sink);
        thread::sleep(interval);
    }

    info!(
        "shutdown after {} ticks; releasing the bridge mapping",
        service.tick_count()
    );
    Ok(())
}

/// Operator cheat-sheet, printed once at startup.
fn banner() {
    info!("Temperature-Controlled Fan System");
    info!("SW0: select potentiometer (0 or 1)");
    info!("SW5-SW1: set temperature threshold (1-31)");
    info!("SW9: ON=manual mode, OFF=auto mode");
    info!("In manual mode:");
    info!("  KEY0: fan on    KEY1: fan off");
    info!("  KEY2: speed +10 KEY3: speed -10");
}
