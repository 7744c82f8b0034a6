//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the per-tick orchestration for the controller:
//! read the sensor, arbitrate the operator inputs, run the fan policy,
//! encode the displays.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without a board.

pub mod events;
pub mod ports;
pub mod service;
