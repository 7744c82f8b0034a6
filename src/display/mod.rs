//! Display encoding — deterministic rendering of controller state onto
//! the board's indicators.
//!
//! `seven_seg` holds the fixed glyph table; `frame` turns a
//! [`ControllerState`](crate::control::state::ControllerState) into the
//! bit patterns the two seven-segment groups and both LED banks expect.
//! Everything here is pure: writing the result to hardware is the
//! register adapter's job.

pub mod frame;
pub mod seven_seg;

pub use frame::{DisplayFrame, encode};
