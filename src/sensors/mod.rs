//! Sensor subsystem.
//!
//! One sensor on this board: the temperature channel fed by a selectable
//! potentiometer through the 12-bit ADC.

pub mod temperature;
