//! Switch and push-button decoding.
//!
//! The operator-facing contract, fixed by the board assignment:
//!
//! | Input    | Meaning                                    |
//! |----------|--------------------------------------------|
//! | SW0      | ADC channel select (potentiometer 0 or 1)  |
//! | SW5..SW1 | Fan threshold 1-31 (0 = keep previous)     |
//! | SW9      | ON = manual mode, OFF = auto mode          |
//! | KEY0     | Fan on (manual mode)                       |
//! | KEY1     | Fan off (manual mode)                      |
//! | KEY2     | Speed +10 (manual mode)                    |
//! | KEY3     | Speed -10 (manual mode)                    |
//!
//! `button_bits` is expected active-high: the KEYs are active-low
//! electrically and the register adapter inverts them before they reach
//! this module.  All four commands may be asserted in the same snapshot;
//! the control policy decides which apply and in what order.

use heapless::Vec;

use crate::control::policy::Command;
use crate::control::state::Channel;
use crate::registers::{
    KEY_FAN_OFF, KEY_FAN_ON, KEY_SPEED_DOWN, KEY_SPEED_UP, SW_CHANNEL_MASK, SW_MANUAL_MODE,
    SW_THRESHOLD_MASK, SW_THRESHOLD_SHIFT,
};

/// Everything one tick learns from the operator inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDecode {
    /// Candidate threshold from SW5..SW1; `None` when the field reads
    /// zero, which is reserved as "no change".
    pub threshold: Option<u8>,
    /// Auto mode (SW9 clear) or manual mode (SW9 set).
    pub auto_mode: bool,
    /// ADC channel selected by SW0.
    pub channel: Channel,
    /// Button commands asserted this tick, in KEY0..KEY3 order.
    pub commands: Vec<Command, 4>,
}

/// Decode one raw input snapshot.  Pure; never fails — out-of-range bits
/// are simply masked off.
pub fn decode(switch_bits: u32, button_bits: u32) -> InputDecode {
    let candidate = ((switch_bits >> SW_THRESHOLD_SHIFT) & SW_THRESHOLD_MASK) as u8;
    let threshold = (candidate != 0).then_some(candidate);

    let auto_mode = switch_bits & SW_MANUAL_MODE == 0;
    let channel = Channel::from_bit(switch_bits & SW_CHANNEL_MASK);

    let mut commands = Vec::new();
    for (mask, command) in [
        (KEY_FAN_ON, Command::FanOn),
        (KEY_FAN_OFF, Command::FanOff),
        (KEY_SPEED_UP, Command::SpeedUp),
        (KEY_SPEED_DOWN, Command::SpeedDown),
    ] {
        if button_bits & mask != 0 {
            // Capacity 4 covers every button; push cannot fail.
            let _ = commands.push(command);
        }
    }

    InputDecode {
        threshold,
        auto_mode,
        channel,
        commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_comes_from_sw5_to_sw1() {
        // 25 = 0b11001, shifted past SW0.
        let d = decode(25 << 1, 0);
        assert_eq!(d.threshold, Some(25));

        // SW0 set must not disturb the threshold field.
        let d = decode((25 << 1) | 1, 0);
        assert_eq!(d.threshold, Some(25));
    }

    #[test]
    fn zero_threshold_field_means_no_change() {
        let d = decode(0, 0);
        assert_eq!(d.threshold, None);

        // Only SW0 and SW9 set: threshold field still zero.
        let d = decode(0x201, 0);
        assert_eq!(d.threshold, None);
    }

    #[test]
    fn threshold_spans_full_five_bit_range() {
        let d = decode(31 << 1, 0);
        assert_eq!(d.threshold, Some(31));
        let d = decode(1 << 1, 0);
        assert_eq!(d.threshold, Some(1));
    }

    #[test]
    fn sw9_selects_manual_mode() {
        assert!(decode(0, 0).auto_mode);
        assert!(!decode(0x200, 0).auto_mode);
    }

    #[test]
    fn sw0_selects_channel() {
        assert_eq!(decode(0, 0).channel, Channel::Ch0);
        assert_eq!(decode(1, 0).channel, Channel::Ch1);
    }

    #[test]
    fn buttons_map_to_commands_in_key_order() {
        let d = decode(0, 0b1111);
        assert_eq!(
            d.commands.as_slice(),
            &[
                Command::FanOn,
                Command::FanOff,
                Command::SpeedUp,
                Command::SpeedDown
            ]
        );
    }

    #[test]
    fn single_buttons_decode_independently() {
        assert_eq!(decode(0, 0b0001).commands.as_slice(), &[Command::FanOn]);
        assert_eq!(decode(0, 0b0010).commands.as_slice(), &[Command::FanOff]);
        assert_eq!(decode(0, 0b0100).commands.as_slice(), &[Command::SpeedUp]);
        assert_eq!(decode(0, 0b1000).commands.as_slice(), &[Command::SpeedDown]);
    }

    #[test]
    fn no_buttons_no_commands() {
        assert!(decode(0x3FF, 0).commands.is_empty());
    }
}
