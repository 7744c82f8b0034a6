//! Display frame — pure function of controller state.
//!
//! Layout, fixed by the board assignment:
//!
//! | Indicator  | Shows                                         |
//! |------------|-----------------------------------------------|
//! | HEX3..HEX2 | threshold temperature (tens, ones)            |
//! | HEX1..HEX0 | current temperature (tens, ones)              |
//! | HEX5..HEX4 | "OF" while stopped, else fan speed percent    |
//! | LEDR0      | fan running                                   |
//! | LEDR9..1   | fan speed bar, one LED per full 10%           |
//! | Green bank | absolute temperature bar, one LED per 10 units|

use crate::control::state::ControllerState;
use crate::display::seven_seg::{digit, GLYPH_F, GLYPH_O};

/// Number of bar LEDs available above the fan-status LED.
const SPEED_BAR_LEDS: u32 = 9;
/// Number of green LEDs in the temperature bar.
const TEMP_BAR_LEDS: u32 = 10;

/// One tick's worth of output, computed fresh from [`ControllerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFrame {
    /// Glyphs for HEX0..HEX3 (index 0 = HEX0).
    pub hex3_hex0: [u8; 4],
    /// Glyphs for HEX4 and HEX5 (index 0 = HEX4).
    pub hex5_hex4: [u8; 2],
    /// Red LED bank: status bit plus speed bar.
    pub ledr: u32,
    /// Green LED bank: temperature bar.
    pub green: u32,
}

impl DisplayFrame {
    /// Pack the four HEX3..HEX0 glyphs into the display group's word.
    pub fn hex3_hex0_word(&self) -> u32 {
        let [h0, h1, h2, h3] = self.hex3_hex0;
        u32::from(h3) << 24 | u32::from(h2) << 16 | u32::from(h1) << 8 | u32::from(h0)
    }

    /// Pack the HEX5..HEX4 glyphs into the low 16 bits of the group word.
    pub fn hex5_hex4_word(&self) -> u32 {
        let [h4, h5] = self.hex5_hex4;
        u32::from(h5) << 8 | u32::from(h4)
    }
}

/// Encode the controller state into one display frame.
pub fn encode(state: &ControllerState) -> DisplayFrame {
    let temp = state.current_temperature;
    let threshold = state.threshold_temperature;
    let speed = state.fan.speed();

    let hex3_hex0 = [
        digit(temp % 10),
        digit(temp / 10 % 10),
        digit(threshold % 10),
        digit(threshold / 10 % 10),
    ];

    // Stopped fan spells "OF"; running fan shows speed as two decimal
    // digits (100 renders as "00" — the glyph table has no tens digit
    // above 9, and LEDR already carries the full-speed bar).
    let hex5_hex4 = if state.fan.is_on() {
        [digit(speed % 10), digit(speed / 10 % 10)]
    } else {
        [GLYPH_F, GLYPH_O]
    };

    let bars = (u32::from(speed) / 10).min(SPEED_BAR_LEDS);
    let ledr = u32::from(state.fan.is_on()) | bar(bars) << 1;

    let green = bar((u32::from(temp) / 10).min(TEMP_BAR_LEDS));

    DisplayFrame {
        hex3_hex0,
        hex5_hex4,
        ledr,
        green,
    }
}

/// A thermometer bar: `count` contiguous set bits starting at bit 0.
fn bar(count: u32) -> u32 {
    match count {
        0 => 0,
        n => (1 << n) - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use crate::control::state::{ControllerState, FanState};
    use crate::display::seven_seg::DIGIT_GLYPHS;

    fn make_state(temp: u8, threshold: u8, fan: FanState) -> ControllerState {
        let mut s = ControllerState::new(&ControllerConfig::default());
        s.current_temperature = temp;
        s.threshold_temperature = threshold;
        s.fan = fan;
        s
    }

    #[test]
    fn temperature_and_threshold_digits() {
        let f = encode(&make_state(37, 25, FanState::Idle));
        assert_eq!(f.hex3_hex0[0], DIGIT_GLYPHS[7]); // HEX0: temp ones
        assert_eq!(f.hex3_hex0[1], DIGIT_GLYPHS[3]); // HEX1: temp tens
        assert_eq!(f.hex3_hex0[2], DIGIT_GLYPHS[5]); // HEX2: threshold ones
        assert_eq!(f.hex3_hex0[3], DIGIT_GLYPHS[2]); // HEX3: threshold tens
    }

    #[test]
    fn digits_independent_across_range() {
        for temp in 0..=99u8 {
            for threshold in [1u8, 9, 10, 25, 31] {
                let f = encode(&make_state(temp, threshold, FanState::Idle));
                assert_eq!(f.hex3_hex0[0], DIGIT_GLYPHS[(temp % 10) as usize]);
                assert_eq!(f.hex3_hex0[1], DIGIT_GLYPHS[(temp / 10) as usize]);
                assert_eq!(f.hex3_hex0[2], DIGIT_GLYPHS[(threshold % 10) as usize]);
                assert_eq!(f.hex3_hex0[3], DIGIT_GLYPHS[(threshold / 10) as usize]);
            }
        }
    }

    #[test]
    fn stopped_fan_spells_of() {
        let f = encode(&make_state(20, 25, FanState::Idle));
        assert_eq!(f.hex5_hex4, [GLYPH_F, GLYPH_O]);
        assert_eq!(f.hex5_hex4_word(), 0x3F5C);
    }

    #[test]
    fn running_fan_shows_speed_digits() {
        let f = encode(&make_state(30, 25, FanState::Running { speed: 25 }));
        assert_eq!(f.hex5_hex4[0], DIGIT_GLYPHS[5]);
        assert_eq!(f.hex5_hex4[1], DIGIT_GLYPHS[2]);
    }

    #[test]
    fn full_speed_renders_double_zero() {
        let f = encode(&make_state(90, 25, FanState::Running { speed: 100 }));
        assert_eq!(f.hex5_hex4, [DIGIT_GLYPHS[0], DIGIT_GLYPHS[0]]);
    }

    #[test]
    fn ledr_bit0_mirrors_fan_status() {
        let off = encode(&make_state(20, 25, FanState::Idle));
        assert_eq!(off.ledr & 1, 0);
        let on = encode(&make_state(30, 25, FanState::Running { speed: 0 }));
        assert_eq!(on.ledr & 1, 1);
    }

    #[test]
    fn speed_bar_counts_tens() {
        let f = encode(&make_state(30, 25, FanState::Running { speed: 30 }));
        // Bits 1,2,3 plus the status bit.
        assert_eq!(f.ledr, 0b1111);

        // 25% rounds down to two bars.
        let f = encode(&make_state(30, 25, FanState::Running { speed: 25 }));
        assert_eq!(f.ledr, 0b0111);
    }

    #[test]
    fn speed_bar_caps_at_nine_leds() {
        let f = encode(&make_state(90, 25, FanState::Running { speed: 100 }));
        assert_eq!(f.ledr, 0x3FF, "status bit plus all nine bar LEDs");
    }

    #[test]
    fn green_bar_tracks_absolute_temperature() {
        assert_eq!(encode(&make_state(0, 25, FanState::Idle)).green, 0);
        assert_eq!(encode(&make_state(35, 25, FanState::Idle)).green, 0b111);
        assert_eq!(encode(&make_state(100, 25, FanState::Idle)).green, 0x3FF);
    }

    #[test]
    fn word_packing_matches_display_groups() {
        let f = encode(&make_state(30, 25, FanState::Idle));
        let word = f.hex3_hex0_word();
        assert_eq!(word & 0xFF, u32::from(DIGIT_GLYPHS[0])); // HEX0
        assert_eq!(word >> 8 & 0xFF, u32::from(DIGIT_GLYPHS[3])); // HEX1
        assert_eq!(word >> 16 & 0xFF, u32::from(DIGIT_GLYPHS[5])); // HEX2
        assert_eq!(word >> 24 & 0xFF, u32::from(DIGIT_GLYPHS[2])); // HEX3
    }
}
