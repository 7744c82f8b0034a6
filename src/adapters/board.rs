//! Board adapter — bridges the peripheral register file to the port traits.
//!
//! Generic over [`RegisterBus`] so the same adapter drives the real
//! `/dev/mem` mapping in production and an in-memory fake in tests.
//! This is the only module that knows the electrical quirks of the
//! peripherals: the KEYs are active-low, the JP1 port needs its
//! direction register programmed, and the ADC wants auto-update enabled
//! once at startup.

use log::info;

use crate::app::ports::{AcquisitionPort, DisplayPort, InputPort, RawInputSnapshot};
use crate::control::state::Channel;
use crate::display::DisplayFrame;
use crate::registers::{
    self, RegisterBus, ADC_READY_BIT, ADC_SAMPLE_MASK, KEY_MASK,
};

/// Bit mask configuring all ten JP1 green-LED lines as outputs.
const JP1_GREEN_OUTPUTS: u32 = 0x3FF;

/// Concrete adapter combining all peripherals behind the port traits.
pub struct BoardAdapter<B> {
    bus: B,
    /// Channel addressed by the conversion in flight.
    active_channel: Channel,
}

impl<B: RegisterBus> BoardAdapter<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            active_channel: Channel::Ch0,
        }
    }

    /// One-shot peripheral setup: blank the indicators, configure the
    /// green-LED lines as outputs, and put the converter in auto-update
    /// mode so every later read sees a fresh sample.
    pub fn init(&mut self) {
        self.bus.write(registers::LEDR, 0);
        self.bus.write(registers::JP1, 0);
        self.bus.write(registers::JP1_DIR, JP1_GREEN_OUTPUTS);
        self.bus.write(registers::ADC_CH1, 1);
        info!("board: peripherals initialized, ADC auto-update on");
    }

    fn channel_offset(&self) -> usize {
        match self.active_channel {
            Channel::Ch0 => registers::ADC_CH0,
            Channel::Ch1 => registers::ADC_CH1,
        }
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<B: RegisterBus> InputPort for BoardAdapter<B> {
    fn read_inputs(&mut self) -> RawInputSnapshot {
        let switch_bits = self.bus.read(registers::SW);
        // KEYs are active-low: normalize to active-high for the arbiter.
        let button_bits = !self.bus.read(registers::KEY) & KEY_MASK;
        RawInputSnapshot {
            switch_bits,
            button_bits,
        }
    }
}

// ── AcquisitionPort implementation ────────────────────────────

impl<B: RegisterBus> AcquisitionPort for BoardAdapter<B> {
    fn start_conversion(&mut self, channel: Channel) {
        self.active_channel = channel;
        // A write to the channel-0 register kicks a conversion sweep of
        // all channels; harmless while auto-update is already running.
        self.bus.write(registers::ADC_CH0, 1);
    }

    fn poll_ready(&mut self) -> bool {
        self.bus.read(self.channel_offset()) & ADC_READY_BIT != 0
    }

    fn read_sample(&mut self) -> u16 {
        (self.bus.read(self.channel_offset()) & ADC_SAMPLE_MASK) as u16
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<B: RegisterBus> DisplayPort for BoardAdapter<B> {
    fn render(&mut self, frame: &DisplayFrame) {
        self.bus.write(registers::HEX3_HEX0, frame.hex3_hex0_word());
        self.bus.write(registers::HEX5_HEX4, frame.hex5_hex4_word());
        self.bus.write(registers::LEDR, frame.ledr);
        self.bus.write(registers::JP1, frame.green);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory register file.
    #[derive(Default)]
    struct FakeBus {
        words: HashMap<usize, u32>,
        writes: Vec<(usize, u32)>,
    }

    impl RegisterBus for FakeBus {
        fn read(&self, offset: usize) -> u32 {
            self.words.get(&offset).copied().unwrap_or(0)
        }

        fn write(&mut self, offset: usize, value: u32) {
            self.words.insert(offset, value);
            self.writes.push((offset, value));
        }
    }

    #[test]
    fn init_programs_direction_and_auto_update() {
        let mut hw = BoardAdapter::new(FakeBus::default());
        hw.init();
        assert!(hw.bus.writes.contains(&(registers::JP1_DIR, 0x3FF)));
        assert!(hw.bus.writes.contains(&(registers::ADC_CH1, 1)));
        assert_eq!(hw.bus.read(registers::LEDR), 0);
    }

    #[test]
    fn keys_are_inverted_to_active_high() {
        let mut hw = BoardAdapter::new(FakeBus::default());
        // All keys released: electrically high.
        hw.bus.words.insert(registers::KEY, 0xF);
        assert_eq!(hw.read_inputs().button_bits, 0);

        // KEY0 pressed: bit pulled low.
        hw.bus.words.insert(registers::KEY, 0xE);
        assert_eq!(hw.read_inputs().button_bits, 0x1);
    }

    #[test]
    fn sample_reads_are_masked_to_twelve_bits() {
        let mut hw = BoardAdapter::new(FakeBus::default());
        hw.bus
            .words
            .insert(registers::ADC_CH1, ADC_READY_BIT | 0xFFFF);
        hw.start_conversion(Channel::Ch1);
        assert!(hw.poll_ready());
        assert_eq!(hw.read_sample(), 0xFFF);
    }

    #[test]
    fn conversion_addresses_the_selected_channel() {
        let mut hw = BoardAdapter::new(FakeBus::default());
        hw.bus.words.insert(registers::ADC_CH0, ADC_READY_BIT | 100);
        hw.bus.words.insert(registers::ADC_CH1, ADC_READY_BIT | 200);

        hw.start_conversion(Channel::Ch0);
        assert_eq!(hw.read_sample(), 100);
        hw.start_conversion(Channel::Ch1);
        assert_eq!(hw.read_sample(), 200);
    }

    #[test]
    fn render_writes_all_four_output_registers() {
        let mut hw = BoardAdapter::new(FakeBus::default());
        let frame = DisplayFrame {
            hex3_hex0: [0x3F, 0x06, 0x5B, 0x4F],
            hex5_hex4: [0x5C, 0x3F],
            ledr: 0b0111,
            green: 0b11,
        };
        hw.render(&frame);
        assert_eq!(hw.bus.read(registers::HEX3_HEX0), 0x4F5B_063F);
        assert_eq!(hw.bus.read(registers::HEX5_HEX4), 0x3F5C);
        assert_eq!(hw.bus.read(registers::LEDR), 0b0111);
        assert_eq!(hw.bus.read(registers::JP1), 0b11);
    }
}
