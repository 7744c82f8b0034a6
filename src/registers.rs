//! Peripheral register map for the DE10-Standard lightweight bridge.
//!
//! Single source of truth — every adapter references this module rather
//! than hard-coding offsets.  Change an offset here and it propagates
//! everywhere.
//!
//! Offsets follow the board's lightweight HPS-to-FPGA bridge layout; the
//! bridge itself is mapped once at startup (see `adapters::de10`) and all
//! peripherals live at fixed word offsets within that window.

// ---------------------------------------------------------------------------
// Bridge window
// ---------------------------------------------------------------------------

/// Physical base address of the lightweight HPS-to-FPGA bridge.
pub const LW_BRIDGE_BASE: usize = 0xFF20_0000;
/// Size of the bridge window in bytes.
pub const LW_BRIDGE_SPAN: usize = 0x0020_0000;

// ---------------------------------------------------------------------------
// Peripheral offsets (bytes from the bridge base)
// ---------------------------------------------------------------------------

/// Red LED bank (LEDR9..LEDR0), one bit per LED.
pub const LEDR: usize = 0x0000;
/// Seven-segment displays HEX3..HEX0, one glyph byte per display.
pub const HEX3_HEX0: usize = 0x0020;
/// Seven-segment displays HEX5..HEX4 in the low 16 bits.
pub const HEX5_HEX4: usize = 0x0030;
/// Slide switches SW9..SW0.
pub const SW: usize = 0x0040;
/// Push buttons KEY3..KEY0.  Active-low electrically.
pub const KEY: usize = 0x0050;
/// JP1 GPIO expansion port — drives the green LED bank.
pub const JP1: usize = 0x0060;
/// JP1 direction register: bit set = output.
pub const JP1_DIR: usize = 0x0064;
/// ADC channel 0 data; a write starts a conversion sweep.
pub const ADC_CH0: usize = 0x4000;
/// ADC channel 1 data; writing any value enables auto-update mode.
pub const ADC_CH1: usize = 0x4004;

// ---------------------------------------------------------------------------
// Bit layout
// ---------------------------------------------------------------------------

/// SW0 selects the ADC input channel (potentiometer 0 or 1).
pub const SW_CHANNEL_MASK: u32 = 0x1;
/// SW5..SW1 hold the candidate threshold; shift right past SW0 first.
pub const SW_THRESHOLD_SHIFT: u32 = 1;
pub const SW_THRESHOLD_MASK: u32 = 0x1F;
/// SW9 set = manual mode, clear = auto mode.
pub const SW_MANUAL_MODE: u32 = 0x200;

/// The four push buttons occupy the low nibble of the KEY word.
pub const KEY_MASK: u32 = 0xF;
/// KEY0: turn the fan on (manual mode).
pub const KEY_FAN_ON: u32 = 0x1;
/// KEY1: turn the fan off (manual mode).
pub const KEY_FAN_OFF: u32 = 0x2;
/// KEY2: increase fan speed (manual mode).
pub const KEY_SPEED_UP: u32 = 0x4;
/// KEY3: decrease fan speed (manual mode).
pub const KEY_SPEED_DOWN: u32 = 0x8;

/// ADC samples are 12 bits wide.
pub const ADC_SAMPLE_MASK: u32 = 0xFFF;
/// Set by the converter when a channel's data word has been refreshed.
pub const ADC_READY_BIT: u32 = 1 << 15;

// ---------------------------------------------------------------------------
// Register bus
// ---------------------------------------------------------------------------

/// Word-granular access to the bridge window.
///
/// The production implementation maps `/dev/mem`; tests substitute an
/// in-memory fake.  Offsets are byte offsets from the bridge base and
/// must be word-aligned.
pub trait RegisterBus {
    fn read(&self, offset: usize) -> u32;
    fn write(&mut self, offset: usize, value: u32);
}
