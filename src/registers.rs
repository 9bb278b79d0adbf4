//! Shared register bank
//!
//! A fixed bank of 31 byte registers written from the bus interrupt and read
//! by the render loop. Every register is an [`AtomicU8`], so single bytes are
//! always read and written whole. Nothing stronger is promised: a frame may be
//! rendered with a palette or scratch byte that changed halfway through, and
//! the next frame picks up the settled value.
//!
//! Writes that must restart the animation phase bump a 32-bit generation
//! counter instead of touching the render loop's frame counter directly. The
//! bus is the only writer of the generation and the render loop the only
//! reader, so no read-modify-write is ever shared between the two contexts.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use crate::color::Rgb;
use crate::effect::{MODE_ID_RIPPLE, Mode};

/// Number of addressable registers
pub const REGISTER_COUNT: usize = 31;

/// Value returned for reads outside the bank
pub const SENTINEL: u8 = 0xFF;

/// Global disable flag (0 = enabled, 1 = disabled)
pub const ADDR_DISABLED: u8 = 0;
/// Mode selector byte
pub const ADDR_MODE: u8 = 1;
/// First per-mode scratch byte
pub const ADDR_MODE_SCRATCH: u8 = 2;
/// Number of per-mode scratch bytes
pub const MODE_SCRATCH_LEN: u8 = 8;
/// Palette enable flag (0 = hue wheel, anything else = palette)
pub const ADDR_USE_PALETTE: u8 = 10;
/// First byte of the packed RGB palette
pub const ADDR_PALETTE: u8 = 11;
/// Number of RGB slots in the palette
pub const PALETTE_SLOTS: u8 = 6;

const DISABLED: u8 = 0x01;
const ENABLED: u8 = 0x00;

/// Lock-free register bank shared between the bus and the render loop
#[derive(Debug)]
pub struct RegisterBank {
    cells: [AtomicU8; REGISTER_COUNT],
    generation: AtomicU32,
}

impl RegisterBank {
    /// Create a zeroed bank: enabled, automatic mode, hue wheel colors
    pub const fn new() -> Self {
        Self {
            cells: [const { AtomicU8::new(0) }; REGISTER_COUNT],
            generation: AtomicU32::new(0),
        }
    }

    /// Read a register as seen by the bus
    ///
    /// Returns [`SENTINEL`] for addresses outside the bank.
    pub fn read(&self, address: u8) -> u8 {
        self.cell(address)
            .map_or(SENTINEL, |cell| cell.load(Ordering::Relaxed))
    }

    /// Apply a bus write
    ///
    /// - Address 0 only accepts 0 (enable) or 1 (disable); any other value
    ///   is ignored. An accepted write restarts the animation phase.
    /// - Address 1 stores the mode byte and restarts the animation phase,
    ///   even when the value is unchanged.
    /// - Other addresses inside the bank store the byte as is.
    /// - Addresses outside the bank are ignored.
    ///
    /// Must only be called from one context at a time (the bus handler).
    pub fn write(&self, address: u8, value: u8) {
        match address {
            ADDR_DISABLED => {
                if value == ENABLED || value == DISABLED {
                    self.store(ADDR_DISABLED, value);
                    self.restart_phase();
                }
            }
            ADDR_MODE => {
                self.store(ADDR_MODE, value);
                self.restart_phase();
            }
            _ => self.store(address, value),
        }
    }

    /// Check if the device is disabled
    pub fn is_disabled(&self) -> bool {
        self.read(ADDR_DISABLED) != ENABLED
    }

    /// Raw mode byte
    pub fn mode_raw(&self) -> u8 {
        self.read(ADDR_MODE)
    }

    /// Decoded mode
    pub fn mode(&self) -> Mode {
        Mode::from_raw(self.mode_raw())
    }

    /// Read a per-mode scratch byte
    ///
    /// Indices past the scratch area read as zero.
    pub fn mode_scratch(&self, index: u8) -> u8 {
        if index >= MODE_SCRATCH_LEN {
            return 0;
        }
        self.read(ADDR_MODE_SCRATCH + index)
    }

    /// Read a per-mode scratch byte, substituting `default` for zero
    pub fn mode_scratch_or(&self, index: u8, default: u8) -> u8 {
        match self.mode_scratch(index) {
            0 => default,
            value => value,
        }
    }

    /// Check if colors come from the palette instead of the hue wheel
    pub fn palette_enabled(&self) -> bool {
        self.read(ADDR_USE_PALETTE) != 0
    }

    /// Palette color in `slot`, wrapping around the six slots
    pub fn palette_color(&self, slot: u8) -> Rgb {
        let start = ADDR_PALETTE + (slot % PALETTE_SLOTS) * 3;
        Rgb {
            r: self.read(start),
            g: self.read(start + 1),
            b: self.read(start + 2),
        }
    }

    /// Phase generation, bumped by every write that restarts the animation
    pub fn generation(&self) -> u32 {
        self.generation.load(Ordering::Acquire)
    }

    /// End of the automatic timeline: park on the ripple fallback and disable.
    ///
    /// Called by the render loop, which resets its own frame counter, so the
    /// generation is left alone. The two stores are not atomic with respect to
    /// the bus: a mode write that lands just before them is overwritten.
    pub(crate) fn finish_automatic(&self) {
        self.store(ADDR_MODE, MODE_ID_RIPPLE);
        self.store(ADDR_DISABLED, DISABLED);
    }

    fn restart_phase(&self) {
        // Single writer: the bus context never preempts itself
        let next = self.generation.load(Ordering::Relaxed).wrapping_add(1);
        self.generation.store(next, Ordering::Release);
    }

    fn store(&self, address: u8, value: u8) {
        if let Some(cell) = self.cell(address) {
            cell.store(value, Ordering::Relaxed);
        }
    }

    fn cell(&self, address: u8) -> Option<&AtomicU8> {
        self.cells.get(usize::from(address))
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}
