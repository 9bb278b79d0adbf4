//! Ripple effect
//!
//! A pulse of color travels inwards one ring at a time. Every 52 frames the
//! pulse has passed all four rings (center first, then inner, middle, outer)
//! and the next color in the cycle takes over.

use embassy_time::Duration;

use super::Effect;
use crate::color::resolve_color;
use crate::frame::PixelSink;
use crate::math8::shr8;
use crate::registers::RegisterBank;
use crate::topology::Ring;

/// Frames for the pulse to cross every ring once
pub const RIPPLE_PERIOD: u32 = 52;
/// Frames the pulse spends on one ring
const RING_FRAMES: u32 = 13;
/// Step of the envelope with the full brightness
const ENVELOPE_PEAK: u32 = 6;

const DEFAULT_COLOR_COUNT: u8 = 6;
const DEFAULT_BRIGHTNESS: u8 = 255;

const SCRATCH_COLOR_COUNT: u8 = 0;
const SCRATCH_BRIGHTNESS: u8 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RippleEffect;

impl RippleEffect {
    /// Ring lit in the given frame
    #[allow(clippy::cast_possible_truncation)]
    pub const fn active_ring(frame: u32) -> Ring {
        let step = (frame % RIPPLE_PERIOD) / RING_FRAMES;
        Ring::from_depth(3 - step as u8)
    }

    /// Color of the cycle used in the given frame
    #[allow(clippy::cast_possible_truncation)]
    pub const fn color_index(frame: u32, color_count: u8) -> u8 {
        let count = if color_count == 0 { 1 } else { color_count as u32 };
        ((frame / RIPPLE_PERIOD) % count) as u8
    }

    /// Brightness of the active ring.
    ///
    /// A triangular envelope over the 13 frames spent on a ring, then a fixed
    /// attenuation per ring: the center is brightest, the outer ring dimmest.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn brightness(frame: u32, base: u8) -> u8 {
        let step = frame % RING_FRAMES;
        let enveloped = if step <= ENVELOPE_PEAK {
            shr8(base, (ENVELOPE_PEAK - step) as u8)
        } else {
            shr8(base, (step - ENVELOPE_PEAK + 1) as u8)
        };
        let ring = Self::active_ring(frame);
        shr8(enveloped, 3 - ring.depth())
    }
}

impl Effect for RippleEffect {
    const FRAME_INTERVAL: Duration = Duration::from_millis(30);

    fn render<S: PixelSink>(&self, frame: u32, registers: &RegisterBank, sink: &mut S) {
        let color_count = registers.mode_scratch_or(SCRATCH_COLOR_COUNT, DEFAULT_COLOR_COUNT);
        let base = registers.mode_scratch_or(SCRATCH_BRIGHTNESS, DEFAULT_BRIGHTNESS);

        let color = resolve_color(
            registers,
            Self::color_index(frame, color_count),
            color_count,
            Self::brightness(frame, base),
        );

        for &pixel in Self::active_ring(frame).pixels() {
            sink.set_pixel(pixel, color);
        }
    }
}
