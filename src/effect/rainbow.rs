//! Rainbow effect
//!
//! The outer and middle rings each show a full hue wheel that rotates one
//! pixel per frame. The inner ring and center glow in a single, slowly
//! shifting hue.

use embassy_time::Duration;

use super::Effect;
use crate::color::{HUE_WHEEL, Hsv16, hsv16_to_rgb};
use crate::frame::PixelSink;
use crate::registers::RegisterBank;
use crate::topology::{CENTER_PIXEL, Ring};

const SCRATCH_BRIGHTNESS: u8 = 0;
const DEFAULT_BRIGHTNESS: u8 = 8;

const INNER_VALUE: u8 = 0x10;
const CENTER_VALUE: u8 = 0x20;
/// Hue advance of the inner glow per frame
const GLOW_HUE_STEP: u32 = 128;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainbowEffect;

impl RainbowEffect {
    /// Shared hue of the inner ring and center
    #[allow(clippy::cast_possible_truncation)]
    pub const fn glow_hue(frame: u32) -> u16 {
        frame.wrapping_mul(GLOW_HUE_STEP) as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_wheel<S: PixelSink>(frame: u32, ring: Ring, brightness: u8, sink: &mut S) {
        let pixels = ring.pixels();
        let size = pixels.len();
        let step = HUE_WHEEL / size as u32;
        let offset = (frame % size as u32) as usize;

        for i in 0..size {
            let hue = (step * i as u32) as u16;
            let position = (i + size - offset) % size;
            if let Some(&pixel) = pixels.get(position) {
                sink.set_pixel(pixel, hsv16_to_rgb(Hsv16::saturated(hue, brightness)));
            }
        }
    }
}

impl Effect for RainbowEffect {
    const FRAME_INTERVAL: Duration = Duration::from_millis(50);

    fn render<S: PixelSink>(&self, frame: u32, registers: &RegisterBank, sink: &mut S) {
        let brightness = registers.mode_scratch_or(SCRATCH_BRIGHTNESS, DEFAULT_BRIGHTNESS);

        Self::render_wheel(frame, Ring::Outer, brightness, sink);
        Self::render_wheel(frame, Ring::Middle, brightness, sink);

        let hue = Self::glow_hue(frame);
        let inner = hsv16_to_rgb(Hsv16::saturated(hue, INNER_VALUE));
        for &pixel in Ring::Inner.pixels() {
            sink.set_pixel(pixel, inner);
        }
        sink.set_pixel(CENTER_PIXEL, hsv16_to_rgb(Hsv16::saturated(hue, CENTER_VALUE)));
    }
}
