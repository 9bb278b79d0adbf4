//! Fire effect
//!
//! A warm flame palette chases around every ring, dimmer towards the center,
//! with rare cold-blue sparks in the gaps and a flickering center pixel.

use embassy_time::Duration;

use super::Effect;
use crate::color::{Rgb, shift_rgb};
use crate::frame::PixelSink;
use crate::math8::FrameNoise;
use crate::registers::RegisterBank;
use crate::topology::{CENTER_PIXEL, Ring};

/// Flame colors, hottest first
pub const FIRE_PALETTE: [Rgb; 13] = [
    Rgb { r: 64, g: 64, b: 160 },
    Rgb { r: 180, g: 16, b: 16 },
    Rgb { r: 220, g: 48, b: 48 },
    Rgb { r: 110, g: 24, b: 0 },
    Rgb { r: 55, g: 12, b: 0 },
    Rgb { r: 28, g: 6, b: 0 },
    Rgb { r: 14, g: 3, b: 0 },
    Rgb { r: 10, g: 2, b: 0 },
    Rgb { r: 6, g: 1, b: 0 },
    Rgb { r: 2, g: 0, b: 0 },
    Rgb { r: 1, g: 0, b: 0 },
    Rgb { r: 0, g: 0, b: 0 },
    Rgb { r: 1, g: 0, b: 0 },
];

/// Dimming shift per ring
const RING_SHIFTS: [(Ring, u8); 3] = [(Ring::Outer, 0), (Ring::Middle, 3), (Ring::Inner, 6)];

/// A spark needs a roll above this out of 256
const SPARK_THRESHOLD: u8 = 250;
/// The center picks among the hottest few flame colors
const CENTER_COLORS: u16 = 4;

const NOISE_STREAM: u8 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireEffect;

impl FireEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render_ring<S: PixelSink>(frame: u32, ring: Ring, shift: u8, noise: FrameNoise, sink: &mut S) {
        let size = ring.len() as u32;
        let phase = frame % size;

        for (position, &pixel) in (0u32..).zip(ring.pixels()) {
            let offset = ((phase + position) % size) as usize;
            if let Some(&flame) = FIRE_PALETTE.get(offset) {
                sink.set_pixel(pixel, shift_rgb(flame, shift));
            } else if noise.below(pixel, 0, 256) > SPARK_THRESHOLD {
                sink.set_pixel(pixel, Self::spark(pixel, noise));
            }
        }
    }

    const fn spark(pixel: u8, noise: FrameNoise) -> Rgb {
        Rgb {
            r: 32 + noise.below(pixel, 1, 128),
            g: 32 + noise.below(pixel, 2, 128),
            b: 128 + noise.below(pixel, 3, 128),
        }
    }
}

impl Effect for FireEffect {
    const FRAME_INTERVAL: Duration = Duration::from_millis(50);

    fn render<S: PixelSink>(&self, frame: u32, _registers: &RegisterBank, sink: &mut S) {
        let noise = FrameNoise::new(frame, NOISE_STREAM);

        for (ring, shift) in RING_SHIFTS {
            Self::render_ring(frame, ring, shift, noise, sink);
        }

        let center = usize::from(noise.below(CENTER_PIXEL, 0, CENTER_COLORS));
        let color = FIRE_PALETTE.get(center).copied().unwrap_or_default();
        sink.set_pixel(CENTER_PIXEL, color);
    }
}
