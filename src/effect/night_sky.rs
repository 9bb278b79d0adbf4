//! Night sky effect
//!
//! Faint blue stars blink up at random over the whole cover.

use embassy_time::Duration;

use super::Effect;
use crate::color::Rgb;
use crate::frame::PixelSink;
use crate::math8::FrameNoise;
use crate::registers::RegisterBank;
use crate::topology::LED_ORDER;

/// Each pixel lights once in this many frames on average
const STAR_ONE_IN: u16 = 150;
const STAR_MIN_BLUE: u8 = 2;

const NOISE_STREAM: u8 = 2;

/// Stars may appear on any of the 47 pixels, the center included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NightSkyEffect;

impl Effect for NightSkyEffect {
    const FRAME_INTERVAL: Duration = Duration::from_millis(50);

    fn render<S: PixelSink>(&self, frame: u32, _registers: &RegisterBank, sink: &mut S) {
        let noise = FrameNoise::new(frame, NOISE_STREAM);

        for &pixel in &LED_ORDER {
            if !noise.chance(pixel, 0, STAR_ONE_IN) {
                continue;
            }
            let secondary = noise.below(pixel, 1, 2);
            let star = Rgb {
                r: secondary,
                g: secondary,
                b: STAR_MIN_BLUE + noise.below(pixel, 2, 4),
            };
            sink.set_pixel(pixel, star);
        }
    }
}
