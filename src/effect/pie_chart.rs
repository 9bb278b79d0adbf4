//! Pie chart effect
//!
//! Shows a progress value as a radial fill on every ring. Pixels before the
//! filled share get the "on" color, the pixel on the edge a blend, the rest
//! the "off" color. A full chart blinks.

use embassy_time::Duration;
use libm::{floorf, roundf};

use super::Effect;
use crate::color::{Rgb, blend_half, resolve_color};
use crate::frame::PixelSink;
use crate::registers::RegisterBank;
use crate::topology::{CENTER_PIXEL, Ring};

const SCRATCH_PROGRESS: u8 = 0;
const SCRATCH_BRIGHTNESS: u8 = 1;
const DEFAULT_BRIGHTNESS: u8 = 255;

/// Palette slots (or hue wheel thirds) for the two chart colors
const OFF_COLOR_INDEX: u8 = 0;
const ON_COLOR_INDEX: u8 = 1;
const CHART_COLOR_COUNT: u8 = 3;

const CENTER_ON_ABOVE: f32 = 0.66;
const CENTER_OFF_BELOW: f32 = 0.33;

/// Frames per blink phase of a full chart
const BLINK_SHIFT: u32 = 3;

/// How a ring position is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieSegment {
    On,
    Blend,
    Off,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieChartEffect;

impl PieChartEffect {
    /// Progress in `[0, 1]` encoded in a scratch byte
    pub fn progress(raw: u8) -> f32 {
        f32::from(raw) / 255.0
    }

    /// Fill of `position` on a ring of `ring_len` pixels
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn segment(position: usize, ring_len: usize, progress: f32) -> PieSegment {
        let filled = ring_len as f32 * progress;
        let turn_on = floorf(filled) as usize;
        let almost_there = roundf(filled) as usize;

        if position < turn_on {
            PieSegment::On
        } else if position < almost_there {
            PieSegment::Blend
        } else {
            PieSegment::Off
        }
    }

    /// Fill of the center pixel, by coarse thresholds
    pub fn center_segment(progress: f32) -> PieSegment {
        if progress > CENTER_ON_ABOVE {
            PieSegment::On
        } else if progress < CENTER_OFF_BELOW {
            PieSegment::Off
        } else {
            PieSegment::Blend
        }
    }

    /// Whether a full chart is in the dark half of its blink
    pub const fn blink_dark(frame: u32) -> bool {
        (frame >> BLINK_SHIFT) % 2 == 1
    }
}

impl Effect for PieChartEffect {
    const FRAME_INTERVAL: Duration = Duration::from_millis(100);

    fn render<S: PixelSink>(&self, frame: u32, registers: &RegisterBank, sink: &mut S) {
        let progress = Self::progress(registers.mode_scratch(SCRATCH_PROGRESS));
        let mut brightness = registers.mode_scratch_or(SCRATCH_BRIGHTNESS, DEFAULT_BRIGHTNESS);

        if progress >= 1.0 && Self::blink_dark(frame) {
            brightness = 0;
        }

        let off = resolve_color(registers, OFF_COLOR_INDEX, CHART_COLOR_COUNT, brightness);
        let on = resolve_color(registers, ON_COLOR_INDEX, CHART_COLOR_COUNT, brightness);
        let blend = blend_half(on, off);
        let color_of = |segment: PieSegment| -> Rgb {
            match segment {
                PieSegment::On => on,
                PieSegment::Blend => blend,
                PieSegment::Off => off,
            }
        };

        for ring in [Ring::Outer, Ring::Middle, Ring::Inner] {
            let pixels = ring.pixels();
            for (position, &pixel) in pixels.iter().enumerate() {
                let segment = Self::segment(position, pixels.len(), progress);
                sink.set_pixel(pixel, color_of(segment));
            }
        }

        sink.set_pixel(CENTER_PIXEL, color_of(Self::center_segment(progress)));
    }
}
