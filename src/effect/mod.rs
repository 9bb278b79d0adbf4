//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid trait objects.
//! Each effect implements the `Effect` trait and is a pure function of the
//! frame counter and the register bank: effects hold no state of their own.

mod fire;
mod night_sky;
mod pie_chart;
mod rainbow;
mod ripple;

use embassy_time::Duration;

pub use fire::{FIRE_PALETTE, FireEffect};
pub use night_sky::NightSkyEffect;
pub use pie_chart::{PieChartEffect, PieSegment};
pub use rainbow::RainbowEffect;
pub use ripple::{RIPPLE_PERIOD, RippleEffect};

use crate::frame::PixelSink;
use crate::registers::RegisterBank;

const MODE_NAME_AUTOMATIC: &str = "automatic";
const MODE_NAME_FIRE: &str = "fire";
const MODE_NAME_PIE_CHART: &str = "pie_chart";
const MODE_NAME_NIGHT_SKY: &str = "night_sky";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_RIPPLE: &str = "ripple";

pub const MODE_ID_AUTOMATIC: u8 = 0x00;
pub const MODE_ID_FIRE: u8 = b'F';
pub const MODE_ID_PIE_CHART: u8 = b'P';
pub const MODE_ID_NIGHT_SKY: u8 = b'S';
pub const MODE_ID_RAINBOW: u8 = b'B';
/// Written by the automatic timeline when it finishes; any unknown byte
/// decodes to ripple as well
pub const MODE_ID_RIPPLE: u8 = b'R';

pub trait Effect {
    /// Pause after each rendered frame
    const FRAME_INTERVAL: Duration;

    /// Render frame number `frame` into a cleared sink
    fn render<S: PixelSink>(&self, frame: u32, registers: &RegisterBank, sink: &mut S);
}

/// Mode selected by the mode register
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Built-in ripple, then fire, then switch off
    Automatic,
    Fire,
    PieChart,
    NightSky,
    Rainbow,
    /// Explicit ripple and the fallback for unknown mode bytes
    Ripple,
}

impl Mode {
    /// Decode a mode byte. Never fails: unknown bytes select ripple.
    pub const fn from_raw(value: u8) -> Self {
        match value {
            MODE_ID_AUTOMATIC => Self::Automatic,
            MODE_ID_FIRE => Self::Fire,
            MODE_ID_PIE_CHART => Self::PieChart,
            MODE_ID_NIGHT_SKY => Self::NightSky,
            MODE_ID_RAINBOW => Self::Rainbow,
            _ => Self::Ripple,
        }
    }

    /// Canonical mode byte
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Automatic => MODE_ID_AUTOMATIC,
            Self::Fire => MODE_ID_FIRE,
            Self::PieChart => MODE_ID_PIE_CHART,
            Self::NightSky => MODE_ID_NIGHT_SKY,
            Self::Rainbow => MODE_ID_RAINBOW,
            Self::Ripple => MODE_ID_RIPPLE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => MODE_NAME_AUTOMATIC,
            Self::Fire => MODE_NAME_FIRE,
            Self::PieChart => MODE_NAME_PIE_CHART,
            Self::NightSky => MODE_NAME_NIGHT_SKY,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Ripple => MODE_NAME_RIPPLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_AUTOMATIC => Some(Self::Automatic),
            MODE_NAME_FIRE => Some(Self::Fire),
            MODE_NAME_PIE_CHART => Some(Self::PieChart),
            MODE_NAME_NIGHT_SKY => Some(Self::NightSky),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_RIPPLE => Some(Self::Ripple),
            _ => None,
        }
    }

    /// Effect rendered indefinitely by this mode
    ///
    /// Returns `None` for [`Mode::Automatic`], whose effect depends on the
    /// frame counter.
    pub const fn to_slot(self) -> Option<EffectSlot> {
        Some(match self {
            Self::Automatic => return None,
            Self::Fire => EffectSlot::Fire(FireEffect),
            Self::PieChart => EffectSlot::PieChart(PieChartEffect),
            Self::NightSky => EffectSlot::NightSky(NightSkyEffect),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect),
            Self::Ripple => EffectSlot::Ripple(RippleEffect),
        })
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSlot {
    Ripple(RippleEffect),
    Fire(FireEffect),
    PieChart(PieChartEffect),
    Rainbow(RainbowEffect),
    NightSky(NightSkyEffect),
}

impl EffectSlot {
    /// Render the current effect
    pub fn render<S: PixelSink>(&self, frame: u32, registers: &RegisterBank, sink: &mut S) {
        match self {
            Self::Ripple(effect) => effect.render(frame, registers, sink),
            Self::Fire(effect) => effect.render(frame, registers, sink),
            Self::PieChart(effect) => effect.render(frame, registers, sink),
            Self::Rainbow(effect) => effect.render(frame, registers, sink),
            Self::NightSky(effect) => effect.render(frame, registers, sink),
        }
    }

    /// Pause after a frame of this effect
    pub const fn frame_interval(&self) -> Duration {
        match self {
            Self::Ripple(_) => RippleEffect::FRAME_INTERVAL,
            Self::Fire(_) => FireEffect::FRAME_INTERVAL,
            Self::PieChart(_) => PieChartEffect::FRAME_INTERVAL,
            Self::Rainbow(_) => RainbowEffect::FRAME_INTERVAL,
            Self::NightSky(_) => NightSkyEffect::FRAME_INTERVAL,
        }
    }

    /// Mode that renders this effect on its own
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Ripple(_) => Mode::Ripple,
            Self::Fire(_) => Mode::Fire,
            Self::PieChart(_) => Mode::PieChart,
            Self::Rainbow(_) => Mode::Rainbow,
            Self::NightSky(_) => Mode::NightSky,
        }
    }
}
