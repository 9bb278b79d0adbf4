#![no_std]

pub mod bus;
pub mod color;
pub mod dispatcher;
pub mod effect;
pub mod frame;
pub mod math8;
pub mod registers;
pub mod topology;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

pub use bus::{BusHandler, I2C_ADDRESS, Received};
pub use dispatcher::{
    AutoPhase, AutomaticTimeline, DispatchState, Dispatcher, DispatcherConfig, FrameResult,
};
pub use effect::{Effect, EffectSlot, Mode};
pub use frame::{FrameBuffer, PixelSink};
pub use registers::RegisterBank;

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame buffer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Drive the LED power line, if the board has one
    fn set_power(&mut self, _on: bool) {}
}

/// [`OutputDriver`] for any `smart-leds` writer
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        // Transport errors are not recoverable at this layer
        if self.writer.write(colors.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsDriver.write] failed to write frame");
        }
    }
}
