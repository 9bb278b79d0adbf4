//! Pixel sink and frame buffer
//!
//! Effects address physical pixels through [`PixelSink`]. The dispatcher
//! clears the sink before every frame and flushes it afterwards.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::topology::PIXEL_COUNT;

/// Per-pixel color target
pub trait PixelSink {
    /// Set the color of a physical pixel
    ///
    /// Indices outside the strip are ignored.
    fn set_pixel(&mut self, index: u8, color: Rgb);

    /// Turn every pixel off
    fn clear(&mut self);

    /// Send the frame to the LEDs
    fn flush(&mut self);

    /// Switch the LED power line
    fn set_power(&mut self, _on: bool) {}
}

/// Frame buffer for the whole strip in front of an [`OutputDriver`]
pub struct FrameBuffer<D: OutputDriver> {
    driver: D,
    pixels: [Rgb; PIXEL_COUNT],
}

impl<D: OutputDriver> FrameBuffer<D> {
    /// Create a dark frame buffer
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            pixels: [Rgb { r: 0, g: 0, b: 0 }; PIXEL_COUNT],
        }
    }

    /// Colors of the frame being built
    pub const fn pixels(&self) -> &[Rgb; PIXEL_COUNT] {
        &self.pixels
    }

    /// Color of one physical pixel, black outside the strip
    pub fn pixel(&self, index: u8) -> Rgb {
        self.pixels
            .get(usize::from(index))
            .copied()
            .unwrap_or_default()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver> PixelSink for FrameBuffer<D> {
    fn set_pixel(&mut self, index: u8, color: Rgb) {
        match self.pixels.get_mut(usize::from(index)) {
            Some(pixel) => *pixel = color,
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[FrameBuffer.set_pixel] pixel {} is off the strip", index);
            }
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::default());
    }

    fn flush(&mut self) {
        self.driver.write(&self.pixels);
    }

    fn set_power(&mut self, on: bool) {
        self.driver.set_power(on);
    }
}
