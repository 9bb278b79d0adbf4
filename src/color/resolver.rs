use crate::color::{HUE_WHEEL, Hsv16, Rgb, hsv16_to_rgb, scale_rgb};
use crate::registers::RegisterBank;

/// Pick the `index`-th of `count` colors at the given brightness.
///
/// With the palette enabled the color is the palette slot `index` scaled by
/// `brightness / 256`. Otherwise the hue wheel is split into `count` equal
/// steps and the color is the fully saturated hue `65536 / count * index`
/// at value `brightness`.
///
/// A `count` of zero is treated as one.
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_color(registers: &RegisterBank, index: u8, count: u8, brightness: u8) -> Rgb {
    if registers.palette_enabled() {
        return scale_rgb(registers.palette_color(index), brightness);
    }

    let step = HUE_WHEEL / u32::from(count.max(1));
    // Wraps within the 16-bit hue space
    let hue = (step * u32::from(index)) as u16;
    hsv16_to_rgb(Hsv16::saturated(hue, brightness))
}
