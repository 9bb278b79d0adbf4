use crate::color::Rgb;

/// Size of the 16-bit hue space; one full turn of the wheel
pub const HUE_WHEEL: u32 = 65_536;

/// Number of distinct integer hues on the wheel (6 sectors of 255 steps)
const WHEEL_STEPS: u32 = 1530;

/// HSV color with a 16-bit hue
///
/// `smart_leds::hsv::Hsv` only has 256 hues, which is too coarse for
/// spacing colors by `65536 / n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsv16 {
    pub hue: u16,
    pub sat: u8,
    pub val: u8,
}

impl Hsv16 {
    /// Fully saturated color at the given hue and value
    pub const fn saturated(hue: u16, val: u8) -> Self {
        Self {
            hue,
            sat: 255,
            val,
        }
    }
}

/// Convert a 16-bit hue HSV color to RGB
///
/// The hue is first reduced to 1530 wheel steps (rounded), mapped to a pure
/// color, then desaturated and scaled by value with 8-bit fixed-point math.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn hsv16_to_rgb(hsv: Hsv16) -> Rgb {
    let hue = (hsv.hue as u32 * WHEEL_STEPS + 32_768) >> 16;

    let (r, g, b): (u32, u32, u32) = if hue < 510 {
        // Red to green
        if hue < 255 { (255, hue, 0) } else { (510 - hue, 255, 0) }
    } else if hue < 1020 {
        // Green to blue
        if hue < 765 { (0, 255, hue - 510) } else { (0, 1020 - hue, 255) }
    } else if hue < WHEEL_STEPS {
        // Blue to red
        if hue < 1275 { (hue - 1020, 0, 255) } else { (255, 0, WHEEL_STEPS - hue) }
    } else {
        (255, 0, 0)
    };

    let v1 = 1 + hsv.val as u32;
    let s1 = 1 + hsv.sat as u32;
    let s2 = 255 - hsv.sat as u32;

    Rgb {
        r: (((((r * s1) >> 8) + s2) * v1) >> 8) as u8,
        g: (((((g * s1) >> 8) + s2) * v1) >> 8) as u8,
        b: (((((b * s1) >> 8) + s2) * v1) >> 8) as u8,
    }
}
