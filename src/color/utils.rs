use crate::color::Rgb;

/// Even 50/50 mix of two colors, channel by channel
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn blend_half(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: ((a.r as u16 + b.r as u16) >> 1) as u8,
        g: ((a.g as u16 + b.g as u16) >> 1) as u8,
        b: ((a.b as u16 + b.b as u16) >> 1) as u8,
    }
}

/// Scale every channel by `brightness / 256`, truncating
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_rgb(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: ((color.r as u16 * brightness as u16) >> 8) as u8,
        g: ((color.g as u16 * brightness as u16) >> 8) as u8,
        b: ((color.b as u16 * brightness as u16) >> 8) as u8,
    }
}

/// Dim a color by a power of two
#[inline]
pub const fn shift_rgb(color: Rgb, shift: u8) -> Rgb {
    if shift >= 8 {
        return Rgb { r: 0, g: 0, b: 0 };
    }
    Rgb {
        r: color.r >> shift,
        g: color.g >> shift,
        b: color.b >> shift,
    }
}
