mod resolver;
mod utils;
mod wheel;

use smart_leds::RGB8;

pub use resolver::resolve_color;
pub use utils::{blend_half, scale_rgb, shift_rgb};
pub use wheel::{HUE_WHEEL, Hsv16, hsv16_to_rgb};

pub type Rgb = RGB8;
