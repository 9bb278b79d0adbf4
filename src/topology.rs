//! Fixed ring topology of the LED cover
//!
//! Three concentric rings plus a single center pixel. Every table maps a
//! ring position to a physical pixel index on the strip; the order inside a
//! ring is the order animations walk it.

/// Number of physical pixels on the strip
pub const PIXEL_COUNT: usize = 47;

pub const OUTER_RING_SIZE: usize = 24;
pub const MIDDLE_RING_SIZE: usize = 16;
pub const INNER_RING_SIZE: usize = 6;

/// Outer ring, 24 pixels
pub const OUTER_RING: [u8; OUTER_RING_SIZE] = [
    6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 0, 1, 2, 3, 4, 5,
];

/// Middle ring, 16 pixels
pub const MIDDLE_RING: [u8; MIDDLE_RING_SIZE] =
    [35, 34, 33, 32, 31, 30, 29, 28, 27, 26, 25, 24, 39, 38, 37, 36];

/// Inner ring, 6 pixels
pub const INNER_RING: [u8; INNER_RING_SIZE] = [42, 43, 44, 45, 46, 41];

/// The single pixel in the middle of all rings
pub const CENTER_PIXEL: u8 = 40;

const CENTER: [u8; 1] = [CENTER_PIXEL];

/// Every pixel once: outer, middle, inner ring, then the center
pub const LED_ORDER: [u8; PIXEL_COUNT] = led_order();

const fn led_order() -> [u8; PIXEL_COUNT] {
    let mut order = [0; PIXEL_COUNT];
    let mut fill = 0;

    let mut i = 0;
    while i < OUTER_RING_SIZE {
        order[fill] = OUTER_RING[i];
        fill += 1;
        i += 1;
    }
    i = 0;
    while i < MIDDLE_RING_SIZE {
        order[fill] = MIDDLE_RING[i];
        fill += 1;
        i += 1;
    }
    i = 0;
    while i < INNER_RING_SIZE {
        order[fill] = INNER_RING[i];
        fill += 1;
        i += 1;
    }
    order[fill] = CENTER_PIXEL;
    order
}

/// One of the concentric pixel groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Outer,
    Middle,
    Inner,
    Center,
}

impl Ring {
    /// All rings from the outside in
    pub const ALL: [Ring; 4] = [Ring::Outer, Ring::Middle, Ring::Inner, Ring::Center];

    /// Ring by depth, 0 being the outer ring and 3 the center.
    ///
    /// Depths past 3 saturate to the center.
    pub const fn from_depth(depth: u8) -> Self {
        match depth {
            0 => Self::Outer,
            1 => Self::Middle,
            2 => Self::Inner,
            _ => Self::Center,
        }
    }

    pub const fn depth(self) -> u8 {
        match self {
            Self::Outer => 0,
            Self::Middle => 1,
            Self::Inner => 2,
            Self::Center => 3,
        }
    }

    /// Physical pixel indices of the ring in walk order
    pub const fn pixels(self) -> &'static [u8] {
        match self {
            Self::Outer => &OUTER_RING,
            Self::Middle => &MIDDLE_RING,
            Self::Inner => &INNER_RING,
            Self::Center => &CENTER,
        }
    }

    pub const fn len(self) -> usize {
        self.pixels().len()
    }

    /// Check if the ring holds the given physical pixel
    pub fn contains(self, pixel: u8) -> bool {
        self.pixels().contains(&pixel)
    }
}
