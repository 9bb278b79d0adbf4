//! Small integer helpers for effects

/// Shift a value right, saturating to zero for shifts of a byte or more
#[inline]
pub const fn shr8(value: u8, shift: u8) -> u8 {
    if shift >= 8 { 0 } else { value >> shift }
}

/// Deterministic hash (`SplitMix64` mixing, folded to 32 bits)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn hash(x: u64) -> u32 {
    let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    (z ^ (z >> 31)) as u32
}

/// Random numbers that depend only on the frame, pixel and draw number.
///
/// Effects stay pure functions of the frame counter: rendering the same frame
/// twice gives the same sparks.
#[derive(Debug, Clone, Copy)]
pub struct FrameNoise {
    seed: u64,
}

impl FrameNoise {
    /// Noise source for one frame; `stream` separates effects
    pub const fn new(frame: u32, stream: u8) -> Self {
        Self {
            seed: ((stream as u64) << 56) | ((frame as u64) << 16),
        }
    }

    /// Uniform value in `0..bound` for the `draw`-th number of `pixel`.
    ///
    /// `bound` is capped at 256; a zero bound yields zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn below(&self, pixel: u8, draw: u8, bound: u16) -> u8 {
        let bound = if bound > 256 { 256 } else { bound };
        let key = self.seed | ((pixel as u64) << 8) | draw as u64;
        let bits = hash(key) >> 16;
        ((bits * bound as u32) >> 16) as u8
    }

    /// True once in `one_in` on average
    pub const fn chance(&self, pixel: u8, draw: u8, one_in: u16) -> bool {
        self.below(pixel, draw, one_in) == 0
    }
}
