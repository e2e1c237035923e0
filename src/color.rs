use smart_leds::RGB8;

use crate::math::lerp8;

pub type Rgb = RGB8;

/// Unlit pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Interpolate between two colors
///
/// # Arguments
/// * `from` - Color at `position == 0`
/// * `to` - Color at `position >= total`
/// * `position` - Elapsed part of the transition
/// * `total` - Full length of the transition
#[inline]
pub const fn lerp_color(from: Rgb, to: Rgb, position: u32, total: u32) -> Rgb {
    Rgb {
        r: lerp8(from.r, to.r, position, total),
        g: lerp8(from.g, to.g, position, total),
        b: lerp8(from.b, to.b, position, total),
    }
}
