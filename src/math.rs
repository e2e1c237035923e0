//! Integer helpers for time-proportional animation math.
//!
//! Everything here works on whole milliseconds and truncates, so results are
//! exact floors instead of rounded floating point.

/// Scale `value` by `position / total`, rounding down
///
/// `position` is clamped to `total`. A zero `total` yields `value`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn portion(value: usize, position: u32, total: u32) -> usize {
    if total == 0 || position >= total {
        return value;
    }
    ((value as u64 * position as u64) / total as u64) as usize
}

/// Linear interpolation between two channels, truncated toward zero
///
/// Computes `a + (b - a) * position / total` with `position` clamped to
/// `total`, truncating the whole result. A zero `total` yields `b`.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn lerp8(a: u8, b: u8, position: u32, total: u32) -> u8 {
    if total == 0 || position >= total {
        return b;
    }
    // Weighted sum of both ends, never negative.
    let weighted = a as u64 * (total - position) as u64 + b as u64 * position as u64;
    (weighted / total as u64) as u8
}
