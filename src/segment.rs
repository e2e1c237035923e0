use crate::color::Rgb;

/// Contiguous range of pixels `[start, start + length)`
///
/// Segments are not validated against the strip length. Pixels that fall
/// outside the frame are skipped when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    pub start: usize,
    pub length: usize,
}

impl Segment {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Index one past the last pixel of the segment
    pub const fn end(self) -> usize {
        self.start.saturating_add(self.length)
    }

    /// Get the part of the frame covered by the segment
    ///
    /// The returned slice is shorter than `length` when the segment runs past
    /// the end of the frame, and empty when it starts past it.
    pub fn slice_mut(self, frame: &mut [Rgb]) -> &mut [Rgb] {
        let start = self.start.min(frame.len());
        let end = self.end().min(frame.len());
        &mut frame[start..end]
    }
}

/// Set a pixel of a segment slice, ignoring indexes past its end
#[inline]
pub(crate) fn put(leds: &mut [Rgb], index: usize, color: Rgb) {
    if let Some(led) = leds.get_mut(index) {
        *led = color;
    }
}
