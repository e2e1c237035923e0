//! Pixel buffer contract and the default frame buffer.

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// Addressable array of colors with an explicit flush
///
/// Animations write into [`pixels_mut`](Self::pixels_mut) during a tick, the
/// light manager calls [`flush`](Self::flush) once at the end of it.
pub trait PixelBuffer {
    /// Error reported when the pixels cannot be pushed to the strip
    type Error;

    /// All pixels of the strip
    fn pixels(&self) -> &[Rgb];

    /// All pixels of the strip, for writing
    fn pixels_mut(&mut self) -> &mut [Rgb];

    /// Push the pixels to the strip
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Number of pixels
    fn len(&self) -> usize {
        self.pixels().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a pixel, black if `index` is out of range
    fn get(&self, index: usize) -> Rgb {
        self.pixels().get(index).copied().unwrap_or(BLACK)
    }

    /// Set a pixel, ignored if `index` is out of range
    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels_mut().get_mut(index) {
            *pixel = color;
        }
    }

    /// Set every pixel to `color`
    fn fill(&mut self, color: Rgb) {
        self.pixels_mut().fill(color);
    }
}

/// Frame of `N` pixels flushed through an [`OutputDriver`]
#[derive(Debug)]
pub struct FrameBuffer<D: OutputDriver, const N: usize> {
    driver: D,
    frame: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> FrameBuffer<D, N> {
    /// Create a new black frame for `driver`
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            frame: [BLACK; N],
        }
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: OutputDriver, const N: usize> PixelBuffer for FrameBuffer<D, N> {
    type Error = D::Error;

    fn pixels(&self) -> &[Rgb] {
        &self.frame
    }

    fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.frame
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.driver.write(&self.frame)
    }
}
