//! Wipe animation
//!
//! Fills a segment pixel by pixel, proportionally to the elapsed time,
//! and leaves it filled when done.

use embassy_time::Duration;

use super::{Animate, AnimationClock};
use crate::{
    color::{BLACK, Rgb},
    math::portion,
    segment::{Segment, put},
    time::Tick,
};

/// Wipe animation - lights a growing part of the segment
#[derive(Debug, Clone)]
pub struct WipeAnimation {
    clock: AnimationClock,
    color: Rgb,
    /// Fill from the last pixel toward the first
    reverse: bool,
}

impl WipeAnimation {
    pub fn new(segment: Segment, duration: Duration, color: Rgb) -> Self {
        Self {
            clock: AnimationClock::new(segment, duration),
            color,
            reverse: false,
        }
    }

    /// Fill the segment starting from its end
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }
}

impl Animate for WipeAnimation {
    fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        let segment = self.clock.segment();
        let length = segment.length;
        let step = portion(length, self.clock.elapsed(now), self.clock.duration_ms());

        let leds = segment.slice_mut(frame);
        if step >= length {
            leds.fill(self.color);
            return false;
        }

        for i in 0..length {
            let index = if self.reverse { length - 1 - i } else { i };
            let color = if i < step { self.color } else { BLACK };
            put(leds, index, color);
        }
        true
    }

    fn restart(&mut self, now: Tick) {
        self.clock.restart(now);
    }
}
