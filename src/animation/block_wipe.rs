//! Single block wipe animation
//!
//! Sends one block of pixels flying across a segment. The block starts fully
//! before the segment and ends fully past it, so its total travel is
//! `length + block_length` pixels.

use embassy_time::Duration;

use super::{Animate, AnimationClock};
use crate::{
    color::{BLACK, Rgb},
    math::portion,
    segment::{Segment, put},
    time::Tick,
};

/// Block wipe animation - a single block crossing the segment
#[derive(Debug, Clone)]
pub struct BlockWipeAnimation {
    clock: AnimationClock,
    block_length: usize,
    color: Rgb,
    /// Travel from the first pixel toward the last
    reverse: bool,
}

impl BlockWipeAnimation {
    /// Create a new block wipe
    ///
    /// Without [`reversed`](Self::reversed) the block enters at the last pixel
    /// of the segment and leaves past the first one.
    pub fn new(segment: Segment, block_length: usize, duration: Duration, color: Rgb) -> Self {
        Self {
            clock: AnimationClock::new(segment, duration),
            block_length,
            color,
            reverse: false,
        }
    }

    /// Move the block from the first pixel toward the last
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub const fn block_length(&self) -> usize {
        self.block_length
    }

    /// Map a travel position to a pixel index within the segment
    const fn index_of(&self, position: usize) -> usize {
        if self.reverse {
            position
        } else {
            self.clock.segment().length - 1 - position
        }
    }
}

impl Animate for BlockWipeAnimation {
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        let segment = self.clock.segment();
        let length = segment.length;
        let elapsed = self.clock.elapsed(now);
        let duration = self.clock.duration_ms();

        let leds = segment.slice_mut(frame);
        leds.fill(BLACK);
        if elapsed >= duration {
            return false;
        }

        let travel = length + self.block_length;
        let head = portion(travel, elapsed, duration) as i64 - self.block_length as i64;
        for i in 0..self.block_length {
            let position = head + i as i64;
            if (0..length as i64).contains(&position) {
                put(leds, self.index_of(position as usize), self.color);
            }
        }
        true
    }

    fn restart(&mut self, now: Tick) {
        self.clock.restart(now);
    }
}
