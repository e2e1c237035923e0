//! Color transition animation
//!
//! Fades every pixel of a segment from whatever it shows when the animation
//! starts toward a single target color.

use embassy_time::Duration;
use heapless::Vec;

use super::{Animate, AnimationClock};
use crate::{
    color::{BLACK, Rgb, lerp_color},
    error::{Error, Result},
    segment::Segment,
    time::Tick,
};

/// Maximum segment length a color transition can sample
pub const MAX_TRANSITION_LEDS: usize = 64;

/// Color transition - linear crossfade toward `target`
///
/// The segment colors are sampled lazily on the first update after every
/// restart, so the fade starts from whatever other animations left behind.
#[derive(Debug, Clone)]
pub struct ColorTransitionAnimation {
    clock: AnimationClock,
    target: Rgb,
    start_colors: Vec<Rgb, MAX_TRANSITION_LEDS>,
    sampled: bool,
}

impl ColorTransitionAnimation {
    /// Create a new color transition
    ///
    /// A zero `duration` sets the target color on the first update.
    pub fn new(segment: Segment, duration: Duration, target: Rgb) -> Result<Self> {
        if segment.length > MAX_TRANSITION_LEDS {
            return Err(Error::SegmentTooLong {
                length: segment.length,
                capacity: MAX_TRANSITION_LEDS,
            });
        }
        Ok(Self {
            clock: AnimationClock::new(segment, duration),
            target,
            start_colors: Vec::new(),
            sampled: false,
        })
    }

    pub const fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub const fn target(&self) -> Rgb {
        self.target
    }

    fn sample(&mut self, leds: &[Rgb]) {
        let length = self.clock.segment().length;
        self.start_colors.clear();
        // Length is bounded by the capacity check in `new`.
        self.start_colors
            .extend((0..length).map(|i| leds.get(i).copied().unwrap_or(BLACK)));
        self.sampled = true;
    }
}

impl Animate for ColorTransitionAnimation {
    fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        let duration = self.clock.duration_ms();
        let leds = self.clock.segment().slice_mut(frame);

        if !self.sampled {
            self.sample(leds);
            if duration == 0 {
                leds.fill(self.target);
                return false;
            }
        }

        let elapsed = self.clock.elapsed(now).min(duration);
        for (led, start) in leds.iter_mut().zip(&self.start_colors) {
            *led = lerp_color(*start, self.target, elapsed, duration);
        }
        elapsed < duration
    }

    fn restart(&mut self, now: Tick) {
        self.clock.restart(now);
        self.sampled = false;
    }
}
