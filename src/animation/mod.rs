//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animate` trait and owns an
//! [`AnimationClock`] with the fields every variant shares.

mod block_wipe;
mod color_transition;
mod wipe;

pub use block_wipe::BlockWipeAnimation;
pub use color_transition::{ColorTransitionAnimation, MAX_TRANSITION_LEDS};
pub use wipe::WipeAnimation;

use embassy_time::Duration;

use crate::{color::Rgb, segment::Segment, time::Tick};

const ANIMATION_NAME_WIPE: &str = "wipe";
const ANIMATION_NAME_BLOCK_WIPE: &str = "block_wipe";
const ANIMATION_NAME_COLOR_TRANSITION: &str = "color_transition";

pub trait Animate {
    /// Render the animation into its segment of the frame
    ///
    /// Returns `false` once the animation has finished.
    fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool;

    /// Restart the animation clock at `now`
    fn restart(&mut self, now: Tick);
}

/// Segment and timing shared by all animation variants
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    segment: Segment,
    duration_ms: u32,
    start_time: Tick,
}

impl AnimationClock {
    pub fn new(segment: Segment, duration: Duration) -> Self {
        Self {
            segment,
            duration_ms: u32::try_from(duration.as_millis()).unwrap_or(u32::MAX),
            start_time: Tick::default(),
        }
    }

    pub const fn segment(&self) -> Segment {
        self.segment
    }

    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub const fn start_time(&self) -> Tick {
        self.start_time
    }

    /// Milliseconds since the last restart
    pub const fn elapsed(&self, now: Tick) -> u32 {
        now.elapsed_since(self.start_time)
    }

    pub fn restart(&mut self, now: Tick) {
        self.start_time = now;
    }
}

/// Animation - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum Animation {
    /// Progressive fill of a segment
    Wipe(WipeAnimation),
    /// Single block travelling across a segment
    BlockWipe(BlockWipeAnimation),
    /// Fade of a segment toward a target color
    ColorTransition(ColorTransitionAnimation),
}

/// Known animation kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    Wipe,
    BlockWipe,
    ColorTransition,
}

impl AnimationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wipe => ANIMATION_NAME_WIPE,
            Self::BlockWipe => ANIMATION_NAME_BLOCK_WIPE,
            Self::ColorTransition => ANIMATION_NAME_COLOR_TRANSITION,
        }
    }
}

impl Animation {
    /// Render the current animation frame
    pub fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        match self {
            Self::Wipe(animation) => animation.update(now, frame),
            Self::BlockWipe(animation) => animation.update(now, frame),
            Self::ColorTransition(animation) => animation.update(now, frame),
        }
    }

    /// Restart the animation clock
    pub fn restart(&mut self, now: Tick) {
        match self {
            Self::Wipe(animation) => animation.restart(now),
            Self::BlockWipe(animation) => animation.restart(now),
            Self::ColorTransition(animation) => animation.restart(now),
        }
    }

    pub const fn clock(&self) -> &AnimationClock {
        match self {
            Self::Wipe(animation) => animation.clock(),
            Self::BlockWipe(animation) => animation.clock(),
            Self::ColorTransition(animation) => animation.clock(),
        }
    }

    pub const fn segment(&self) -> Segment {
        self.clock().segment()
    }

    pub const fn kind(&self) -> AnimationKind {
        match self {
            Self::Wipe(_) => AnimationKind::Wipe,
            Self::BlockWipe(_) => AnimationKind::BlockWipe,
            Self::ColorTransition(_) => AnimationKind::ColorTransition,
        }
    }
}

impl From<WipeAnimation> for Animation {
    fn from(animation: WipeAnimation) -> Self {
        Self::Wipe(animation)
    }
}

impl From<BlockWipeAnimation> for Animation {
    fn from(animation: BlockWipeAnimation) -> Self {
        Self::BlockWipe(animation)
    }
}

impl From<ColorTransitionAnimation> for Animation {
    fn from(animation: ColorTransitionAnimation) -> Self {
        Self::ColorTransition(animation)
    }
}
