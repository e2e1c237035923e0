#![no_std]

pub mod animation;
pub mod buffer;
pub mod color;
pub mod error;
pub mod manager;
pub mod math;
pub mod schedule;
pub mod scheduler;
pub mod segment;
pub mod sequence;
pub mod time;
pub mod trigger;

pub use animation::{
    Animate, Animation, AnimationClock, AnimationKind, BlockWipeAnimation,
    ColorTransitionAnimation, MAX_TRANSITION_LEDS, WipeAnimation,
};
pub use buffer::{FrameBuffer, PixelBuffer};
pub use error::{Error, Result};
pub use manager::{Entry, LightManager, LightManagerConfig};
pub use schedule::{ScheduleState, ScheduledAnimation};
pub use scheduler::{FrameResult, FrameScheduler};
pub use segment::Segment;
pub use sequence::{DEFAULT_REPLAY_COUNT, REPLAY_FOREVER, Sequence};
pub use time::{Clock, SystemClock, Tick};
pub use trigger::{
    SendSequenceError, TriggerChannel, TriggerReceiver, TriggerSender, TrySendError,
};

pub use color::{BLACK, Rgb, lerp_color};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`FrameBuffer`] flushes its pixels through it.
pub trait OutputDriver {
    /// Error reported by the hardware
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> core::result::Result<(), Self::Error>;
}
