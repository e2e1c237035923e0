//! Wrapping millisecond ticks and the clock abstraction.
//!
//! Hardware tick counters overflow, so a [`Tick`] is a 32-bit millisecond
//! counter that wraps at `2^32`. Elapsed time between two ticks is always
//! computed with a wrapping signed difference, which stays correct across a
//! wrap boundary as long as the two ticks are less than ~24 days apart.

use embassy_time::Instant;

/// Millisecond timestamp from a wrapping monotonic counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tick(u32);

impl Tick {
    /// Create a tick from a raw millisecond counter value
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Raw millisecond counter value
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Signed difference `self - earlier`, wrap-safe
    #[allow(clippy::cast_possible_wrap)]
    pub const fn diff(self, earlier: Tick) -> i32 {
        self.0.wrapping_sub(earlier.0) as i32
    }

    /// Milliseconds elapsed since `earlier`
    ///
    /// A tick that lies in the future counts as zero elapsed time.
    #[allow(clippy::cast_sign_loss)]
    pub const fn elapsed_since(self, earlier: Tick) -> u32 {
        let diff = self.diff(earlier);
        if diff < 0 { 0 } else { diff as u32 }
    }

    /// Tick `millis` later, wrapping around the counter width
    #[must_use]
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Self(self.0.wrapping_add(millis))
    }
}

impl From<Instant> for Tick {
    #[allow(clippy::cast_possible_truncation)]
    fn from(instant: Instant) -> Self {
        // Keep the low 32 bits, the counter wraps like a hardware timer.
        Self(instant.as_millis() as u32)
    }
}

/// Monotonic time provider
///
/// The light manager samples its clock exactly once per tick, so every
/// animation updated during that tick observes the same timestamp.
pub trait Clock {
    /// Current time
    fn now(&self) -> Tick;
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Tick {
        Tick::from(Instant::now())
    }
}

impl<F: Fn() -> Tick> Clock for F {
    fn now(&self) -> Tick {
        self()
    }
}
