//! Delayed start for a single animation.

use embassy_time::Duration;

use crate::{animation::Animation, color::Rgb, time::Tick};

/// Lifecycle of a scheduled animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleState {
    /// Start delay has not elapsed yet, the buffer is left untouched
    Waiting,
    /// The wrapped animation is rendering
    Running,
    /// The wrapped animation has finished
    Done,
}

/// Animation gated by a start delay
///
/// The animation clock is restarted at the tick the delay runs out, so the
/// animation always plays from its beginning regardless of the delay.
#[derive(Debug, Clone)]
pub struct ScheduledAnimation {
    animation: Animation,
    delay_ms: u32,
    wait_start: Tick,
    state: ScheduleState,
}

impl ScheduledAnimation {
    /// Schedule `animation` to start `delay` after `now`
    pub fn new(animation: Animation, delay: Duration, now: Tick) -> Self {
        Self {
            animation,
            delay_ms: u32::try_from(delay.as_millis()).unwrap_or(u32::MAX),
            wait_start: now,
            state: ScheduleState::Waiting,
        }
    }

    pub const fn state(&self) -> ScheduleState {
        self.state
    }

    pub const fn animation(&self) -> &Animation {
        &self.animation
    }

    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Advance the schedule by one tick
    ///
    /// Returns `false` once the wrapped animation has finished.
    pub fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        match self.state {
            ScheduleState::Done => false,
            ScheduleState::Waiting => {
                if now.elapsed_since(self.wait_start) < self.delay_ms {
                    return true;
                }
                self.animation.restart(now);
                self.state = ScheduleState::Running;
                self.run(now, frame)
            }
            ScheduleState::Running => self.run(now, frame),
        }
    }

    /// Wait for the delay again, starting at `now`
    pub fn reset(&mut self, now: Tick) {
        self.wait_start = now;
        self.state = ScheduleState::Waiting;
    }

    /// Restart the wrapped animation clock without touching the schedule
    pub(crate) fn restart_animation(&mut self, now: Tick) {
        self.animation.restart(now);
    }

    fn run(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        let running = self.animation.update(now, frame);
        if !running {
            self.state = ScheduleState::Done;
        }
        running
    }
}
