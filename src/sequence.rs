//! Ordered, replayable groups of delayed animations.
//!
//! Every step of a sequence is an animation with its own start delay, counted
//! from the moment the current pass began. A pass ends when every step has
//! finished; the sequence then either starts the next pass or finishes.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    animation::Animation,
    color::Rgb,
    error::{Error, Result},
    schedule::{ScheduleState, ScheduledAnimation},
    time::Tick,
};

/// Replay count of a sequence when none is given
pub const DEFAULT_REPLAY_COUNT: u32 = 1;

/// Replay count that never finishes
pub const REPLAY_FOREVER: u32 = 0;

/// Sequence of scheduled animations
///
/// N is the maximum number of steps
#[derive(Debug, Clone)]
pub struct Sequence<const N: usize> {
    steps: Vec<ScheduledAnimation, N>,
    /// Number of passes to play, [`REPLAY_FOREVER`] for no limit
    replay_count: u32,
    /// Number of the pass in progress, starting from 1
    current_replay: u32,
}

impl<const N: usize> Sequence<N> {
    /// Build a sequence from animations and their start delays
    ///
    /// Fails without building anything if the counts differ or exceed `N`.
    /// The first pass starts on [`reset`](Self::reset), which the light manager
    /// calls when the sequence is added, or else on the first update.
    pub fn new(animations: &[Animation], delays: &[Duration], replay_count: u32) -> Result<Self> {
        if animations.len() != delays.len() {
            return Err(Error::LengthMismatch {
                animations: animations.len(),
                delays: delays.len(),
            });
        }
        if animations.len() > N {
            return Err(Error::TooManySteps {
                steps: animations.len(),
                capacity: N,
            });
        }

        let mut steps = Vec::new();
        for (animation, delay) in animations.iter().zip(delays) {
            let step = ScheduledAnimation::new(animation.clone(), *delay, Tick::default());
            // Capacity was checked above.
            let _ = steps.push(step);
        }

        Ok(Self {
            steps,
            replay_count,
            current_replay: 0,
        })
    }

    pub const fn replay_count(&self) -> u32 {
        self.replay_count
    }

    /// Number of the pass in progress, zero before the first start
    pub const fn current_replay(&self) -> u32 {
        self.current_replay
    }

    pub fn steps(&self) -> &[ScheduledAnimation] {
        &self.steps
    }

    /// Number of steps that have not finished in the current pass
    pub fn pending_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.state() != ScheduleState::Done)
            .count()
    }

    /// Start the next pass at `now`
    pub fn reset(&mut self, now: Tick) {
        for step in &mut self.steps {
            step.restart_animation(now);
            step.reset(now);
        }
        self.current_replay = self.current_replay.saturating_add(1);
    }

    /// Advance every unfinished step by one tick
    ///
    /// Returns `false` once the last pass has finished.
    pub fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        if self.current_replay == 0 {
            self.reset(now);
        }

        let mut running = false;
        for step in &mut self.steps {
            if step.state() != ScheduleState::Done && step.update(now, frame) {
                running = true;
            }
        }
        if running {
            return true;
        }

        if self.replay_count == REPLAY_FOREVER || self.current_replay < self.replay_count {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Sequence.update] pass {} of {} finished, replaying",
                self.current_replay, self.replay_count
            );
            self.reset(now);
            return true;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Sequence.update] finished after {} passes",
            self.current_replay
        );
        false
    }
}
