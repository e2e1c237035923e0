//! Frame pacing for the host loop.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::Duration;

use crate::buffer::PixelBuffer;
use crate::manager::LightManager;
use crate::time::{Clock, Tick};

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Tick,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Frame scheduler that drives a light manager at a steady cadence.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Updates the light manager, which flushes the strip
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(manager);
///
/// loop {
///     let result = scheduler.tick()?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<B: PixelBuffer, C: Clock, const ENTRIES: usize, const STEPS: usize> {
    manager: LightManager<B, C, ENTRIES, STEPS>,
    next_frame: Option<Tick>,
    frame_ms: u32,
}

impl<B: PixelBuffer, C: Clock, const ENTRIES: usize, const STEPS: usize>
    FrameScheduler<B, C, ENTRIES, STEPS>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) for frame timing.
    pub fn new(manager: LightManager<B, C, ENTRIES, STEPS>) -> Self {
        Self::with_frame_duration(manager, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        manager: LightManager<B, C, ENTRIES, STEPS>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            manager,
            next_frame: None,
            frame_ms: u32::try_from(frame_duration.as_millis()).unwrap_or(u32::MAX),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Updates the light manager with a single sampled time
    /// 3. Returns the deadline for the next frame
    ///
    /// A flush failure is returned as is, the frame timing is left unchanged.
    #[allow(clippy::cast_sign_loss)]
    pub fn tick(&mut self) -> Result<FrameResult, B::Error> {
        let now = self.manager.now();

        // Drift correction: if we've fallen more than two frames behind,
        // reset to now instead of bursting through the backlog.
        let max_drift = i64::from(self.frame_ms) * 2;
        let next_frame = match self.next_frame {
            Some(next) if i64::from(now.diff(next)) <= max_drift => next,
            _ => now,
        };

        self.manager.update_at(now)?;

        let next_frame = next_frame.wrapping_add(self.frame_ms);
        self.next_frame = Some(next_frame);

        let ahead = next_frame.diff(now);
        let sleep_duration = if ahead > 0 {
            Duration::from_millis(u64::from(ahead as u32))
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the light manager.
    pub fn manager(&self) -> &LightManager<B, C, ENTRIES, STEPS> {
        &self.manager
    }

    /// Get a mutable reference to the light manager.
    pub fn manager_mut(&mut self) -> &mut LightManager<B, C, ENTRIES, STEPS> {
        &mut self.manager
    }
}
