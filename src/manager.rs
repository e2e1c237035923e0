use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::Animation;
use crate::buffer::PixelBuffer;
use crate::color::{BLACK, Rgb};
use crate::error::{Error, Result};
use crate::segment::Segment;
use crate::sequence::Sequence;
use crate::time::{Clock, Tick};
use crate::trigger::TriggerReceiver;

/// Configuration for the light manager
#[derive(Debug, Clone)]
pub struct LightManagerConfig {
    /// Number of equal segments the strip is divided into
    ///
    /// Zero is treated as a single segment spanning the whole strip.
    pub segment_count: usize,
}

/// Entry of the active set
///
/// STEPS is the maximum number of steps of a sequence
#[derive(Debug, Clone)]
pub enum Entry<const STEPS: usize> {
    /// Standalone animation
    Animation(Animation),
    /// Sequence of delayed animations
    Sequence(Sequence<STEPS>),
}

impl<const STEPS: usize> Entry<STEPS> {
    /// Advance the entry by one tick, returns `false` once it has finished
    pub fn update(&mut self, now: Tick, frame: &mut [Rgb]) -> bool {
        match self {
            Self::Animation(animation) => animation.update(now, frame),
            Self::Sequence(sequence) => sequence.update(now, frame),
        }
    }

    /// Start the entry clock at `now`
    pub fn start(&mut self, now: Tick) {
        match self {
            Self::Animation(animation) => animation.restart(now),
            Self::Sequence(sequence) => sequence.reset(now),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Animation(animation) => animation.kind().as_str(),
            Self::Sequence(_) => "sequence",
        }
    }
}

impl<const STEPS: usize> From<Animation> for Entry<STEPS> {
    fn from(animation: Animation) -> Self {
        Self::Animation(animation)
    }
}

impl<const STEPS: usize> From<Sequence<STEPS>> for Entry<STEPS> {
    fn from(sequence: Sequence<STEPS>) -> Self {
        Self::Sequence(sequence)
    }
}

/// Light Manager - owns the strip and every running animation
///
/// ENTRIES is the size of the active set, STEPS the maximum number of steps
/// of a sequence.
pub struct LightManager<B: PixelBuffer, C: Clock, const ENTRIES: usize, const STEPS: usize> {
    // External dependencies
    buffer: B,
    clock: C,

    // Strip layout
    segment_count: usize,
    segment_length: usize,

    // Internal state
    active: Vec<Entry<STEPS>, ENTRIES>,
}

impl<B: PixelBuffer, C: Clock, const ENTRIES: usize, const STEPS: usize>
    LightManager<B, C, ENTRIES, STEPS>
{
    /// Create a new light manager over `buffer`
    pub fn new(buffer: B, clock: C, config: &LightManagerConfig) -> Self {
        let segment_count = config.segment_count.max(1);
        let segment_length = buffer.len() / segment_count;
        Self {
            buffer,
            clock,
            segment_count,
            segment_length,
            active: Vec::new(),
        }
    }

    /// Current time of the manager clock
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// Start an animation now
    ///
    /// The segment is not checked against the strip length.
    pub fn add_animation(&mut self, animation: impl Into<Animation>) -> Result<()> {
        self.add_entry(Entry::Animation(animation.into()))
    }

    /// Build a sequence and start its first pass now
    ///
    /// Nothing is added when the sequence configuration is invalid.
    pub fn add_sequence(
        &mut self,
        animations: &[Animation],
        delays: &[Duration],
        replay_count: u32,
    ) -> Result<()> {
        let sequence = Sequence::new(animations, delays, replay_count)?;
        self.add_entry(Entry::Sequence(sequence))
    }

    /// Start an entry now and append it to the active set
    pub fn add_entry(&mut self, mut entry: Entry<STEPS>) -> Result<()> {
        if self.active.is_full() {
            return Err(Error::ActiveSetFull);
        }
        entry.start(self.clock.now());
        self.active.push(entry).map_err(|_| Error::ActiveSetFull)
    }

    /// Drain pending triggers into the active set
    ///
    /// Stops early while the active set is full, the remaining triggers stay
    /// queued. Returns the number of entries added.
    pub fn process_triggers<const SIZE: usize>(
        &mut self,
        triggers: &TriggerReceiver<'_, STEPS, SIZE>,
    ) -> usize {
        let mut added = 0;
        while !self.active.is_full() {
            let Ok(entry) = triggers.try_receive() else {
                break;
            };
            if self.add_entry(entry).is_ok() {
                added += 1;
            }
        }
        #[cfg(feature = "esp32-log")]
        {
            let pending = triggers.pending();
            if pending > 0 {
                println!(
                    "[LightManager.process_triggers] active set full, {} triggers left queued",
                    pending
                );
            }
        }
        added
    }

    /// Advance every active entry and flush the buffer
    ///
    /// The clock is sampled once, so all entries see the same time.
    pub fn update(&mut self) -> core::result::Result<(), B::Error> {
        let now = self.clock.now();
        self.update_at(now)
    }

    /// Advance every active entry to `now` and flush the buffer
    ///
    /// Entries are updated in insertion order, so a later entry overwrites an
    /// earlier one where their segments overlap. Finished entries are dropped.
    pub fn update_at(&mut self, now: Tick) -> core::result::Result<(), B::Error> {
        let entries = core::mem::take(&mut self.active);
        let frame = self.buffer.pixels_mut();
        for mut entry in entries {
            if entry.update(now, frame) {
                // Capacity matches the list taken above.
                let _ = self.active.push(entry);
            } else {
                #[cfg(feature = "esp32-log")]
                println!("[LightManager.update] {} finished", entry.name());
            }
        }
        self.buffer.flush()
    }

    /// Turn off every pixel and flush immediately
    ///
    /// Active entries keep running and repaint their segments on the next
    /// update.
    pub fn clear(&mut self) -> core::result::Result<(), B::Error> {
        self.buffer.fill(BLACK);
        self.buffer.flush()
    }

    /// Index of the first pixel of a segment
    pub const fn get_segment_start(&self, segment_index: usize) -> usize {
        segment_index * self.segment_length
    }

    /// Segment with the given index
    pub const fn segment(&self, segment_index: usize) -> Segment {
        Segment::new(self.get_segment_start(segment_index), self.segment_length)
    }

    pub const fn segment_length(&self) -> usize {
        self.segment_length
    }

    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of running animations and sequences
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }
}
