//! Fire-and-forget triggers from other execution contexts.
//!
//! Note mappers, sensor tasks or interrupt handlers push new animations and
//! sequences through a [`TriggerChannel`]; the light manager drains it between
//! ticks with [`LightManager::process_triggers`](crate::LightManager::process_triggers).
//! The queue is a `heapless::Deque` guarded by a critical section, so it is
//! safe to share across interrupts and threads.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::animation::Animation;
use crate::error::Error;
use crate::manager::Entry;
use crate::sequence::Sequence;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Error returned when a sequence trigger cannot be sent.
#[derive(Debug, Clone)]
pub enum SendSequenceError<const STEPS: usize> {
    /// The sequence configuration is invalid, nothing was built
    Config(Error),
    /// The channel is full, the built entry is handed back
    Full(Entry<STEPS>),
}

/// Bounded queue of pending entries
///
/// STEPS is the maximum number of sequence steps, SIZE the queue length.
pub struct TriggerChannel<const STEPS: usize, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Entry<STEPS>, SIZE>>>,
}

impl<const STEPS: usize, const SIZE: usize> TriggerChannel<STEPS, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> TriggerSender<'_, STEPS, SIZE> {
        TriggerSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> TriggerReceiver<'_, STEPS, SIZE> {
        TriggerReceiver { channel: self }
    }

    fn try_send(&self, entry: Entry<STEPS>) -> Result<(), TrySendError<Entry<STEPS>>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(entry).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Result<Entry<STEPS>, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    fn pending(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }
}

impl<const STEPS: usize, const SIZE: usize> Default for TriggerChannel<STEPS, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`TriggerChannel`].
#[derive(Clone, Copy)]
pub struct TriggerSender<'a, const STEPS: usize, const SIZE: usize> {
    channel: &'a TriggerChannel<STEPS, SIZE>,
}

impl<const STEPS: usize, const SIZE: usize> TriggerSender<'_, STEPS, SIZE> {
    /// Queue an animation
    ///
    /// Returns `Err(TrySendError(entry))` if the channel is full.
    pub fn try_send_animation(
        &self,
        animation: impl Into<Animation>,
    ) -> Result<(), TrySendError<Entry<STEPS>>> {
        self.channel.try_send(Entry::Animation(animation.into()))
    }

    /// Validate and queue a sequence
    ///
    /// The sequence is checked here, so configuration errors reach the sender
    /// instead of being dropped by the manager.
    pub fn try_send_sequence(
        &self,
        animations: &[Animation],
        delays: &[Duration],
        replay_count: u32,
    ) -> Result<(), SendSequenceError<STEPS>> {
        let sequence =
            Sequence::new(animations, delays, replay_count).map_err(SendSequenceError::Config)?;
        self.channel
            .try_send(Entry::Sequence(sequence))
            .map_err(|TrySendError(entry)| SendSequenceError::Full(entry))
    }

    /// Queue an already built entry
    pub fn try_send(&self, entry: Entry<STEPS>) -> Result<(), TrySendError<Entry<STEPS>>> {
        self.channel.try_send(entry)
    }
}

/// Receiving half of a [`TriggerChannel`].
#[derive(Clone, Copy)]
pub struct TriggerReceiver<'a, const STEPS: usize, const SIZE: usize> {
    channel: &'a TriggerChannel<STEPS, SIZE>,
}

impl<const STEPS: usize, const SIZE: usize> TriggerReceiver<'_, STEPS, SIZE> {
    /// Try to take the oldest pending entry.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<Entry<STEPS>, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Number of queued entries
    pub fn pending(&self) -> usize {
        self.channel.pending()
    }
}
