use core::fmt;

/// A specialized result type for light sequencer operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Configuration and capacity errors.
///
/// Pixel buffer failures are not part of this enum, they are reported with
/// the buffer's own error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sequence was given a different number of animations and delays.
    LengthMismatch { animations: usize, delays: usize },
    /// A sequence has more steps than it can hold.
    TooManySteps { steps: usize, capacity: usize },
    /// A color transition segment is longer than the colors it can sample.
    SegmentTooLong { length: usize, capacity: usize },
    /// The manager has no room for another active entry.
    ActiveSetFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { animations, delays } => write!(
                f,
                "number of animations ({animations}) must match number of delays ({delays})"
            ),
            Self::TooManySteps { steps, capacity } => {
                write!(f, "sequence of {steps} steps exceeds capacity of {capacity}")
            }
            Self::SegmentTooLong { length, capacity } => write!(
                f,
                "segment of {length} pixels exceeds transition capacity of {capacity}"
            ),
            Self::ActiveSetFull => f.write_str("active set is full"),
        }
    }
}

impl core::error::Error for Error {}
