#![allow(dead_code)]

use std::cell::Cell;

use light_sequencer::{Clock, OutputDriver, Rgb, Tick};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverError;

/// Driver that remembers what was written to it
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub writes: usize,
    pub last: Vec<Rgb>,
    pub fail: bool,
}

impl OutputDriver for RecordingDriver {
    type Error = DriverError;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(DriverError);
        }
        self.writes += 1;
        self.last = colors.to_vec();
        Ok(())
    }
}

/// Count pixels of `frame` equal to `color`
pub fn count(frame: &[Rgb], color: Rgb) -> usize {
    frame.iter().filter(|led| **led == color).count()
}

/// Clock reading a shared millisecond counter
#[derive(Debug, Clone, Copy)]
pub struct TestClock<'a>(pub &'a Cell<u32>);

impl Clock for TestClock<'_> {
    fn now(&self) -> Tick {
        Tick::from_millis(self.0.get())
    }
}
