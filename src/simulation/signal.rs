//! Traffic signal timing for the intersection
//!
//! A single millisecond counter drives both approaches. The counter maps
//! onto one of four phases, and each phase fixes the colour shown on each
//! axis, so the two axes can never both be released at once.

use log::debug;
use std::fmt;

use super::types::Axis;

/// Colour shown by a signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalColor {
    Green,
    Yellow,
    Red,
}

impl SignalColor {
    pub fn symbol(&self) -> char {
        match self {
            SignalColor::Green => 'G',
            SignalColor::Yellow => 'Y',
            SignalColor::Red => 'R',
        }
    }
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalColor::Green => "Green",
            SignalColor::Yellow => "Yellow",
            SignalColor::Red => "Red",
        };
        write!(f, "{}", name)
    }
}

/// Phase lengths in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalTiming {
    pub green_ms: u32,
    pub yellow_ms: u32,
    /// How long the north-south axis stays red (the west-east green and
    /// yellow together)
    pub red_ms: u32,
}

impl Default for SignalTiming {
    fn default() -> Self {
        Self {
            green_ms: 5000,
            yellow_ms: 1000,
            red_ms: 6000,
        }
    }
}

impl SignalTiming {
    pub fn cycle_ms(&self) -> u32 {
        self.green_ms
            .saturating_add(self.yellow_ms)
            .saturating_add(self.red_ms)
    }

    /// Phase for a counter value already inside [0, cycle)
    ///
    /// The west-east yellow starts strictly after `cycle - yellow`, so the
    /// tick landing exactly on that boundary still shows green.
    pub fn phase_at(&self, counter_ms: u32) -> SignalPhase {
        if counter_ms < self.green_ms {
            SignalPhase::NorthSouthGreen
        } else if counter_ms < self.green_ms.saturating_add(self.yellow_ms) {
            SignalPhase::NorthSouthYellow
        } else if counter_ms > self.cycle_ms().saturating_sub(self.yellow_ms) {
            SignalPhase::WestEastYellow
        } else {
            SignalPhase::WestEastGreen
        }
    }
}

/// One step of the signal cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalPhase {
    NorthSouthGreen,
    NorthSouthYellow,
    WestEastGreen,
    WestEastYellow,
}

impl SignalPhase {
    /// Colours for (north-south, west-east)
    pub fn colors(&self) -> (SignalColor, SignalColor) {
        use SignalColor::*;
        match self {
            SignalPhase::NorthSouthGreen => (Green, Red),
            SignalPhase::NorthSouthYellow => (Yellow, Red),
            SignalPhase::WestEastGreen => (Red, Green),
            SignalPhase::WestEastYellow => (Red, Yellow),
        }
    }

    /// The axis currently allowed to move (green or yellow)
    pub fn released_axis(&self) -> Axis {
        match self {
            SignalPhase::NorthSouthGreen | SignalPhase::NorthSouthYellow => Axis::NorthSouth,
            SignalPhase::WestEastGreen | SignalPhase::WestEastYellow => Axis::WestEast,
        }
    }
}

/// The signal controller shared by all four signal heads
#[derive(Debug, Clone)]
pub struct SignalController {
    pub timing: SignalTiming,
    /// Milliseconds into the current cycle, always below the cycle length
    counter_ms: u32,
    phase: SignalPhase,
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new(SignalTiming::default())
    }
}

impl SignalController {
    pub fn new(timing: SignalTiming) -> Self {
        Self {
            timing,
            counter_ms: 0,
            phase: timing.phase_at(0),
        }
    }

    /// Advance the counter by one tick
    ///
    /// Reaching the cycle length resets the counter to zero outright; any
    /// overshoot past the boundary is dropped rather than carried over.
    pub fn advance(&mut self, tick_ms: u32) {
        self.counter_ms = self.counter_ms.saturating_add(tick_ms);
        if self.counter_ms >= self.timing.cycle_ms() {
            self.counter_ms = 0;
        }

        let phase = self.timing.phase_at(self.counter_ms);
        if phase != self.phase {
            debug!(
                "Signal phase {:?} -> {:?} at {} ms",
                self.phase, phase, self.counter_ms
            );
            self.phase = phase;
        }
    }

    pub fn counter_ms(&self) -> u32 {
        self.counter_ms
    }

    pub fn phase(&self) -> SignalPhase {
        self.phase
    }

    pub fn color(&self, axis: Axis) -> SignalColor {
        let (north_south, west_east) = self.phase.colors();
        match axis {
            Axis::NorthSouth => north_south,
            Axis::WestEast => west_east,
        }
    }

    /// Colours for (north-south, west-east)
    pub fn colors(&self) -> (SignalColor, SignalColor) {
        self.phase.colors()
    }
}
