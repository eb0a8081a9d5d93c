//! Echo pulse-width timer
//!
//! Wraps the hardware timer so the driver only ever resets-and-starts it
//! at the rising edge and stops-and-reads it at the falling edge.

use srf0x_hal::Timer;

/// Pulse-width timer around a hardware [`Timer`]
pub struct PulseTimer<T> {
    timer: T,
}

impl<T: Timer> PulseTimer<T> {
    /// Wrap a configured hardware timer
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    /// Reset the count to zero and start counting
    pub fn start(&mut self) {
        self.timer.reset();
        self.timer.start();
    }

    /// Stop counting and return the accumulated ticks
    pub fn stop_and_read(&mut self) -> u32 {
        self.timer.stop();
        self.timer.count()
    }

    /// Stop counting, discarding the count
    pub fn halt(&mut self) {
        self.timer.stop();
    }

    /// Tick rate reported by the hardware (Hz)
    pub fn tick_rate_hz(&self) -> u32 {
        self.timer.tick_rate_hz()
    }

    /// Wrap limit reported by the hardware
    pub fn max_count(&self) -> u32 {
        self.timer.max_count()
    }

    /// Return the wrapped timer
    pub fn into_inner(self) -> T {
        self.timer
    }
}
