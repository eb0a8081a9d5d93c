//! Hardware timer abstraction
//!
//! The echo pulse width is measured by a hardware timer counting up from
//! zero. At [`ONE_MHZ`] one tick is one microsecond.

/// Nominal timer tick rate
pub const ONE_MHZ: u32 = 1_000_000;

/// Up-counting hardware timer
pub trait Timer {
    /// Reset the counter to zero without changing run state
    fn reset(&mut self);

    /// Start counting
    fn start(&mut self);

    /// Stop counting; the count is retained
    fn stop(&mut self);

    /// Current tick count
    fn count(&self) -> u32;

    /// Rate the counter increments at, in Hz
    fn tick_rate_hz(&self) -> u32;

    /// Largest count the timer holds before wrapping
    ///
    /// 16-bit timers must override this.
    fn max_count(&self) -> u32 {
        u32::MAX
    }
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn reset(&mut self) {
        T::reset(self);
    }

    fn start(&mut self) {
        T::start(self);
    }

    fn stop(&mut self) {
        T::stop(self);
    }

    fn count(&self) -> u32 {
        T::count(self)
    }

    fn tick_rate_hz(&self) -> u32 {
        T::tick_rate_hz(self)
    }

    fn max_count(&self) -> u32 {
        T::max_count(self)
    }
}
