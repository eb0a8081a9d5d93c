//! Cycle counter abstraction
//!
//! A free-running counter incrementing at the core clock, used for the
//! sub-microsecond-accurate trigger window and for bounding echo waits.
//! On Cortex-M3 and above this is the DWT `CYCCNT` register.

/// Free-running core-clock cycle counter
pub trait CycleCounter {
    /// Reset the counter to zero
    fn reset(&mut self);

    /// Current counter value in core clock cycles
    ///
    /// The counter wraps at `u32::MAX`; callers compare with wrapping
    /// arithmetic.
    fn value(&mut self) -> u32;

    /// Core clock frequency the counter increments at, in Hz
    fn frequency_hz(&self) -> u32;
}

impl<T: CycleCounter + ?Sized> CycleCounter for &mut T {
    fn reset(&mut self) {
        T::reset(self);
    }

    fn value(&mut self) -> u32 {
        T::value(self)
    }

    fn frequency_hz(&self) -> u32 {
        T::frequency_hz(self)
    }
}
