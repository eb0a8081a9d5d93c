//! Trigger pulse generation
//!
//! Holds the trigger line high for a window counted in core clock cycles.
//! Accuracy is one cycles-per-microsecond rounding step plus the cost of
//! a counter read.

use srf0x_hal::{CycleCounter, OutputPin};

/// Emit one trigger pulse lasting `cycles` core clock cycles
///
/// `cycles` comes from [`srf0x_core::Timing::trigger_cycles`], which is
/// never zero for a valid config.
pub fn emit_pulse<P, C>(pin: &mut P, counter: &mut C, cycles: u32)
where
    P: OutputPin,
    C: CycleCounter,
{
    pin.set_high();

    counter.reset();
    while counter.value() < cycles {
        core::hint::spin_loop();
    }

    pin.set_low();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranger::sim::{SimClock, SimCycles, SimTrigger};

    #[test]
    fn test_pulse_is_ten_microseconds() {
        let clock = SimClock::new(72_000_000);
        let mut pin = SimTrigger::new(&clock);
        let mut counter = SimCycles::new(&clock, 8);

        emit_pulse(&mut pin, &mut counter, 720);

        assert_eq!(clock.trigger_width_cycles(), Some(720));
        assert!(!clock.trigger_high.get());
    }

    #[test]
    fn test_pulse_within_rounding_granularity() {
        // 64.5 MHz truncates to 64 cycles per microsecond
        let clock = SimClock::new(64_500_000);
        let mut pin = SimTrigger::new(&clock);
        let mut counter = SimCycles::new(&clock, 4);

        emit_pulse(&mut pin, &mut counter, 64 * 10);

        let width_ns = clock.trigger_width_cycles().unwrap() * 1_000_000_000 / 64_500_000;
        assert!(width_ns <= 10_000);
        assert!(10_000 - width_ns < 1_000);
    }

    #[test]
    fn test_coarse_counter_overshoots_by_at_most_one_step() {
        let clock = SimClock::new(72_000_000);
        let mut pin = SimTrigger::new(&clock);
        let mut counter = SimCycles::new(&clock, 100);

        emit_pulse(&mut pin, &mut counter, 720);

        let width = clock.trigger_width_cycles().unwrap();
        assert!(width >= 720);
        assert!(width < 820);
    }
}
