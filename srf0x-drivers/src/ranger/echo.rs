//! Echo edge polling
//!
//! Waits for the echo line to reach a level. Every wait is bounded by the
//! cycle counter; the caller's state machine decides which stage a
//! timeout belongs to.

use srf0x_hal::{CycleCounter, InputPin};

/// Edge wait exceeded its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeTimeout;

/// Poll `pin` until it reads `target_level`
///
/// Returns the cycles spent waiting. A pin already at the target level
/// returns immediately with zero.
///
/// # Arguments
/// - `target_level`: `true` for the rising edge, `false` for the falling edge
/// - `timeout_cycles`: bound in core clock cycles
pub fn wait_for_edge<P, C>(
    pin: &mut P,
    counter: &mut C,
    target_level: bool,
    timeout_cycles: u32,
) -> Result<u32, EdgeTimeout>
where
    P: InputPin,
    C: CycleCounter,
{
    counter.reset();
    let mut waited = 0;

    loop {
        if pin.read() == target_level {
            return Ok(waited);
        }
        waited = counter.value();
        if waited >= timeout_cycles {
            return Err(EdgeTimeout);
        }
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranger::sim::{SimClock, SimCycles, SimEcho, SimTrigger};
    use srf0x_hal::OutputPin;

    const HZ: u32 = 72_000_000;

    fn fire_trigger(clock: &SimClock) {
        let mut trig = SimTrigger::new(clock);
        trig.set_high();
        trig.set_low();
    }

    #[test]
    fn test_already_at_level() {
        let clock = SimClock::new(HZ);
        let mut echo = SimEcho::new(&clock);
        let mut counter = SimCycles::new(&clock, 72);

        // Idle echo line reads low
        assert_eq!(wait_for_edge(&mut echo, &mut counter, false, 1000), Ok(0));
    }

    #[test]
    fn test_waits_for_rise() {
        let clock = SimClock::new(HZ);
        clock.script_echo(Some(100), Some(50));
        fire_trigger(&clock);

        let mut echo = SimEcho::new(&clock);
        let mut counter = SimCycles::new(&clock, 72);

        let waited = wait_for_edge(&mut echo, &mut counter, true, clock.us(1_000) as u32).unwrap();
        assert_eq!(waited as u64, clock.us(100));
        assert!(echo.read());
    }

    #[test]
    fn test_times_out_at_bound() {
        let clock = SimClock::new(HZ);
        clock.script_echo(None, None);
        fire_trigger(&clock);

        let mut echo = SimEcho::new(&clock);
        let mut counter = SimCycles::new(&clock, 72);
        let started = clock.now();

        let result = wait_for_edge(&mut echo, &mut counter, true, clock.us(2_000) as u32);

        assert_eq!(result, Err(EdgeTimeout));
        assert_eq!(clock.now() - started, clock.us(2_000));
    }
}
