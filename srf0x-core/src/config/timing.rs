//! Timing derived from a config and the reported hardware rates
//!
//! Derivation is a pure function of its inputs, redone for each
//! measurement, so nothing carries over between calls.

use crate::config::SensorConfig;
use crate::convert::ticks_to_microseconds;
use crate::error::ConfigError;

const HZ_PER_MHZ: u32 = 1_000_000;

/// Cycle and tick budgets for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Core clock cycles per microsecond (rounded down)
    pub cycles_per_us: u32,
    /// Cycles the trigger line is held high
    pub trigger_cycles: u32,
    /// Default edge-wait bound in cycles
    pub timeout_cycles: u32,
    /// Timer tick rate (Hz)
    pub tick_hz: u32,
    /// Largest count the timer holds
    pub timer_max_count: u32,
}

impl Timing {
    /// Derive timing from a config and the rates the hardware reports
    ///
    /// # Arguments
    /// - `config`: sensor parameters
    /// - `core_clock_hz`: cycle counter frequency
    /// - `tick_hz`: timer tick rate
    /// - `timer_max_count`: timer wrap limit
    pub fn derive(
        config: &SensorConfig,
        core_clock_hz: u32,
        tick_hz: u32,
        timer_max_count: u32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if core_clock_hz == 0 {
            return Err(ConfigError::ZeroCoreClock);
        }
        let cycles_per_us = core_clock_hz / HZ_PER_MHZ;
        if cycles_per_us == 0 {
            return Err(ConfigError::CoreClockTooSlow);
        }
        if tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let trigger_cycles = cycles_per_us
            .checked_mul(config.trigger_pulse_us)
            .ok_or(ConfigError::TimeoutOverflow)?;

        let mut timing = Self {
            cycles_per_us,
            trigger_cycles,
            timeout_cycles: 0,
            tick_hz,
            timer_max_count,
        };
        timing.timeout_cycles = timing.timeout_cycles(config.echo_timeout_us)?;
        Ok(timing)
    }

    /// Convert an edge-wait bound to cycles
    ///
    /// Fails if the bound is zero, overflows the 32-bit cycle counter, or
    /// would let the timer wrap before the falling-edge wait gives up.
    pub fn timeout_cycles(&self, timeout_us: u32) -> Result<u32, ConfigError> {
        if timeout_us == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let ticks = timeout_us as u64 * self.tick_hz as u64 / HZ_PER_MHZ as u64;
        if ticks > self.timer_max_count as u64 {
            return Err(ConfigError::TimeoutOverflow);
        }

        self.cycles_per_us
            .checked_mul(timeout_us)
            .ok_or(ConfigError::TimeoutOverflow)
    }

    /// Convert a timer count to microseconds at this tick rate
    pub fn ticks_to_us(&self, ticks: u32) -> u32 {
        ticks_to_microseconds(ticks, self.tick_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STM32_HCLK: u32 = 72_000_000;

    #[test]
    fn test_derive_at_72mhz() {
        let config = SensorConfig::default();
        let t = Timing::derive(&config, STM32_HCLK, 1_000_000, u32::MAX).unwrap();

        assert_eq!(t.cycles_per_us, 72);
        assert_eq!(t.trigger_cycles, 720);
        assert_eq!(t.timeout_cycles, 72 * 35_000);
    }

    #[test]
    fn test_fractional_mhz_rounds_down() {
        // 64.5 MHz -> 64 cycles per microsecond
        let t = Timing::derive(&SensorConfig::default(), 64_500_000, 1_000_000, u32::MAX).unwrap();
        assert_eq!(t.cycles_per_us, 64);
        assert_eq!(t.trigger_cycles, 640);
    }

    #[test]
    fn test_zero_clock_is_config_error() {
        let config = SensorConfig::default();

        assert_eq!(
            Timing::derive(&config, 0, 1_000_000, u32::MAX),
            Err(ConfigError::ZeroCoreClock)
        );
        assert_eq!(
            Timing::derive(&config, 500_000, 1_000_000, u32::MAX),
            Err(ConfigError::CoreClockTooSlow)
        );
        assert_eq!(
            Timing::derive(&config, STM32_HCLK, 0, u32::MAX),
            Err(ConfigError::ZeroTickRate)
        );
    }

    #[test]
    fn test_timeout_must_fit_16bit_timer() {
        let config = SensorConfig::default().with_timeout_us(70_000);
        assert_eq!(
            Timing::derive(&config, STM32_HCLK, 1_000_000, u16::MAX as u32),
            Err(ConfigError::TimeoutOverflow)
        );

        let config = SensorConfig::default().with_timeout_us(60_000);
        assert!(Timing::derive(&config, STM32_HCLK, 1_000_000, u16::MAX as u32).is_ok());
    }

    #[test]
    fn test_timeout_must_fit_cycle_counter() {
        // 480 MHz * 10 s overflows 32 bits
        let t = Timing::derive(&SensorConfig::default(), 480_000_000, 1_000_000, u32::MAX).unwrap();
        assert_eq!(t.timeout_cycles(10_000_000), Err(ConfigError::TimeoutOverflow));
        assert_eq!(t.timeout_cycles(0), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_scaled_tick_rate() {
        let t = Timing::derive(&SensorConfig::default(), STM32_HCLK, 2_000_000, u32::MAX).unwrap();
        assert_eq!(t.ticks_to_us(1160), 580);
    }
}
