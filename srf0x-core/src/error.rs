//! Measurement and configuration errors

use core::fmt;

/// Which echo edge a wait was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeStage {
    /// Echo line going high (burst sent, echo started)
    Rising,
    /// Echo line returning low (echo received)
    Falling,
}

/// Configuration values that make delay or tick computation impossible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cycle counter reports a 0 Hz core clock
    ZeroCoreClock,
    /// Core clock below 1 MHz gives zero cycles per microsecond
    CoreClockTooSlow,
    /// Timer reports a 0 Hz tick rate
    ZeroTickRate,
    /// Trigger pulse width of zero microseconds
    ZeroTriggerPulse,
    /// Echo timeout of zero microseconds
    ZeroTimeout,
    /// Delay or timeout does not fit the cycle counter or timer range
    TimeoutOverflow,
}

/// Errors surfaced by a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No edge observed within the bound: sensor disconnected, target out
    /// of range, or echo missed
    Timeout(EdgeStage),
    /// Clock, tick rate or timing parameters are unusable
    InvalidConfiguration(ConfigError),
}

impl Error {
    /// Check if this is a timeout (as opposed to a configuration fault)
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::InvalidConfiguration(e)
    }
}

impl fmt::Display for EdgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeStage::Rising => f.write_str("rising edge"),
            EdgeStage::Falling => f.write_str("falling edge"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::ZeroCoreClock => "core clock frequency is zero",
            ConfigError::CoreClockTooSlow => "core clock is below 1 MHz",
            ConfigError::ZeroTickRate => "timer tick rate is zero",
            ConfigError::ZeroTriggerPulse => "trigger pulse width is zero",
            ConfigError::ZeroTimeout => "echo timeout is zero",
            ConfigError::TimeoutOverflow => "timeout exceeds counter range",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Timeout(stage) => write!(f, "timed out waiting for echo {}", stage),
            Error::InvalidConfiguration(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}
