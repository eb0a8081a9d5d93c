//! Sensor configuration
//!
//! Per-variant defaults and the validated parameter set a driver handle is
//! built with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::US_PER_CM_ROUND_TRIP;
use crate::error::ConfigError;

/// Trigger pulse width every supported module requires
pub const DEFAULT_TRIGGER_PULSE_US: u32 = 10;

/// Serialized config size bound (postcard varints)
pub const MAX_ENCODED_LEN: usize = 16;

/// Supported trigger/echo module families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorVariant {
    /// Devantech SRF04: 3 m rated, echo held ~36 ms with no target
    Srf04,
    /// Devantech SRF05 (separate trigger/echo mode): 4 m rated, echo
    /// times out at ~30 ms
    #[default]
    Srf05,
    /// HC-SR04 clone: 4 m rated, ~38 ms echo with no target
    HcSr04,
}

impl SensorVariant {
    /// Maximum rated range in centimeters
    pub const fn max_range_cm(self) -> u32 {
        match self {
            SensorVariant::Srf04 => 300,
            SensorVariant::Srf05 => 400,
            SensorVariant::HcSr04 => 400,
        }
    }

    /// Echo width at maximum rated range (µs)
    pub const fn max_echo_us(self) -> u32 {
        self.max_range_cm() * US_PER_CM_ROUND_TRIP
    }

    /// Default bound on each edge wait
    ///
    /// Covers the sensor's own no-target echo so a timeout means the
    /// module is absent or stuck, not merely out of range.
    pub const fn default_timeout_us(self) -> u32 {
        match self {
            SensorVariant::Srf04 => 40_000,
            SensorVariant::Srf05 => 35_000,
            SensorVariant::HcSr04 => 40_000,
        }
    }

    /// Settling interval the module needs between pings (ms)
    ///
    /// The driver does not enforce this; sampling policy is the caller's.
    pub const fn cooldown_ms(self) -> u32 {
        match self {
            SensorVariant::Srf04 => 10,
            SensorVariant::Srf05 => 50,
            SensorVariant::HcSr04 => 60,
        }
    }
}

/// Sensor configuration
///
/// Clock rates are not part of the config: they are reported by the
/// cycle counter and timer capabilities and checked at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// Module family
    pub variant: SensorVariant,
    /// Trigger pulse width (µs)
    pub trigger_pulse_us: u32,
    /// Default bound on each edge wait (µs)
    pub echo_timeout_us: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::for_variant(SensorVariant::default())
    }
}

impl SensorConfig {
    /// Create a config with the variant's defaults
    pub const fn for_variant(variant: SensorVariant) -> Self {
        Self {
            variant,
            trigger_pulse_us: DEFAULT_TRIGGER_PULSE_US,
            echo_timeout_us: variant.default_timeout_us(),
        }
    }

    /// Override the echo timeout
    pub const fn with_timeout_us(mut self, timeout_us: u32) -> Self {
        self.echo_timeout_us = timeout_us;
        self
    }

    /// Override the trigger pulse width
    pub const fn with_trigger_pulse_us(mut self, pulse_us: u32) -> Self {
        self.trigger_pulse_us = pulse_us;
        self
    }

    /// Check the parameters that do not depend on hardware rates
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_pulse_us == 0 {
            return Err(ConfigError::ZeroTriggerPulse);
        }
        if self.echo_timeout_us == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Config persistence errors
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Output buffer too small
    BufferTooSmall,
    /// Stored bytes are not a valid config
    Deserialize,
}

#[cfg(feature = "serde")]
impl SensorConfig {
    /// Serialize to postcard bytes, returning the used part of `buf`
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], CodecError> {
        postcard::to_slice(self, buf).map_err(|_| CodecError::BufferTooSmall)
    }

    /// Deserialize from postcard bytes
    ///
    /// The result is not validated; `initialize` on the driver does that.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        postcard::from_bytes(bytes).map_err(|_| CodecError::Deserialize)
    }
}
