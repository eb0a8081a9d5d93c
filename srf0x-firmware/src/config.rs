//! Firmware configuration
//!
//! Sensor parameters come from `sensor.toml`, validated and turned into
//! constants by build.rs. Board wiring is fixed here.

use srf0x_core::{SensorConfig, SensorVariant};

include!(concat!(env!("OUT_DIR"), "/sensor_config.rs"));

/// HCLK with embassy's default RCC setup on STM32G4 (HSI16)
pub const CORE_CLOCK_HZ: u32 = 16_000_000;
