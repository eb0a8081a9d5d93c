//! Board-agnostic core logic for SRF0x ultrasonic rangers
//!
//! This crate contains everything about a measurement that does not touch
//! hardware:
//!
//! - Sensor configuration and per-variant defaults
//! - Timing derivation (cycles per microsecond, timeout bounds)
//! - Error types shared by drivers and applications
//! - Measurement state machine
//! - Echo time to distance conversion

// Host tests link std for proptest
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod convert;
pub mod error;
pub mod state;

pub use config::{SensorConfig, SensorVariant, Timing};
pub use convert::{ticks_to_microseconds, to_centimeters, to_millimeters};
pub use error::{ConfigError, EdgeStage, Error};
pub use state::{Event, State};
