//! SRF0x Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the ranger driver consumes.
//! Chip-specific crates (STM32, etc.) implement them, so the trigger/echo
//! timing protocol is written once and unit-tested against fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (srf0x-firmware, etc.)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  srf0x-drivers (timing protocol)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  srf0x-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  srf0x-hal-   │       │  test fakes   │
//! │    stm32      │       │  (host only)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Trigger and echo lines
//! - [`counter::CycleCounter`] - Core-clock cycle counter for short delays
//! - [`timer::Timer`] - Pulse-width timer, nominally 1 MHz
//!
//! Pins from any `embedded-hal` 1.0 HAL can be used through
//! [`eh::EhOutput`] and [`eh::EhInput`].

#![no_std]
#![deny(unsafe_code)]

pub mod counter;
pub mod eh;
pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use counter::CycleCounter;
pub use eh::{EhInput, EhOutput};
pub use gpio::{InputPin, OutputPin};
pub use timer::{Timer, ONE_MHZ};
