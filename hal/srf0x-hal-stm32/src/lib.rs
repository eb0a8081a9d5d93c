//! STM32-specific capabilities for the SRF0x ranger driver
//!
//! This crate provides STM32 implementations of the `srf0x-hal` timing
//! traits:
//!
//! - [`dwt::DwtCycleCounter`] - DWT `CYCCNT` cycle counter (Cortex-M3+)
//! - [`timer::TimPulseTimer`] - General-purpose timer prescaled to 1 MHz
//!
//! # Features
//!
//! - `stm32f103c8` - Blue Pill and similar boards
//! - `stm32g431cb` - STM32G4 boards
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! Trigger and echo pins come straight from embassy-stm32 wrapped in
//! [`srf0x_hal::EhOutput`] / [`srf0x_hal::EhInput`]; embassy GPIO
//! implements the `embedded-hal` traits with `Infallible` errors.

#![no_std]

pub mod dwt;
pub mod timer;

pub use dwt::DwtCycleCounter;
pub use timer::TimPulseTimer;
