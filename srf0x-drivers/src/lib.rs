//! Hardware driver implementations
//!
//! This crate implements the blocking trigger/echo measurement for
//! ultrasonic rangers on top of the `srf0x-hal` capability traits:
//!
//! - Trigger pulse generation (cycle-counted busy wait)
//! - Bounded echo edge polling
//! - Pulse-width timing on a hardware timer
//! - The [`ranger::Srf0x`] handle sequencing one measurement per call

// Host tests link std for proptest
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ranger;

pub use ranger::Srf0x;
