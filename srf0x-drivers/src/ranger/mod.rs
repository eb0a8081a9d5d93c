//! Ultrasonic ranger driver
//!
//! One blocking measurement per call:
//!
//! ```text
//! trigger ──▶ wait rising ──▶ timer start ──▶ wait falling ──▶ timer read
//!                 │                               │
//!                 └──── Timeout(Rising)           └──── Timeout(Falling)
//! ```

pub mod echo;
pub mod pulse_timer;
pub mod srf0x;
pub mod trigger;

#[cfg(test)]
pub(crate) mod sim;

pub use echo::{wait_for_edge, EdgeTimeout};
pub use pulse_timer::PulseTimer;
pub use srf0x::Srf0x;
pub use trigger::emit_pulse;
