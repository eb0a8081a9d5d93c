//! Configuration types
//!
//! Sensor parameters chosen by the application, and the timing values
//! derived from them together with the clock rates the hardware reports.

pub mod sensor;
pub mod timing;

pub use sensor::*;
pub use timing::*;
