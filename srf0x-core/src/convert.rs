//! Echo time to distance conversion
//!
//! Sound travels ~29 µs per centimeter in air, so a round trip takes 58 µs
//! per centimeter of one-way distance. This is a fixed approximation of
//! ~343 m/s; no temperature or altitude correction is applied.

const ONE_MHZ: u32 = 1_000_000;

/// Round-trip echo time per centimeter of distance (µs)
pub const US_PER_CM_ROUND_TRIP: u32 = 58;

/// Floating-point divisor for [`to_centimeters`]
pub const US_PER_CM_ROUND_TRIP_F32: f32 = 58.0;

/// Convert echo pulse width to one-way distance in centimeters
pub fn to_centimeters(microseconds: u32) -> f32 {
    microseconds as f32 / US_PER_CM_ROUND_TRIP_F32
}

/// Convert echo pulse width to millimeters using integer math
///
/// For targets without an FPU. Truncates toward zero.
pub fn to_millimeters(microseconds: u32) -> u32 {
    (microseconds as u64 * 10 / US_PER_CM_ROUND_TRIP as u64) as u32
}

/// Convert a timer count to microseconds
///
/// At 1 MHz this is the identity; other rates scale by
/// `1_000_000 / tick_hz`. Saturates at `u32::MAX`. A zero tick rate
/// yields zero (rejected earlier by timing derivation).
pub fn ticks_to_microseconds(ticks: u32, tick_hz: u32) -> u32 {
    if tick_hz == ONE_MHZ {
        return ticks;
    }
    if tick_hz == 0 {
        return 0;
    }
    let us = ticks as u64 * ONE_MHZ as u64 / tick_hz as u64;
    us.min(u32::MAX as u64) as u32
}
