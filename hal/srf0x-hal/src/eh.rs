//! Adapters from `embedded-hal` 1.0 digital pins
//!
//! Most HALs (embassy, rp-hal, nrf-hal, esp-hal) implement the
//! `embedded-hal` digital traits with an `Infallible` error. Wrapping such a
//! pin gives an [`OutputPin`] or [`InputPin`] without a chip-specific impl.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Trigger output backed by an `embedded-hal` output pin
pub struct EhOutput<P>(pub P);

/// Echo input backed by an `embedded-hal` input pin
pub struct EhInput<P>(pub P);

impl<P> EhOutput<P> {
    /// Return the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> EhInput<P> {
    /// Return the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set(&mut self, level: bool) {
        let state = if level {
            digital::PinState::High
        } else {
            digital::PinState::Low
        };
        infallible(self.0.set_state(state));
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn read(&mut self) -> bool {
        infallible(self.0.is_high())
    }
}
