//! State machine definition
//!
//! The driver's sequencing is a function of the current state and an
//! event. Out-of-order events leave the state unchanged.

use super::events::Event;
use crate::error::EdgeStage;

/// Measurement states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No measurement in progress
    #[default]
    Idle,
    /// Trigger line held high
    Triggering,
    /// Polling for the echo to start
    AwaitingRisingEdge,
    /// Echo started; pulse timer being started
    Measuring,
    /// Polling for the echo to end
    AwaitingFallingEdge,
    /// Pulse width captured
    Complete,
    /// Timed out waiting for the given edge
    Error(EdgeStage),
}

impl State {
    /// Check if this is an error state
    pub fn is_error(&self) -> bool {
        matches!(self, State::Error(_))
    }

    /// Check if the measurement has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Complete | State::Error(_))
    }

    /// Edge stage being waited on, if any
    pub fn awaiting(&self) -> Option<EdgeStage> {
        match self {
            State::AwaitingRisingEdge => Some(EdgeStage::Rising),
            State::AwaitingFallingEdge => Some(EdgeStage::Falling),
            _ => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, Start) => Triggering,
            (Triggering, PulseSent) => AwaitingRisingEdge,

            (AwaitingRisingEdge, EchoRose) => Measuring,
            (AwaitingRisingEdge, EdgeTimeout) => Error(EdgeStage::Rising),

            (Measuring, TimerStarted) => AwaitingFallingEdge,

            (AwaitingFallingEdge, EchoFell) => Complete,
            (AwaitingFallingEdge, EdgeTimeout) => Error(EdgeStage::Falling),

            // Default: stay in current state
            _ => self,
        }
    }
}
