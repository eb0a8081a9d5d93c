//! Events that advance a measurement

/// Events produced by the driver as a measurement progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Measurement requested
    Start,
    /// Trigger pulse emitted
    PulseSent,
    /// Echo line went high
    EchoRose,
    /// Pulse timer reset and running
    TimerStarted,
    /// Echo line returned low
    EchoFell,
    /// Edge wait exceeded its bound
    EdgeTimeout,
}
