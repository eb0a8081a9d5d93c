//! State machine for one measurement cycle
//!
//! Explicit, finite and single-shot: every measurement starts at
//! [`State::Idle`] and ends at [`State::Complete`] or [`State::Error`].

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
