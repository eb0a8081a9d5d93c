//! SRF04/SRF05/HC-SR04 sensor handle
//!
//! The handle holds the trigger pin, echo pin, cycle counter and timer it
//! was given; it never configures them. Passing `&mut` capabilities keeps
//! ownership with the platform. Every operation takes `&mut self`, so one
//! measurement at a time is enforced by the borrow checker; sharing across
//! execution contexts needs an external mutex.

use srf0x_core::{to_centimeters, to_millimeters, Error, Event, SensorConfig, State, Timing};
use srf0x_hal::{CycleCounter, InputPin, OutputPin, Timer};

use super::echo::{wait_for_edge, EdgeTimeout};
use super::pulse_timer::PulseTimer;
use super::trigger::emit_pulse;

/// Ultrasonic ranger driver
pub struct Srf0x<TRIG, ECHO, CYC, TIM> {
    trigger: TRIG,
    echo: ECHO,
    cycles: CYC,
    timer: PulseTimer<TIM>,
    config: SensorConfig,
}

impl<TRIG, ECHO, CYC, TIM> Srf0x<TRIG, ECHO, CYC, TIM>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    CYC: CycleCounter,
    TIM: Timer,
{
    /// Create a new driver
    ///
    /// # Arguments
    /// - `trigger`: output connected to the module's trigger input
    /// - `echo`: input connected to the module's echo output
    /// - `cycles`: running core-clock cycle counter
    /// - `timer`: timer configured to count at (nominally) 1 MHz
    /// - `config`: sensor parameters
    pub fn new(trigger: TRIG, echo: ECHO, cycles: CYC, timer: TIM, config: SensorConfig) -> Self {
        Self {
            trigger,
            echo,
            cycles,
            timer: PulseTimer::new(timer),
            config,
        }
    }

    /// Sensor parameters this handle was built with
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Derive timing from the config and the rates the hardware reports
    pub fn timing(&self) -> Result<Timing, Error> {
        let timing = Timing::derive(
            &self.config,
            self.cycles.frequency_hz(),
            self.timer.tick_rate_hz(),
            self.timer.max_count(),
        )?;
        Ok(timing)
    }

    /// Validate configuration and park the trigger line low
    ///
    /// Performs no peripheral setup; pins, counter and timer must already
    /// be configured by the platform.
    pub fn initialize(&mut self) -> Result<Timing, Error> {
        let timing = self.timing().inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::error!("srf0x: {}", _e);
        })?;

        self.trigger.set_low();
        self.timer.halt();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "srf0x: {} ready, {} cycles/us, {} Hz timer",
            self.config.variant,
            timing.cycles_per_us,
            timing.tick_hz
        );

        Ok(timing)
    }

    /// Emit one trigger pulse of the configured width
    pub fn trigger(&mut self) -> Result<(), Error> {
        let timing = self.timing()?;
        emit_pulse(&mut self.trigger, &mut self.cycles, timing.trigger_cycles);
        Ok(())
    }

    /// Trigger and measure one echo pulse
    ///
    /// Blocks for the trigger window plus at most `timeout_us` per edge.
    /// Returns the echo width in microseconds.
    pub fn measure_pulse_microseconds(&mut self, timeout_us: u32) -> Result<u32, Error> {
        let timing = self.timing()?;
        let timeout_cycles = timing.timeout_cycles(timeout_us)?;

        let mut state = step(State::Idle, Event::Start);

        emit_pulse(&mut self.trigger, &mut self.cycles, timing.trigger_cycles);
        state = step(state, Event::PulseSent);

        let rose = wait_for_edge(&mut self.echo, &mut self.cycles, true, timeout_cycles);
        if let Err(EdgeTimeout) = rose {
            return Err(timed_out(state));
        }
        state = step(state, Event::EchoRose);

        self.timer.start();
        state = step(state, Event::TimerStarted);

        let fell = wait_for_edge(&mut self.echo, &mut self.cycles, false, timeout_cycles);
        if let Err(EdgeTimeout) = fell {
            // Never leave the timer running
            self.timer.halt();
            return Err(timed_out(state));
        }
        let ticks = self.timer.stop_and_read();
        step(state, Event::EchoFell);

        Ok(timing.ticks_to_us(ticks))
    }

    /// Trigger, measure and convert to centimeters
    pub fn measure_distance_centimeters(&mut self, timeout_us: u32) -> Result<f32, Error> {
        self.measure_pulse_microseconds(timeout_us).map(to_centimeters)
    }

    /// Measure echo width with the configured timeout
    pub fn read_us(&mut self) -> Result<u32, Error> {
        self.measure_pulse_microseconds(self.config.echo_timeout_us)
    }

    /// Measure distance in centimeters with the configured timeout
    pub fn read_cm(&mut self) -> Result<f32, Error> {
        self.read_us().map(to_centimeters)
    }

    /// Measure distance in whole millimeters with the configured timeout
    pub fn read_mm(&mut self) -> Result<u32, Error> {
        self.read_us().map(to_millimeters)
    }

    /// Release the capabilities
    pub fn release(self) -> (TRIG, ECHO, CYC, TIM) {
        (self.trigger, self.echo, self.cycles, self.timer.into_inner())
    }
}

fn step(state: State, event: Event) -> State {
    let next = state.transition(event);
    #[cfg(feature = "defmt")]
    defmt::trace!("srf0x: {} -> {}", state, next);
    next
}

fn timed_out(state: State) -> Error {
    match step(state, Event::EdgeTimeout) {
        State::Error(stage) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("srf0x: no echo {}", stage);
            Error::Timeout(stage)
        }
        // Only reachable from an edge wait
        other => unreachable!("timeout in {:?}", other),
    }
}
