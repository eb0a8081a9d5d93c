//! Simulated hardware for host tests
//!
//! A shared [`SimClock`] counts core clock cycles. Reading the cycle
//! counter is the only thing that advances time, so every poll loop
//! progresses deterministically. The echo line is scripted relative to
//! the trigger's falling edge, the way a real module starts its burst.

use core::cell::Cell;

use srf0x_hal::{CycleCounter, InputPin, OutputPin, Timer};

/// Simulated time base and sensor behaviour
pub struct SimClock {
    now: Cell<u64>,
    core_hz: u32,
    pub trigger_high: Cell<bool>,
    trigger_rose_at: Cell<Option<u64>>,
    trigger_fell_at: Cell<Option<u64>>,
    /// Echo rise delay after trigger (µs), `None` = never rises
    echo_rise_us: Cell<Option<u64>>,
    /// Echo width (µs), `None` = never falls
    echo_width_us: Cell<Option<u64>>,
    pulses: Cell<u32>,
}

impl SimClock {
    pub fn new(core_hz: u32) -> Self {
        Self {
            now: Cell::new(0),
            core_hz,
            trigger_high: Cell::new(false),
            trigger_rose_at: Cell::new(None),
            trigger_fell_at: Cell::new(None),
            echo_rise_us: Cell::new(None),
            echo_width_us: Cell::new(None),
            pulses: Cell::new(0),
        }
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn advance(&self, cycles: u64) {
        self.now.set(self.now.get() + cycles);
    }

    /// Cycles in `us` microseconds
    pub fn us(&self, us: u64) -> u64 {
        us * (self.core_hz / 1_000_000) as u64
    }

    pub fn script_echo(&self, rise_us: Option<u64>, width_us: Option<u64>) {
        self.echo_rise_us.set(rise_us);
        self.echo_width_us.set(width_us);
    }

    pub fn trigger_width_cycles(&self) -> Option<u64> {
        match (self.trigger_rose_at.get(), self.trigger_fell_at.get()) {
            (Some(rose), Some(fell)) if fell >= rose => Some(fell - rose),
            _ => None,
        }
    }

    pub fn trigger_pulses(&self) -> u32 {
        self.pulses.get()
    }

    fn echo_level(&self) -> bool {
        let Some(t0) = self.trigger_fell_at.get() else {
            return false;
        };
        let Some(rise) = self.echo_rise_us.get() else {
            return false;
        };
        let now = self.now();
        if now < t0 + self.us(rise) {
            return false;
        }
        match self.echo_width_us.get() {
            Some(width) => now < t0 + self.us(rise + width),
            None => true,
        }
    }
}

pub struct SimTrigger<'a> {
    clock: &'a SimClock,
}

impl<'a> SimTrigger<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self { clock }
    }
}

impl OutputPin for SimTrigger<'_> {
    fn set(&mut self, level: bool) {
        let was_high = self.clock.trigger_high.replace(level);
        if level && !was_high {
            self.clock.trigger_rose_at.set(Some(self.clock.now()));
            self.clock.trigger_fell_at.set(None);
        } else if !level && was_high {
            self.clock.trigger_fell_at.set(Some(self.clock.now()));
            self.clock.pulses.set(self.clock.pulses.get() + 1);
        }
    }
}

pub struct SimEcho<'a> {
    clock: &'a SimClock,
}

impl<'a> SimEcho<'a> {
    pub fn new(clock: &'a SimClock) -> Self {
        Self { clock }
    }
}

impl InputPin for SimEcho<'_> {
    fn read(&mut self) -> bool {
        self.clock.echo_level()
    }
}

/// Cycle counter advancing the clock by `step` cycles per read
pub struct SimCycles<'a> {
    clock: &'a SimClock,
    base: u64,
    step: u64,
    reported_hz: u32,
}

impl<'a> SimCycles<'a> {
    pub fn new(clock: &'a SimClock, step: u64) -> Self {
        Self {
            clock,
            base: clock.now(),
            step,
            reported_hz: clock.core_hz,
        }
    }

    /// Report a different frequency than the simulation runs at
    pub fn reporting(mut self, hz: u32) -> Self {
        self.reported_hz = hz;
        self
    }
}

impl CycleCounter for SimCycles<'_> {
    fn reset(&mut self) {
        self.base = self.clock.now();
    }

    fn value(&mut self) -> u32 {
        self.clock.advance(self.step);
        (self.clock.now() - self.base) as u32
    }

    fn frequency_hz(&self) -> u32 {
        self.reported_hz
    }
}

pub struct SimTimer<'a> {
    clock: &'a SimClock,
    tick_hz: u32,
    max_count: u32,
    started_at: Option<u64>,
    held_cycles: u64,
}

impl<'a> SimTimer<'a> {
    pub fn new(clock: &'a SimClock, tick_hz: u32) -> Self {
        Self {
            clock,
            tick_hz,
            max_count: u32::MAX,
            started_at: None,
            held_cycles: 0,
        }
    }

    pub fn with_max_count(mut self, max_count: u32) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

impl Timer for SimTimer<'_> {
    fn reset(&mut self) {
        self.held_cycles = 0;
        if self.started_at.is_some() {
            self.started_at = Some(self.clock.now());
        }
    }

    fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
        }
    }

    fn stop(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.held_cycles += self.clock.now() - started;
        }
    }

    fn count(&self) -> u32 {
        let running = self.started_at.map_or(0, |s| self.clock.now() - s);
        let cycles = self.held_cycles + running;
        let ticks = cycles * self.tick_hz as u64 / self.clock.core_hz as u64;
        (ticks % (self.max_count as u64 + 1)) as u32
    }

    fn tick_rate_hz(&self) -> u32 {
        self.tick_hz
    }

    fn max_count(&self) -> u32 {
        self.max_count
    }
}
