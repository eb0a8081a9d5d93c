//! General-purpose timer as the echo pulse timer
//!
//! The timer is prescaled to count as close to 1 MHz as the timer clock
//! allows and free-runs over its full 16-bit range. The reported tick
//! rate is the actual one, so drivers scale when the timer clock is not a
//! whole number of megahertz.

use embassy_stm32::timer::low_level::Timer as LlTimer;
use embassy_stm32::timer::CoreInstance;
use embassy_stm32::Peri;
use srf0x_hal::{Timer, ONE_MHZ};

/// Counter width of the core timer registers
const MAX_COUNT: u32 = u16::MAX as u32;

/// Echo pulse timer backed by an STM32 general-purpose timer
pub struct TimPulseTimer<'d, T: CoreInstance> {
    inner: LlTimer<'d, T>,
    tick_hz: u32,
}

impl<'d, T: CoreInstance> TimPulseTimer<'d, T> {
    /// Take a timer and configure it for 1 MHz counting
    ///
    /// The timer is left stopped.
    pub fn new(tim: Peri<'d, T>) -> Self {
        let inner = LlTimer::new(tim);
        inner.stop();

        let timer_clk = inner.get_clock_frequency().0;
        let psc = (timer_clk / ONE_MHZ).clamp(1, u16::MAX as u32 + 1) - 1;
        let tick_hz = timer_clk / (psc + 1);

        let regs = inner.regs_core();
        regs.psc().write_value(psc as u16);
        regs.arr().write(|r| r.set_arr(u16::MAX));
        // Latch the prescaler now rather than at the first overflow
        regs.egr().write(|r| r.set_ug(true));
        regs.sr().write(|r| r.set_uif(false));

        #[cfg(feature = "defmt")]
        defmt::debug!("pulse timer: {} Hz clock, psc {}, {} Hz ticks", timer_clk, psc, tick_hz);

        Self { inner, tick_hz }
    }
}

impl<'d, T: CoreInstance> Timer for TimPulseTimer<'d, T> {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn start(&mut self) {
        self.inner.start();
    }

    fn stop(&mut self) {
        self.inner.stop();
    }

    fn count(&self) -> u32 {
        self.inner.regs_core().cnt().read().cnt() as u32
    }

    fn tick_rate_hz(&self) -> u32 {
        self.tick_hz
    }

    fn max_count(&self) -> u32 {
        MAX_COUNT
    }
}
