//! DWT cycle counter
//!
//! `CYCCNT` increments once per core clock. Tracing must be enabled in
//! the DCB before the counter runs.

use cortex_m::peripheral::{DCB, DWT};
use srf0x_hal::CycleCounter;

/// Core-clock cycle counter backed by DWT `CYCCNT`
pub struct DwtCycleCounter {
    dwt: DWT,
    core_clock_hz: u32,
}

impl DwtCycleCounter {
    /// Enable tracing and start the cycle counter
    ///
    /// # Arguments
    /// - `dcb`: debug control block, used to enable trace
    /// - `dwt`: data watchpoint and trace unit (taken by value)
    /// - `core_clock_hz`: HCLK as configured by the platform's RCC setup
    pub fn new(dcb: &mut DCB, mut dwt: DWT, core_clock_hz: u32) -> Self {
        dcb.enable_trace();
        dwt.enable_cycle_counter();
        Self { dwt, core_clock_hz }
    }

    /// Return the DWT peripheral
    pub fn free(self) -> DWT {
        self.dwt
    }
}

impl CycleCounter for DwtCycleCounter {
    fn reset(&mut self) {
        self.dwt.set_cycle_count(0);
    }

    fn value(&mut self) -> u32 {
        DWT::cycle_count()
    }

    fn frequency_hz(&self) -> u32 {
        self.core_clock_hz
    }
}
