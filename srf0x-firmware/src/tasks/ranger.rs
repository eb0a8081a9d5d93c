//! Periodic ranging task
//!
//! Owns the sensor and takes one blocking measurement per tick. Retry and
//! cooldown policy live here, not in the driver: a timed-out ping is just
//! logged and the next tick pings again after the settling interval.

use defmt::*;
use embassy_stm32::gpio::{Input, Output};
use embassy_stm32::peripherals::TIM2;
use embassy_time::{Duration, Ticker};

use srf0x_core::Error;
use srf0x_drivers::Srf0x;
use srf0x_hal::{EhInput, EhOutput};
use srf0x_hal_stm32::{DwtCycleCounter, TimPulseTimer};

use crate::config::SAMPLE_INTERVAL_MS;

/// Concrete sensor type for this board
pub type Ranger = Srf0x<
    EhOutput<Output<'static>>,
    EhInput<Input<'static>>,
    DwtCycleCounter,
    TimPulseTimer<'static, TIM2>,
>;

/// Consecutive timeouts before the sensor is reported as missing
const MISSING_AFTER: u32 = 10;

/// Ranging task - measures distance every `SAMPLE_INTERVAL_MS`
#[embassy_executor::task]
pub async fn ranger_task(mut sensor: Ranger) {
    info!("Ranger task started ({} ms interval)", SAMPLE_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut timeouts = 0u32;

    loop {
        ticker.next().await;

        match sensor.read_cm() {
            Ok(cm) => {
                if timeouts >= MISSING_AFTER {
                    info!("Sensor back after {} timeouts", timeouts);
                }
                timeouts = 0;
                info!("Distance: {} cm", cm);
            }
            Err(Error::Timeout(stage)) => {
                timeouts = timeouts.saturating_add(1);
                if timeouts == MISSING_AFTER {
                    warn!("No echo for {} pings - sensor disconnected?", timeouts);
                } else if timeouts < MISSING_AFTER {
                    debug!("No {} (out of range or missed echo)", stage);
                }
            }
            Err(e) => {
                // Configuration does not change at runtime; stop pinging
                error!("Measurement failed: {}", e);
                return;
            }
        }
    }
}
