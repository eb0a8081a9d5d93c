//! SRF0x - Ultrasonic Ranger Firmware
//!
//! Demo firmware for STM32G4 boards with an SRF04/SRF05/HC-SR04 module:
//!
//! - PA0: trigger (push-pull output)
//! - PA1: echo (input, pull-down; 5 V modules need a level shifter)
//! - TIM2: echo pulse timer at 1 MHz
//! - DWT: trigger window and edge-wait bounds

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use {defmt_rtt as _, panic_probe as _};

use srf0x_drivers::Srf0x;
use srf0x_hal::{EhInput, EhOutput};
use srf0x_hal_stm32::{DwtCycleCounter, TimPulseTimer};

use crate::config::{CORE_CLOCK_HZ, SENSOR_CONFIG};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("SRF0x firmware starting...");

    let p = embassy_stm32::init(Default::default());
    let mut core = unwrap!(cortex_m::Peripherals::take());
    info!("Peripherals initialized");

    let trigger = Output::new(p.PA0, Level::Low, Speed::VeryHigh);
    let echo = Input::new(p.PA1, Pull::Down);
    let cycles = DwtCycleCounter::new(&mut core.DCB, core.DWT, CORE_CLOCK_HZ);
    let timer = TimPulseTimer::new(p.TIM2);

    let mut sensor: tasks::Ranger = Srf0x::new(
        EhOutput(trigger),
        EhInput(echo),
        cycles,
        timer,
        SENSOR_CONFIG,
    );

    match sensor.initialize() {
        Ok(timing) => info!(
            "{} ready: {} us timeout, {} cycles/us, {} Hz timer",
            SENSOR_CONFIG.variant,
            SENSOR_CONFIG.echo_timeout_us,
            timing.cycles_per_us,
            timing.tick_hz
        ),
        Err(e) => {
            error!("Sensor rejected configuration: {}", e);
            return;
        }
    }

    spawner.spawn(tasks::ranger_task(sensor)).unwrap();
}
