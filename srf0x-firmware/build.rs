//! Build script for srf0x-firmware
//!
//! - Passes linker scripts for cortex-m-rt and defmt
//! - Validates sensor.toml at compile time and emits it as constants

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use srf0x_core::{SensorConfig, SensorVariant};

fn main() {
    setup_linker();
    generate_config();
}

/// Linker scripts; memory.x comes from embassy-stm32's `memory-x` feature
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn fail(msg: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: invalid sensor.toml                                      ║\n\
        ╚══════════════════════════════════════════════════════════════════╝\n\
        {}\n",
        msg
    );
}

fn get_u32(table: &toml::Table, key: &str) -> Option<u32> {
    let value = table.get(key)?;
    match value.as_integer() {
        Some(v) => match u32::try_from(v) {
            Ok(v) => Some(v),
            Err(_) => fail(&format!("`{}` must fit in u32, got {}", key, v)),
        },
        None => fail(&format!("`{}` must be an integer", key)),
    }
}

/// Validate sensor.toml and write `sensor_config.rs` to OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=sensor.toml");

    let config_path = Path::new("sensor.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&format!("failed to read sensor.toml: {}", e)),
    };

    let root: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => fail(&format!("TOML syntax: {}", e)),
    };

    let Some(sensor) = root.get("sensor").and_then(|v| v.as_table()) else {
        fail("missing [sensor] section");
    };

    let (variant, variant_path) = match sensor.get("variant").and_then(|v| v.as_str()) {
        Some("srf04") => (SensorVariant::Srf04, "Srf04"),
        Some("srf05") => (SensorVariant::Srf05, "Srf05"),
        Some("hcsr04") => (SensorVariant::HcSr04, "HcSr04"),
        Some(other) => fail(&format!("unknown variant `{}`", other)),
        None => fail("[sensor] variant is required"),
    };

    let mut config = SensorConfig::for_variant(variant);
    if let Some(pulse) = get_u32(sensor, "trigger_pulse_us") {
        config = config.with_trigger_pulse_us(pulse);
    }
    if let Some(timeout) = get_u32(sensor, "echo_timeout_us") {
        config = config.with_timeout_us(timeout);
    }
    if let Err(e) = config.validate() {
        fail(&format!("[sensor]: {}", e));
    }

    let interval_ms = root
        .get("sampling")
        .and_then(|v| v.as_table())
        .and_then(|t| get_u32(t, "interval_ms"))
        .unwrap_or(variant.cooldown_ms() * 2);

    // Worst case a timed-out measurement blocks for both edge waits
    let worst_case_ms = config.echo_timeout_us * 2 / 1000;
    if interval_ms < variant.cooldown_ms() {
        fail(&format!(
            "[sampling] interval_ms = {} is below the {} ms settling interval",
            interval_ms,
            variant.cooldown_ms()
        ));
    }
    if interval_ms <= worst_case_ms {
        println!(
            "cargo:warning=interval_ms = {} does not exceed worst-case blocking of {} ms",
            interval_ms, worst_case_ms
        );
    }

    let generated = format!(
        "// Generated from sensor.toml by build.rs\n\
         pub const SENSOR_CONFIG: SensorConfig = SensorConfig::for_variant(SensorVariant::{})\n    \
         .with_trigger_pulse_us({})\n    \
         .with_timeout_us({});\n\
         pub const SAMPLE_INTERVAL_MS: u64 = {};\n",
        variant_path, config.trigger_pulse_us, config.echo_timeout_us, interval_ms
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("sensor_config.rs"), generated).unwrap();
}
