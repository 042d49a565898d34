#![no_std]
#![no_main]

use core::cell::RefCell;
use cfg_if::cfg_if;
use critical_section::Mutex;
use detection::{DetectorConfig, Event, Monitor, ReadPolicy};
use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{Level, Output},
    i2c::master::{Config as I2cConfig, I2c},
    prelude::*,
};
use esp_println::println;

mod error;
mod sensor;
mod status;

use error::AppError;
use sensor::{setup_sensor, SystemTimer};

pub type Global<T> = Mutex<RefCell<Option<T>>>;

cfg_if! {
    if #[cfg(feature = "retry-reads")] {
        const READ_POLICY: ReadPolicy = ReadPolicy::Retry { attempts: 3, backoff_ms: 10 };
    } else {
        const READ_POLICY: ReadPolicy = ReadPolicy::Halt;
    }
}

const DETECTOR_CONFIG: DetectorConfig = DetectorConfig {
    read_policy: READ_POLICY,
    ..DetectorConfig::DEFAULT
};

/// Reports over the serial console, which is what the bridge on the other end of the USB cable
/// listens to.
///
fn report(event: &Event) {
    println!("{}", event);
}

/// Logs the fault and stops; the panic handler prints a backtrace and halts the chip.
///
fn halt(err: AppError) -> ! {
    log::error!("{}", err);
    panic!("Detection stopped: {}", err);
}

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init(esp_hal::Config::default());

    let leds = [
        Output::new(peripherals.GPIO2, Level::Low),
        Output::new(peripherals.GPIO3, Level::Low),
        Output::new(peripherals.GPIO4, Level::Low),
        Output::new(peripherals.GPIO5, Level::Low),
        Output::new(peripherals.GPIO6, Level::Low),
        Output::new(peripherals.GPIO7, Level::Low),
    ];
    status::setup(leds, peripherals.TIMG1);

    let i2c = I2c::new(peripherals.I2C0, I2cConfig { frequency: 400.kHz(), ..Default::default() })
        .with_sda(peripherals.GPIO0)
        .with_scl(peripherals.GPIO1);

    let mut delay = Delay::new();
    let mpu = match setup_sensor(i2c, &mut delay) {
        Ok(mpu) => mpu,
        Err(err) => halt(err),
    };

    let monitor = match Monitor::start(DETECTOR_CONFIG, mpu, SystemTimer::new(delay), report) {
        Ok(monitor) => monitor,
        Err(err) => halt(err.into()),
    };
    log::info!("Monitoring for earthquakes");

    match monitor.run() {
        Ok(never) => match never {},
        Err(err) => halt(err.into()),
    }
}
