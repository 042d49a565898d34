use detection::{SampleSource, SensorReadError};
use math::Vector;

use crate::{registers::*, *};
use super::{FakeBus, NoDelay};

#[test]
fn setup_wakes_and_configures_the_chip() {
    let mut mpu = Mpu6050::new(FakeBus::new());
    let mut delay = NoDelay::default();
    mpu.setup(&mut delay).unwrap();
    assert!(delay.total_ns >= 350_000_000);

    let bus = mpu.release();
    assert_eq!(bus.registers[PWR_MGMT_1 as usize], ClockSource::GyroX as u8);
    assert_eq!(bus.registers[ACCEL_CONFIG as usize], 0);
    assert_eq!(bus.registers[CONFIG as usize], DLPFMode::Bw20Hz as u8);
    assert_eq!(bus.registers[SMPLRT_DIV as usize], 9);
}

#[test]
fn setup_rejects_unknown_device() {
    let mut bus = FakeBus::new();
    bus.registers[WHO_AM_I as usize] = 0x70;
    let mut mpu = Mpu6050::new(bus);
    match mpu.setup(&mut NoDelay::default()) {
        Err(Mpu6050Error::UnexpectedDevice(id)) => assert_eq!(id, 0x38),
        other => panic!("expected unexpected device, got {:?}", other),
    }
}

#[test]
fn accel_is_scaled_to_g() {
    let mut bus = FakeBus::new();
    bus.set_accel_raw([8192, -4096, 16384]);
    let mut mpu = Mpu6050::new(bus);
    let accel = mpu.get_accel().unwrap();
    assert!(accel.approx_eq(&Vector::new(0.5, -0.25, 1.0), 1e-6));

    mpu.set_accel_scale(AccelScaleRange::G8).unwrap();
    let accel = mpu.get_accel().unwrap();
    assert!(accel.approx_eq(&Vector::new(2.0, -1.0, 4.0), 1e-6));
    assert_eq!(mpu.get_accel_scale().unwrap(), AccelScaleRange::G8);
}

#[test]
fn sample_source_reads_accel() {
    let mut bus = FakeBus::new();
    bus.set_accel_raw([0, 0, 16384]);
    let mut mpu = Mpu6050::new(bus);
    assert_eq!(mpu.read_sample(), Ok(Vector::new(0.0, 0.0, 1.0)));
}

#[test]
fn bus_failure_is_a_sensor_read_error() {
    let mut bus = FakeBus::new();
    bus.failing = true;
    let mut mpu = Mpu6050::new(bus);
    assert_eq!(mpu.read_sample(), Err(SensorReadError::Bus));
    assert!(!mpu.connection_okay());
}

#[test]
fn sleep_bit_is_toggled_in_place() {
    let mut mpu = Mpu6050::new(FakeBus::new());
    mpu.set_clock_source(ClockSource::GyroZ).unwrap();
    mpu.set_sleep(false).unwrap();
    assert_eq!(mpu.get_register_value(PWR_MGMT_1).unwrap(), ClockSource::GyroZ as u8);
    mpu.set_sleep(true).unwrap();
    assert_eq!(mpu.get_register_value(PWR_MGMT_1).unwrap(), 0x40 | ClockSource::GyroZ as u8);
}

#[test]
fn scale_range_register_round_trip() {
    for scale in [AccelScaleRange::G2, AccelScaleRange::G4, AccelScaleRange::G8, AccelScaleRange::G16] {
        assert_eq!(AccelScaleRange::from_register(scale.as_register()), scale);
    }
}

#[test]
fn wrong_address_fails() {
    let mut mpu = Mpu6050::with_address(FakeBus::new(), 0x69);
    assert!(mpu.get_device_id().is_err());
}
