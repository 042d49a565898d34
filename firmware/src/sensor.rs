use detection::{Clock, SampleSource};
use embedded_hal::delay::DelayNs;
use esp_hal::{delay::Delay, i2c::master::I2c, Blocking};
use mpu6050::Mpu6050;

use crate::error::AppError;

pub type Sensor = Mpu6050<I2c<'static, Blocking>>;

/// Wakes and configures the MPU6050, after this it can be used as the detector's sample source.
///
pub fn setup_sensor(i2c: I2c<'static, Blocking>, delay: &mut Delay) -> Result<Sensor, AppError> {
    let mut mpu = Mpu6050::new(i2c);
    mpu.setup(delay)?;

    // Throw away the first reading, it tends to be stale right after waking up.
    if let Err(err) = mpu.read_sample() {
        log::warn!("First MPU6050 reading failed: {}", err);
    }
    Ok(mpu)
}

/// Time source of the detection loop: the system timer for timestamps and a busy-wait delay for
/// the blocking pauses.
///
pub struct SystemTimer
{
    delay: Delay,
}

impl SystemTimer
{
    pub fn new(delay: Delay) -> Self {
        SystemTimer { delay }
    }
}

impl Clock for SystemTimer
{
    fn now_ms(&self) -> u64 {
        esp_hal::time::now().duration_since_epoch().to_millis()
    }
}

impl DelayNs for SystemTimer
{
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }
}
