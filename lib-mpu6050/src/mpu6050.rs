use detection::{Sample, SampleSource, SensorReadError};
use embedded_hal::{delay::DelayNs, i2c::I2c};
use math::Vector;

use crate::{registers::*, AccelScaleRange, ClockSource, DLPFMode, Mpu6050Error, MPU6050_DEFAULT_I2C_ADDR, MPU6050_DEVICE_ID};
use crate::utils::*;

pub struct Mpu6050<I2C>
{
    /// i2c channel that we actually use to communicate with the MPU6050 chip.
    i2c: I2C,

    /// i2c address that chip is located at.
    address: u8,

    accel_scale: AccelScaleRange,
}

impl<I2C: I2c> Mpu6050<I2C>
{
    /// Create a new MPU 6050 instance with the given I2C interface.
    ///
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, MPU6050_DEFAULT_I2C_ADDR)
    }

    /// Create a new MPU 6050 instance for a chip with AD0 pulled high (or otherwise moved).
    ///
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Mpu6050 {
            i2c,
            address,
            accel_scale: AccelScaleRange::default(),
        }
    }

    /// Gives the i2c bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Wakes the MPU6050 up, the chip powers on asleep.
    ///
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), I2C::Error> {
        self.set_register_value(PWR_MGMT_1, 0x00)?;
        delay.delay_ms(350);
        Ok(())
    }

    /// Brings the chip into the state the detector expects: awake, checked, narrowest range and a
    /// low pass filter that keeps only the band earthquakes live in.
    ///
    pub fn setup<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Mpu6050Error<I2C::Error>> {
        log::info!("Configuring MPU6050");
        self.reset(delay)?;

        let id = self.get_device_id()?;
        if id != MPU6050_DEVICE_ID {
            log::error!("Unexpected device id {:#04x} at address {:#04x}", id, self.address);
            return Err(Mpu6050Error::UnexpectedDevice(id));
        }

        self.set_clock_source(ClockSource::GyroX)?;
        self.set_accel_scale(AccelScaleRange::G2)?;
        self.set_dlpf_mode(DLPFMode::Bw20Hz)?;
        // 1khz / (1 + 9) = 100 Hz, faster than the detection loop polls.
        self.set_sample_rate_divider(9)?;
        Ok(())
    }

    pub fn set_accel_scale(&mut self, scale: AccelScaleRange) -> Result<(), I2C::Error> {
        self.set_register_value(ACCEL_CONFIG, scale.as_register())?;
        self.accel_scale = scale;
        Ok(())
    }

    pub fn get_accel_scale(&mut self) -> Result<AccelScaleRange, I2C::Error> {
        self.accel_scale = AccelScaleRange::from_register(self.get_register_value(ACCEL_CONFIG)?);
        Ok(self.accel_scale)
    }

    /// Get the current accelerometer sensor values (in g).
    ///
    pub fn get_accel(&mut self) -> Result<Vector, I2C::Error> {
        let mut data = [ 0u8; 6 ];
        self.i2c.write_read(self.address, &[ ACCEL_XOUT_H ], &mut data)?;
        let mut accel = [0.0f32; 3];
        for i in 0..3 {
            accel[i] = reg_to_f32(data[i*2], data[i*2+1]) / self.accel_scale.as_scale_factor();
        }
        Ok(Vector::from(accel))
    }

    pub fn get_device_id(&mut self) -> Result<u8, I2C::Error> {
        let value = self.get_register_value(WHO_AM_I)?;
        Ok((value & 0b0111_1110) >> 1)
    }

    /// Checks if the i2c connection with the MPU6050 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.get_device_id().map(|id| id == MPU6050_DEVICE_ID).unwrap_or(false)
    }

    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), I2C::Error> {
        let mut state = self.get_register_value(PWR_MGMT_1)?;
        state &= !(1 << SLEEP_BIT);
        if sleep {
            state |= 1 << SLEEP_BIT;
        }
        self.set_register_value(PWR_MGMT_1, state)
    }

    pub fn set_dlpf_mode(&mut self, mode: DLPFMode) -> Result<(), I2C::Error> {
        let mut state = self.get_register_value(CONFIG)?;
        state = (state & 0b1111_1000) | (mode as u8);
        self.set_register_value(CONFIG, state)
    }

    /// Sets the sample rate based on the divider using the following formula:
    /// `1khz / (1 + divider) = sample_rate`
    ///
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), I2C::Error> {
        self.set_register_value(SMPLRT_DIV, divider)
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), I2C::Error> {
        log::info!("Setting clock source={:?}", source);
        let mut state = self.get_register_value(PWR_MGMT_1)?;
        state = (state & 0b1111_1000) | (source as u8);
        self.set_register_value(PWR_MGMT_1, state)
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut state = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut state)?;
        Ok(state[0])
    }

    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[ register, value ])
    }
}

impl<I2C: I2c> SampleSource for Mpu6050<I2C>
{
    fn read_sample(&mut self) -> Result<Sample, SensorReadError> {
        self.get_accel().map_err(|err| {
            log::warn!("Reading MPU6050 accelerometer failed: {:?}", err);
            SensorReadError::Bus
        })
    }
}
