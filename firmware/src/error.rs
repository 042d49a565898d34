use core::{error::Error, fmt};

use detection::MonitorError;
use esp_hal::i2c::master::Error as I2cError;
use mpu6050::Mpu6050Error;


#[derive(Debug)]
pub enum AppError
{
    Sensor(Mpu6050Error<I2cError>),
    Monitor(MonitorError),
}

impl Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sensor(err) => write!(f, "MPU6050 error: {}", err),
            Self::Monitor(err) => write!(f, "Detection error: {}", err),
        }
    }
}

impl From<Mpu6050Error<I2cError>> for AppError
{
    fn from(err: Mpu6050Error<I2cError>) -> Self {
        AppError::Sensor(err)
    }
}

impl From<MonitorError> for AppError
{
    fn from(err: MonitorError) -> Self {
        AppError::Monitor(err)
    }
}
