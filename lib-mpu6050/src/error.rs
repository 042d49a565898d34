use core::{error::Error, fmt};

#[derive(Debug)]
pub enum Mpu6050Error<E>
{
    /// The i2c transaction failed.
    Bus(E),

    /// Something answered on the bus but it did not identify as an MPU6050.
    UnexpectedDevice(u8),
}

impl<E: fmt::Debug> Error for Mpu6050Error<E> {}

impl<E: fmt::Debug> fmt::Display for Mpu6050Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "I2C error: {:?}", err),
            Self::UnexpectedDevice(id) => write!(f, "Unexpected device id: {:#04x}", id),
        }
    }
}

impl<E> From<E> for Mpu6050Error<E>
{
    fn from(err: E) -> Self {
        Mpu6050Error::Bus(err)
    }
}
