use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

mod mpu6050;

/// In-memory register file standing in for the chip. Writes set the register pointer with their
/// first byte and store the rest, reads continue from the pointer.
///
pub struct FakeBus
{
    pub registers: [u8; 128],
    pub address: u8,
    pub failing: bool,
}

impl FakeBus
{
    pub fn new() -> Self {
        let mut registers = [0u8; 128];
        registers[crate::registers::WHO_AM_I as usize] = 0x68;
        registers[crate::registers::PWR_MGMT_1 as usize] = 0x40;
        FakeBus { registers, address: crate::MPU6050_DEFAULT_I2C_ADDR, failing: false }
    }

    pub fn set_accel_raw(&mut self, raw: [i16; 3]) {
        let start = crate::registers::ACCEL_XOUT_H as usize;
        for (i, value) in raw.iter().enumerate() {
            let bytes = value.to_be_bytes();
            self.registers[start + i * 2] = bytes[0];
            self.registers[start + i * 2 + 1] = bytes[1];
        }
    }
}

impl ErrorType for FakeBus
{
    type Error = ErrorKind;
}

impl I2c for FakeBus
{
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if self.failing || address != self.address {
            return Err(ErrorKind::Other);
        }
        let mut pointer = 0usize;
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    if let Some((register, values)) = bytes.split_first() {
                        pointer = *register as usize;
                        for value in values {
                            self.registers[pointer] = *value;
                            pointer += 1;
                        }
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[pointer];
                        pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Delay that does not wait, only keeps track of how long it was asked to.
#[derive(Default)]
pub struct NoDelay
{
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for NoDelay
{
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
