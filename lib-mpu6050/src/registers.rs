
pub const SMPLRT_DIV: u8 = 0x19;

pub const CONFIG: u8 = 0x1A;
pub const ACCEL_CONFIG: u8 = 0x1C;

pub const ACCEL_XOUT_H: u8 = 0x3B;

pub const PWR_MGMT_1: u8 = 0x6B;

pub const WHO_AM_I: u8 = 0x75;

/// `PWR_MGMT_1` bit that puts the chip to sleep.
pub const SLEEP_BIT: u8 = 6;
